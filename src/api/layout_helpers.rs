/// Points to pixels at `dpi`.
pub(super) fn pt_to_px(points: f64, dpi: f64) -> f64 {
    points * dpi / 72.0
}

pub(super) fn estimate_label_text_width_px(text: &str, font_size_px: f64) -> f64 {
    // Keep this estimate deterministic and backend-independent.
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            '0'..='9' => 0.62,
            '.' | ',' => 0.34,
            '-' | '+' | '%' => 0.42,
            ' ' => 0.33,
            _ => 0.58,
        }
    });
    (units * font_size_px).max(font_size_px)
}

pub(super) fn estimate_text_height_px(font_size_px: f64) -> f64 {
    font_size_px * 1.2
}

/// Axis-aligned extent of a label after rotating it by `rotation_deg`.
pub(super) fn rotated_text_extent_px(text: &str, font_size_px: f64, rotation_deg: f64) -> (f64, f64) {
    let width = estimate_label_text_width_px(text, font_size_px);
    let height = estimate_text_height_px(font_size_px);
    if rotation_deg == 0.0 {
        return (width, height);
    }
    let (sin, cos) = rotation_deg.to_radians().sin_cos();
    (
        width * cos.abs() + height * sin.abs(),
        width * sin.abs() + height * cos.abs(),
    )
}

/// Largest rotated extent over `labels`, `(0, 0)` when there are none.
pub(super) fn max_text_extent_px<'a>(
    labels: impl IntoIterator<Item = &'a str>,
    font_size_px: f64,
    rotation_deg: f64,
) -> (f64, f64) {
    labels
        .into_iter()
        .map(|label| rotated_text_extent_px(label, font_size_px, rotation_deg))
        .fold((0.0_f64, 0.0_f64), |(width, height), (w, h)| {
            (width.max(w), height.max(h))
        })
}

#[cfg(test)]
mod tests {
    use super::{estimate_label_text_width_px, pt_to_px, rotated_text_extent_px};
    use approx::assert_relative_eq;

    #[test]
    fn points_scale_with_dpi() {
        assert_relative_eq!(pt_to_px(72.0, 100.0), 100.0);
        assert_relative_eq!(pt_to_px(10.0, 72.0), 10.0);
    }

    #[test]
    fn width_never_drops_below_font_size() {
        assert_relative_eq!(estimate_label_text_width_px(".", 10.0), 10.0);
        assert_relative_eq!(estimate_label_text_width_px("2020", 10.0), 24.8);
    }

    #[test]
    fn quarter_turn_swaps_extent() {
        let (width, height) = rotated_text_extent_px("2020", 10.0, 90.0);
        assert_relative_eq!(width, 12.0, epsilon = 1e-9);
        assert_relative_eq!(height, 24.8, epsilon = 1e-9);
    }
}
