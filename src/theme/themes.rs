use crate::render::{Color, FontWeight};

use super::Theme;

/// Built-in colour themes, in menu order.
pub static THEMES: [Theme; 8] = [
    Theme {
        name: "Light",
        background: Color::from_rgb_u32(0xFFFFFF),
        grid: Color::from_rgb_u32(0xCCCCCC),
        text: Color::from_rgb_u32(0x000000),
        axis: Color::from_rgb_u32(0x000000),
        font_family: "sans-serif",
        font_size: 10.0,
        title_font_size: 16.0,
        title_weight: FontWeight::Bold,
        line_colors: &[
            Color::from_rgb_u32(0x1F77B4),
            Color::from_rgb_u32(0xFF7F0E),
            Color::from_rgb_u32(0x2CA02C),
            Color::from_rgb_u32(0xD62728),
            Color::from_rgb_u32(0x9467BD),
            Color::from_rgb_u32(0x8C564B),
            Color::from_rgb_u32(0xE377C2),
            Color::from_rgb_u32(0x7F7F7F),
            Color::from_rgb_u32(0xBCBD22),
            Color::from_rgb_u32(0x17BECF),
        ],
    },
    Theme {
        name: "Dark",
        background: Color::from_rgb_u32(0x1E1E1E),
        grid: Color::from_rgb_u32(0x404040),
        text: Color::from_rgb_u32(0xFFFFFF),
        axis: Color::from_rgb_u32(0xFFFFFF),
        font_family: "sans-serif",
        font_size: 10.0,
        title_font_size: 16.0,
        title_weight: FontWeight::Bold,
        line_colors: &[
            Color::from_rgb_u32(0x4A9EFF),
            Color::from_rgb_u32(0xFFA94D),
            Color::from_rgb_u32(0x51CF66),
            Color::from_rgb_u32(0xFF6B6B),
            Color::from_rgb_u32(0xBA8FFF),
            Color::from_rgb_u32(0xFFD43B),
            Color::from_rgb_u32(0xFF8787),
            Color::from_rgb_u32(0x94D82D),
            Color::from_rgb_u32(0x66D9EF),
            Color::from_rgb_u32(0xFFB84D),
        ],
    },
    Theme {
        name: "IMF Professional",
        background: Color::from_rgb_u32(0xFFFFFF),
        grid: Color::from_rgb_u32(0xE5E5E5),
        text: Color::from_rgb_u32(0x1A1A1A),
        axis: Color::from_rgb_u32(0x333333),
        font_family: "Arial",
        font_size: 10.0,
        title_font_size: 16.0,
        title_weight: FontWeight::Bold,
        line_colors: &[
            Color::from_rgb_u32(0x004B7B),
            Color::from_rgb_u32(0x1565C0),
            Color::from_rgb_u32(0x0097A7),
            Color::from_rgb_u32(0x00796B),
            Color::from_rgb_u32(0xF57C00),
            Color::from_rgb_u32(0xD32F2F),
            Color::from_rgb_u32(0x7B1FA2),
            Color::from_rgb_u32(0x5E35B1),
            Color::from_rgb_u32(0x1976D2),
            Color::from_rgb_u32(0x00BCD4),
        ],
    },
    Theme {
        name: "IMF Report",
        background: Color::from_rgb_u32(0xFAFAFA),
        grid: Color::from_rgb_u32(0xD0D0D0),
        text: Color::from_rgb_u32(0x1A1A1A),
        axis: Color::from_rgb_u32(0x333333),
        font_family: "Times New Roman",
        font_size: 11.0,
        title_font_size: 18.0,
        title_weight: FontWeight::Bold,
        line_colors: &[
            Color::from_rgb_u32(0x004B7B),
            Color::from_rgb_u32(0xE53935),
            Color::from_rgb_u32(0x388E3C),
            Color::from_rgb_u32(0xF57C00),
        ],
    },
    Theme {
        name: "World Bank Official",
        background: Color::from_rgb_u32(0xFFFFFF),
        grid: Color::from_rgb_u32(0xE0E0E0),
        text: Color::from_rgb_u32(0x212121),
        axis: Color::from_rgb_u32(0x424242),
        font_family: "Arial",
        font_size: 11.0,
        title_font_size: 18.0,
        title_weight: FontWeight::Bold,
        line_colors: &[
            Color::from_rgb_u32(0x003478),
            Color::from_rgb_u32(0x0C5AA0),
            Color::from_rgb_u32(0x1E88E5),
            Color::from_rgb_u32(0x00897B),
            Color::from_rgb_u32(0xF57F17),
            Color::from_rgb_u32(0xD32F2F),
            Color::from_rgb_u32(0x512DA8),
            Color::from_rgb_u32(0x388E3C),
            Color::from_rgb_u32(0x1976D2),
            Color::from_rgb_u32(0xC62828),
        ],
    },
    Theme {
        name: "World Bank Elegant",
        background: Color::from_rgb_u32(0xF5F5F5),
        grid: Color::from_rgb_u32(0xBDBDBD),
        text: Color::from_rgb_u32(0x1A1A1A),
        axis: Color::from_rgb_u32(0x333333),
        font_family: "Garamond",
        font_size: 10.0,
        title_font_size: 16.0,
        title_weight: FontWeight::Bold,
        line_colors: &[
            Color::from_rgb_u32(0x003478),
            Color::from_rgb_u32(0x0C5AA0),
            Color::from_rgb_u32(0x424242),
            Color::from_rgb_u32(0x00897B),
            Color::from_rgb_u32(0xF57F17),
        ],
    },
    Theme {
        name: "Publication",
        background: Color::from_rgb_u32(0xFFFFFF),
        grid: Color::from_rgb_u32(0xDDDDDD),
        text: Color::from_rgb_u32(0x000000),
        axis: Color::from_rgb_u32(0x000000),
        font_family: "serif",
        font_size: 9.0,
        title_font_size: 14.0,
        title_weight: FontWeight::Bold,
        line_colors: &[
            Color::from_rgb_u32(0x000000),
            Color::from_rgb_u32(0xCC0000),
            Color::from_rgb_u32(0x0000CC),
            Color::from_rgb_u32(0x00CC00),
            Color::from_rgb_u32(0xFF9900),
            Color::from_rgb_u32(0x9900CC),
            Color::from_rgb_u32(0x00CCCC),
            Color::from_rgb_u32(0xCC00CC),
            Color::from_rgb_u32(0x666666),
            Color::from_rgb_u32(0x333333),
        ],
    },
    Theme {
        name: "Accessible (Colorblind Safe)",
        background: Color::from_rgb_u32(0xFFFFFF),
        grid: Color::from_rgb_u32(0xD0D0D0),
        text: Color::from_rgb_u32(0x000000),
        axis: Color::from_rgb_u32(0x000000),
        font_family: "Segoe UI",
        font_size: 11.0,
        title_font_size: 18.0,
        title_weight: FontWeight::Bold,
        line_colors: &[
            Color::from_rgb_u32(0x0072B2),
            Color::from_rgb_u32(0xD55E00),
            Color::from_rgb_u32(0xE69F00),
            Color::from_rgb_u32(0x009E73),
            Color::from_rgb_u32(0xF0E442),
            Color::from_rgb_u32(0x56B4E9),
            Color::from_rgb_u32(0xCC79A7),
            Color::from_rgb_u32(0x000000),
        ],
    },
];

