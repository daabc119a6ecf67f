use crate::api::LegendLocation;
use crate::render::{Color, FontWeight, LineStrokeStyle};

use super::{GridLines, StylePreset};

/// Built-in style presets, in menu order.
pub static STYLE_PRESETS: [StylePreset; 21] = [
    StylePreset {
        name: "IMF Official",
        description: "International Monetary Fund official publication style",
        background: Color::from_rgb_u32(0xFFFFFF),
        text: Color::from_rgb_u32(0x000000),
        axis: Color::from_rgb_u32(0x333333),
        grid: Color::from_rgb_u32(0xD5D5D5),
        grid_lines: GridLines::Horizontal,
        grid_alpha: 0.5,
        grid_style: LineStrokeStyle::Dashed,
        font_family: "Arial",
        font_size: 11.0,
        title_font_size: 20.0,
        title_weight: FontWeight::Bold,
        legend_location: LegendLocation::Best,
        legend_columns: 1,
        legend_frame_alpha: 0.8,
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
    StylePreset {
        name: "World Bank Report",
        description: "World Bank publication and report style",
        background: Color::from_rgb_u32(0xFAFAFA),
        text: Color::from_rgb_u32(0x212121),
        axis: Color::from_rgb_u32(0x424242),
        grid: Color::from_rgb_u32(0xD0D0D0),
        grid_lines: GridLines::Horizontal,
        grid_alpha: 0.5,
        grid_style: LineStrokeStyle::Dashed,
        font_family: "Garamond",
        font_size: 10.0,
        title_font_size: 18.0,
        title_weight: FontWeight::Bold,
        legend_location: LegendLocation::LowerRight,
        legend_columns: 1,
        legend_frame_alpha: 0.85,
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
    StylePreset {
        name: "Professional Clean",
        description: "Professional presentation with horizontal gridlines",
        background: Color::from_rgb_u32(0xFFFFFF),
        text: Color::from_rgb_u32(0x1A1A1A),
        axis: Color::from_rgb_u32(0x333333),
        grid: Color::from_rgb_u32(0xD0D0D0),
        grid_lines: GridLines::Horizontal,
        grid_alpha: 0.5,
        grid_style: LineStrokeStyle::Solid,
        font_family: "Arial",
        font_size: 11.0,
        title_font_size: 18.0,
        title_weight: FontWeight::Bold,
        legend_location: LegendLocation::UpperRight,
        legend_columns: 1,
        legend_frame_alpha: 0.8,
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
    StylePreset {
        name: "Analytical Grid",
        description: "Analytical style with vertical gridlines for value reading",
        background: Color::from_rgb_u32(0xFFFFFF),
        text: Color::from_rgb_u32(0x1A1A1A),
        axis: Color::from_rgb_u32(0x333333),
        grid: Color::from_rgb_u32(0xD5D5D5),
        grid_lines: GridLines::Vertical,
        grid_alpha: 0.5,
        grid_style: LineStrokeStyle::Dotted,
        font_family: "Arial",
        font_size: 11.0,
        title_font_size: 16.0,
        title_weight: FontWeight::Bold,
        legend_location: LegendLocation::Best,
        legend_columns: 1,
        legend_frame_alpha: 0.8,
        line_colors: &[
            Color::from_rgb_u32(0x0063B2),
            Color::from_rgb_u32(0xD62728),
            Color::from_rgb_u32(0x2CA02C),
            Color::from_rgb_u32(0xFF7F0E),
            Color::from_rgb_u32(0x9467BD),
            Color::from_rgb_u32(0x8C564B),
            Color::from_rgb_u32(0xE377C2),
            Color::from_rgb_u32(0x7F7F7F),
            Color::from_rgb_u32(0xBCBD22),
            Color::from_rgb_u32(0x17BECF),
        ],
    },
    StylePreset {
        name: "Academic Journal",
        description: "Academic publication style with serif fonts",
        background: Color::from_rgb_u32(0xFFFFFF),
        text: Color::from_rgb_u32(0x000000),
        axis: Color::from_rgb_u32(0x000000),
        grid: Color::from_rgb_u32(0xE0E0E0),
        grid_lines: GridLines::Vertical,
        grid_alpha: 0.4,
        grid_style: LineStrokeStyle::Dotted,
        font_family: "Times New Roman",
        font_size: 10.0,
        title_font_size: 14.0,
        title_weight: FontWeight::Bold,
        legend_location: LegendLocation::Best,
        legend_columns: 1,
        legend_frame_alpha: 0.9,
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
    StylePreset {
        name: "Presentation",
        description: "Clean presentation style with bold typography",
        background: Color::from_rgb_u32(0xFAFAFA),
        text: Color::from_rgb_u32(0x2C3E50),
        axis: Color::from_rgb_u32(0x2C3E50),
        grid: Color::from_rgb_u32(0xE0E0E0),
        grid_lines: GridLines::Horizontal,
        grid_alpha: 0.45,
        grid_style: LineStrokeStyle::Solid,
        font_family: "Arial",
        font_size: 12.0,
        title_font_size: 22.0,
        title_weight: FontWeight::Bold,
        legend_location: LegendLocation::UpperRight,
        legend_columns: 1,
        legend_frame_alpha: 0.85,
        line_colors: &[
            Color::from_rgb_u32(0x1E90FF),
            Color::from_rgb_u32(0xFF6347),
            Color::from_rgb_u32(0x32CD32),
            Color::from_rgb_u32(0xFFD700),
            Color::from_rgb_u32(0x8A2BE2),
            Color::from_rgb_u32(0x00CED1),
            Color::from_rgb_u32(0xFF4500),
            Color::from_rgb_u32(0x2E8B57),
            Color::from_rgb_u32(0xDC143C),
            Color::from_rgb_u32(0x4169E1),
        ],
    },
    StylePreset {
        name: "Minimal Grid",
        description: "Minimal design with light gridlines",
        background: Color::from_rgb_u32(0xFFFFFF),
        text: Color::from_rgb_u32(0x333333),
        axis: Color::from_rgb_u32(0x666666),
        grid: Color::from_rgb_u32(0xE8E8E8),
        grid_lines: GridLines::Horizontal,
        grid_alpha: 0.3,
        grid_style: LineStrokeStyle::Dotted,
        font_family: "Helvetica",
        font_size: 10.0,
        title_font_size: 16.0,
        title_weight: FontWeight::Normal,
        legend_location: LegendLocation::Best,
        legend_columns: 1,
        legend_frame_alpha: 0.75,
        line_colors: &[
            Color::from_rgb_u32(0x0055B8),
            Color::from_rgb_u32(0xC00000),
            Color::from_rgb_u32(0x70AD47),
            Color::from_rgb_u32(0xED7D31),
            Color::from_rgb_u32(0x4472C4),
            Color::from_rgb_u32(0x5B9BD5),
            Color::from_rgb_u32(0xC55A11),
            Color::from_rgb_u32(0xA5A5A5),
            Color::from_rgb_u32(0x375623),
            Color::from_rgb_u32(0xFFC000),
        ],
    },
    StylePreset {
        name: "Full Grid",
        description: "Comprehensive gridlines on both axes",
        background: Color::from_rgb_u32(0xFFFFFF),
        text: Color::from_rgb_u32(0x1A1A1A),
        axis: Color::from_rgb_u32(0x333333),
        grid: Color::from_rgb_u32(0xCCCCCC),
        grid_lines: GridLines::Both,
        grid_alpha: 0.5,
        grid_style: LineStrokeStyle::Dashed,
        font_family: "Arial",
        font_size: 11.0,
        title_font_size: 16.0,
        title_weight: FontWeight::Bold,
        legend_location: LegendLocation::Best,
        legend_columns: 1,
        legend_frame_alpha: 0.8,
        line_colors: &[
            Color::from_rgb_u32(0x1F4E78),
            Color::from_rgb_u32(0x4472C4),
            Color::from_rgb_u32(0x70AD47),
            Color::from_rgb_u32(0xFFC000),
            Color::from_rgb_u32(0xED7D31),
            Color::from_rgb_u32(0x5B9BD5),
            Color::from_rgb_u32(0xA5A5A5),
            Color::from_rgb_u32(0xC55A11),
            Color::from_rgb_u32(0xC00000),
            Color::from_rgb_u32(0x375623),
        ],
    },
    StylePreset {
        name: "No Grid",
        description: "Clean style without gridlines",
        background: Color::from_rgb_u32(0xFFFFFF),
        text: Color::from_rgb_u32(0x1A1A1A),
        axis: Color::from_rgb_u32(0x333333),
        grid: Color::from_rgb_u32(0xFFFFFF),
        grid_lines: GridLines::None,
        grid_alpha: 0.0,
        grid_style: LineStrokeStyle::Solid,
        font_family: "Arial",
        font_size: 11.0,
        title_font_size: 16.0,
        title_weight: FontWeight::Bold,
        legend_location: LegendLocation::Best,
        legend_columns: 1,
        legend_frame_alpha: 0.8,
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
    StylePreset {
        name: "Dark Mode",
        description: "Modern dark theme for reduced eye strain",
        background: Color::from_rgb_u32(0x1E1E1E),
        text: Color::from_rgb_u32(0xFFFFFF),
        axis: Color::from_rgb_u32(0xFFFFFF),
        grid: Color::from_rgb_u32(0x404040),
        grid_lines: GridLines::Horizontal,
        grid_alpha: 0.4,
        grid_style: LineStrokeStyle::Solid,
        font_family: "Arial",
        font_size: 11.0,
        title_font_size: 18.0,
        title_weight: FontWeight::Bold,
        legend_location: LegendLocation::UpperRight,
        legend_columns: 1,
        legend_frame_alpha: 0.85,
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
    StylePreset {
        name: "Economic Data",
        description: "Full grid for detailed economic data analysis",
        background: Color::from_rgb_u32(0xFFFFFF),
        text: Color::from_rgb_u32(0x1A1A1A),
        axis: Color::from_rgb_u32(0x2C2C2C),
        grid: Color::from_rgb_u32(0xD5D5D5),
        grid_lines: GridLines::Both,
        grid_alpha: 0.45,
        grid_style: LineStrokeStyle::Dotted,
        font_family: "Arial",
        font_size: 10.0,
        title_font_size: 16.0,
        title_weight: FontWeight::Bold,
        legend_location: LegendLocation::UpperLeft,
        legend_columns: 1,
        legend_frame_alpha: 0.9,
        line_colors: &[
            Color::from_rgb_u32(0x003478),
            Color::from_rgb_u32(0xC00000),
            Color::from_rgb_u32(0x70AD47),
            Color::from_rgb_u32(0xED7D31),
            Color::from_rgb_u32(0x4472C4),
            Color::from_rgb_u32(0xA5A5A5),
            Color::from_rgb_u32(0xFFC000),
            Color::from_rgb_u32(0x5B9BD5),
            Color::from_rgb_u32(0x375623),
            Color::from_rgb_u32(0xC55A11),
        ],
    },
    StylePreset {
        name: "Business Full Grid",
        description: "Professional business style with comprehensive gridlines",
        background: Color::from_rgb_u32(0xF8F8F8),
        text: Color::from_rgb_u32(0x1C1C1C),
        axis: Color::from_rgb_u32(0x2C2C2C),
        grid: Color::from_rgb_u32(0xBDBDBD),
        grid_lines: GridLines::Both,
        grid_alpha: 0.5,
        grid_style: LineStrokeStyle::Dashed,
        font_family: "Calibri",
        font_size: 11.0,
        title_font_size: 18.0,
        title_weight: FontWeight::Bold,
        legend_location: LegendLocation::Best,
        legend_columns: 2,
        legend_frame_alpha: 0.85,
        line_colors: &[
            Color::from_rgb_u32(0x1F4E78),
            Color::from_rgb_u32(0xC00000),
            Color::from_rgb_u32(0x70AD47),
            Color::from_rgb_u32(0xFFC000),
            Color::from_rgb_u32(0x4472C4),
            Color::from_rgb_u32(0xED7D31),
            Color::from_rgb_u32(0xA5A5A5),
            Color::from_rgb_u32(0x5B9BD5),
            Color::from_rgb_u32(0xC55A11),
            Color::from_rgb_u32(0x375623),
        ],
    },
    StylePreset {
        name: "Scientific Full Grid",
        description: "Scientific publication with both axis gridlines",
        background: Color::from_rgb_u32(0xFFFFFF),
        text: Color::from_rgb_u32(0x000000),
        axis: Color::from_rgb_u32(0x000000),
        grid: Color::from_rgb_u32(0xCCCCCC),
        grid_lines: GridLines::Both,
        grid_alpha: 0.4,
        grid_style: LineStrokeStyle::Dashed,
        font_family: "Times New Roman",
        font_size: 9.0,
        title_font_size: 14.0,
        title_weight: FontWeight::Bold,
        legend_location: LegendLocation::UpperRight,
        legend_columns: 1,
        legend_frame_alpha: 0.95,
        line_colors: &[
            Color::from_rgb_u32(0x0063B2),
            Color::from_rgb_u32(0xDC143C),
            Color::from_rgb_u32(0x00A08A),
            Color::from_rgb_u32(0xF2AD00),
            Color::from_rgb_u32(0x5BBCD6),
            Color::from_rgb_u32(0xF98400),
            Color::from_rgb_u32(0x00A896),
            Color::from_rgb_u32(0xFF6F59),
            Color::from_rgb_u32(0x046C9A),
            Color::from_rgb_u32(0x9CC3D5),
        ],
    },
    StylePreset {
        name: "Corporate Light",
        description: "Light corporate style with horizontal gridlines",
        background: Color::from_rgb_u32(0xFAFAFA),
        text: Color::from_rgb_u32(0x2C2C2C),
        axis: Color::from_rgb_u32(0x3E3E3E),
        grid: Color::from_rgb_u32(0xE0E0E0),
        grid_lines: GridLines::Horizontal,
        grid_alpha: 0.45,
        grid_style: LineStrokeStyle::Solid,
        font_family: "Segoe UI",
        font_size: 11.0,
        title_font_size: 20.0,
        title_weight: FontWeight::Bold,
        legend_location: LegendLocation::UpperRight,
        legend_columns: 1,
        legend_frame_alpha: 0.8,
        line_colors: &[
            Color::from_rgb_u32(0x0055B8),
            Color::from_rgb_u32(0xE74C3C),
            Color::from_rgb_u32(0x27AE60),
            Color::from_rgb_u32(0xF39C12),
            Color::from_rgb_u32(0x9B59B6),
            Color::from_rgb_u32(0x1ABC9C),
            Color::from_rgb_u32(0x34495E),
            Color::from_rgb_u32(0xE67E22),
            Color::from_rgb_u32(0x3498DB),
            Color::from_rgb_u32(0x95A5A6),
        ],
    },
    StylePreset {
        name: "Data Journalism",
        description: "Modern journalism style with bold colors",
        background: Color::from_rgb_u32(0xFFFFFF),
        text: Color::from_rgb_u32(0x1A1A1A),
        axis: Color::from_rgb_u32(0x2C2C2C),
        grid: Color::from_rgb_u32(0xD8D8D8),
        grid_lines: GridLines::Horizontal,
        grid_alpha: 0.5,
        grid_style: LineStrokeStyle::Solid,
        font_family: "Georgia",
        font_size: 10.0,
        title_font_size: 22.0,
        title_weight: FontWeight::Bold,
        legend_location: LegendLocation::UpperLeft,
        legend_columns: 1,
        legend_frame_alpha: 0.85,
        line_colors: &[
            Color::from_rgb_u32(0xE63946),
            Color::from_rgb_u32(0x457B9D),
            Color::from_rgb_u32(0x2A9D8F),
            Color::from_rgb_u32(0xF4A261),
            Color::from_rgb_u32(0x264653),
            Color::from_rgb_u32(0xE76F51),
            Color::from_rgb_u32(0x8338EC),
            Color::from_rgb_u32(0x06AED5),
            Color::from_rgb_u32(0xFF006E),
            Color::from_rgb_u32(0xFB5607),
        ],
    },
    StylePreset {
        name: "Technical Analysis",
        description: "Vertical gridlines for precise value reading",
        background: Color::from_rgb_u32(0xFEFEFE),
        text: Color::from_rgb_u32(0x1A1A1A),
        axis: Color::from_rgb_u32(0x2C2C2C),
        grid: Color::from_rgb_u32(0xD0D0D0),
        grid_lines: GridLines::Vertical,
        grid_alpha: 0.5,
        grid_style: LineStrokeStyle::Dotted,
        font_family: "Arial",
        font_size: 10.0,
        title_font_size: 16.0,
        title_weight: FontWeight::Bold,
        legend_location: LegendLocation::LowerRight,
        legend_columns: 1,
        legend_frame_alpha: 0.85,
        line_colors: &[
            Color::from_rgb_u32(0x2E7D32),
            Color::from_rgb_u32(0xC62828),
            Color::from_rgb_u32(0x1565C0),
            Color::from_rgb_u32(0xF57C00),
            Color::from_rgb_u32(0x6A1B9A),
            Color::from_rgb_u32(0x00838F),
            Color::from_rgb_u32(0x558B2F),
            Color::from_rgb_u32(0xD84315),
            Color::from_rgb_u32(0x283593),
            Color::from_rgb_u32(0xEF6C00),
        ],
    },
    StylePreset {
        name: "Pastel Soft",
        description: "Soft pastel colors with minimal gridlines",
        background: Color::from_rgb_u32(0xFFFFFF),
        text: Color::from_rgb_u32(0x4A4A4A),
        axis: Color::from_rgb_u32(0x6A6A6A),
        grid: Color::from_rgb_u32(0xE8E8E8),
        grid_lines: GridLines::Horizontal,
        grid_alpha: 0.3,
        grid_style: LineStrokeStyle::Dotted,
        font_family: "Calibri",
        font_size: 11.0,
        title_font_size: 18.0,
        title_weight: FontWeight::Normal,
        legend_location: LegendLocation::UpperRight,
        legend_columns: 1,
        legend_frame_alpha: 0.75,
        line_colors: &[
            Color::from_rgb_u32(0xAEC6CF),
            Color::from_rgb_u32(0xFFB347),
            Color::from_rgb_u32(0xB39EB5),
            Color::from_rgb_u32(0xFF6961),
            Color::from_rgb_u32(0x77DD77),
            Color::from_rgb_u32(0xFDFD96),
            Color::from_rgb_u32(0xFFD1DC),
            Color::from_rgb_u32(0xC1E1C1),
            Color::from_rgb_u32(0xCFCFC4),
            Color::from_rgb_u32(0xFFE5B4),
        ],
    },
    StylePreset {
        name: "Monochrome Print",
        description: "Grayscale for black and white printing",
        background: Color::from_rgb_u32(0xFFFFFF),
        text: Color::from_rgb_u32(0x000000),
        axis: Color::from_rgb_u32(0x000000),
        grid: Color::from_rgb_u32(0xCCCCCC),
        grid_lines: GridLines::Vertical,
        grid_alpha: 0.5,
        grid_style: LineStrokeStyle::Dashed,
        font_family: "Times New Roman",
        font_size: 10.0,
        title_font_size: 16.0,
        title_weight: FontWeight::Bold,
        legend_location: LegendLocation::Best,
        legend_columns: 1,
        legend_frame_alpha: 0.9,
        line_colors: &[
            Color::from_rgb_u32(0x000000),
            Color::from_rgb_u32(0x4A4A4A),
            Color::from_rgb_u32(0x6E6E6E),
            Color::from_rgb_u32(0x929292),
            Color::from_rgb_u32(0xB6B6B6),
            Color::from_rgb_u32(0x333333),
            Color::from_rgb_u32(0x595959),
            Color::from_rgb_u32(0x808080),
            Color::from_rgb_u32(0xA8A8A8),
            Color::from_rgb_u32(0xCCCCCC),
        ],
    },
    StylePreset {
        name: "Vibrant Full Grid",
        description: "Bold vibrant colors with full reference grid",
        background: Color::from_rgb_u32(0xFAFAFA),
        text: Color::from_rgb_u32(0x212121),
        axis: Color::from_rgb_u32(0x212121),
        grid: Color::from_rgb_u32(0xD0D0D0),
        grid_lines: GridLines::Both,
        grid_alpha: 0.4,
        grid_style: LineStrokeStyle::Dotted,
        font_family: "Arial",
        font_size: 11.0,
        title_font_size: 20.0,
        title_weight: FontWeight::Bold,
        legend_location: LegendLocation::Best,
        legend_columns: 1,
        legend_frame_alpha: 0.8,
        line_colors: &[
            Color::from_rgb_u32(0xE91E63),
            Color::from_rgb_u32(0x9C27B0),
            Color::from_rgb_u32(0x3F51B5),
            Color::from_rgb_u32(0x00BCD4),
            Color::from_rgb_u32(0x4CAF50),
            Color::from_rgb_u32(0xFFEB3B),
            Color::from_rgb_u32(0xFF9800),
            Color::from_rgb_u32(0xF44336),
            Color::from_rgb_u32(0x009688),
            Color::from_rgb_u32(0x673AB7),
        ],
    },
    StylePreset {
        name: "Finance Report",
        description: "Financial reporting with conservative colors",
        background: Color::from_rgb_u32(0xFFFFFF),
        text: Color::from_rgb_u32(0x1A1A1A),
        axis: Color::from_rgb_u32(0x2C2C2C),
        grid: Color::from_rgb_u32(0xDADADA),
        grid_lines: GridLines::Both,
        grid_alpha: 0.4,
        grid_style: LineStrokeStyle::Solid,
        font_family: "Times New Roman",
        font_size: 10.0,
        title_font_size: 16.0,
        title_weight: FontWeight::Bold,
        legend_location: LegendLocation::UpperLeft,
        legend_columns: 1,
        legend_frame_alpha: 0.9,
        line_colors: &[
            Color::from_rgb_u32(0x003B5C),
            Color::from_rgb_u32(0x8B0000),
            Color::from_rgb_u32(0x006400),
            Color::from_rgb_u32(0xB8860B),
            Color::from_rgb_u32(0x191970),
            Color::from_rgb_u32(0x8B4513),
            Color::from_rgb_u32(0x2F4F4F),
            Color::from_rgb_u32(0x556B2F),
            Color::from_rgb_u32(0x8B008B),
            Color::from_rgb_u32(0x483D8B),
        ],
    },
    StylePreset {
        name: "Modern Flat",
        description: "Modern flat design with no gridlines",
        background: Color::from_rgb_u32(0xFFFFFF),
        text: Color::from_rgb_u32(0x2C3E50),
        axis: Color::from_rgb_u32(0x34495E),
        grid: Color::from_rgb_u32(0xFFFFFF),
        grid_lines: GridLines::None,
        grid_alpha: 0.0,
        grid_style: LineStrokeStyle::Solid,
        font_family: "Segoe UI",
        font_size: 11.0,
        title_font_size: 20.0,
        title_weight: FontWeight::Bold,
        legend_location: LegendLocation::UpperRight,
        legend_columns: 1,
        legend_frame_alpha: 0.8,
        line_colors: &[
            Color::from_rgb_u32(0x3498DB),
            Color::from_rgb_u32(0xE74C3C),
            Color::from_rgb_u32(0x2ECC71),
            Color::from_rgb_u32(0xF39C12),
            Color::from_rgb_u32(0x9B59B6),
            Color::from_rgb_u32(0x1ABC9C),
            Color::from_rgb_u32(0xE67E22),
            Color::from_rgb_u32(0x95A5A6),
            Color::from_rgb_u32(0x34495E),
            Color::from_rgb_u32(0x16A085),
        ],
    },
];
