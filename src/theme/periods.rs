use crate::api::PeriodHighlight;
use crate::render::Color;

/// One shaded span inside a period preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodSpan {
    pub name: &'static str,
    pub start: f64,
    pub end: f64,
    pub color: Color,
    pub alpha: f64,
    pub label: &'static str,
}

impl PeriodSpan {
    #[must_use]
    pub fn to_highlight(&self) -> PeriodHighlight {
        PeriodHighlight::new(self.name, self.start, self.end)
            .with_color(self.color, self.alpha)
            .with_label(self.label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodPreset {
    pub name: &'static str,
    pub description: &'static str,
    pub spans: &'static [PeriodSpan],
}

impl PeriodPreset {
    #[must_use]
    pub fn highlights(&self) -> Vec<PeriodHighlight> {
        self.spans.iter().map(PeriodSpan::to_highlight).collect()
    }
}

pub static PERIOD_PRESETS: [PeriodPreset; 4] = [
    PeriodPreset {
        name: "COVID-19",
        description: "Highlight COVID-19 period (2020-2021)",
        spans: &[PeriodSpan {
            name: "COVID-19",
            start: 2020.0,
            end: 2021.0,
            color: Color::from_rgb_u32(0xFF6B6B),
            alpha: 0.15,
            label: "COVID-19 Period",
        }],
    },
    PeriodPreset {
        name: "Great Recession",
        description: "Highlight Great Recession (2008-2009)",
        spans: &[PeriodSpan {
            name: "Great Recession",
            start: 2008.0,
            end: 2009.0,
            color: Color::from_rgb_u32(0x8B4513),
            alpha: 0.12,
            label: "Great Recession",
        }],
    },
    PeriodPreset {
        name: "Housing Crisis",
        description: "Highlight Housing Market Crisis (2007-2012)",
        spans: &[PeriodSpan {
            name: "Housing Crisis",
            start: 2007.0,
            end: 2012.0,
            color: Color::from_rgb_u32(0xDC143C),
            alpha: 0.1,
            label: "Housing Crisis",
        }],
    },
    PeriodPreset {
        name: "Interest Rate Hikes",
        description: "Highlight recent rate increase period",
        spans: &[PeriodSpan {
            name: "Rate Hikes",
            start: 2022.0,
            end: 2023.0,
            color: Color::from_rgb_u32(0xFFD700),
            alpha: 0.15,
            label: "Rate Increase Period",
        }],
    },
];
