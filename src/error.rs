use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("columns not found: {}", missing.join(", "))]
    ColumnNotFound { missing: Vec<String> },

    #[error("invalid chart input: {0}")]
    InvalidChartInput(String),

    #[error("unsupported export format `{format}`; expected one of: {}", supported.join(", "))]
    UnsupportedFormat {
        format: String,
        supported: Vec<&'static str>,
    },

    #[error("no chart rendered yet; render a chart before exporting")]
    NoChartRendered,

    #[error("{kind} `{name}` not found; available: {}", available.join(", "))]
    NotFound {
        kind: &'static str,
        name: String,
        available: Vec<String>,
    },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("no export backend available for `{0}` output")]
    BackendUnavailable(String),

    #[error("render backend error: {0}")]
    Backend(String),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ChartError {
    fn from(err: serde_json::Error) -> Self {
        ChartError::Config(err.to_string())
    }
}
