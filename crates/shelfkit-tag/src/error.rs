use thiserror::Error;

#[derive(Debug, Error)]
pub enum TagError {
    #[error("unknown tag style {0}; expected 1 or 2")]
    InvalidStyle(i64),

    #[error("invalid tag record: {0}")]
    InvalidRecord(String),

    #[error("failed to serialize SVG: {0}")]
    Svg(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
