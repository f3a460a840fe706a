use thiserror::Error;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("workbook {path} has no sheets")]
    EmptyWorkbook { path: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("column \"{column}\" not found in {path}")]
    MissingColumn { path: String, column: String },

    #[error("invalid item file {path}: {source}")]
    ItemFile {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
