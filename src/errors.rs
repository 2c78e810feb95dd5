use thiserror::Error;

/// error types of the stoichiometry generator and the tracer cleaning
#[derive(Debug, Error)]
pub enum StoichError {
    #[error("Wrong Method: '{0}' (expected one of experimental, anderson, redfield, oxidation_states, redfield_oxidation_states)")]
    InvalidMethod(String),
    #[error("Invalid command line: {0}")]
    InvalidArgument(String),
    #[error("Invalid oxidation state sweep: {0}")]
    InvalidSweep(String),
    #[error("Output label '{0}' is produced more than once")]
    DuplicateLabel(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Malformed number '{value}' at line {line}")]
    MalformedNumber { line: usize, value: String },
    #[error("Column '{0}' not found in the profile header")]
    MissingColumn(String),
    #[error("R matrix must have 6 rows and 5 columns, found {rows}x{cols}")]
    MatrixShape { rows: usize, cols: usize },
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
    #[error("Seawater properties not computable: {0}")]
    Seawater(String),
    #[error("Line not recognized as a reaction equation: {0}")]
    UnrecognizedReaction(String),
}

pub type StoichResult<T> = Result<T, StoichError>;
