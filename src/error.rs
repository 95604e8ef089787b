use thiserror::Error;

#[derive(Error, Debug)]
pub enum PucReportError {
    #[error("Duplicate account code in resolution scope: {0}")]
    DuplicateCode(String),

    #[error("Invalid distribution: service percentages sum to {total}, expected 100")]
    InvalidDistribution { total: f64 },

    #[error("Cyclic concept graph in registry '{registry}': cycle through concept '{concept}'")]
    CyclicConceptGraph { registry: String, concept: String },

    #[error("Invalid PUC code: {0}")]
    InvalidCode(String),

    #[error("Validation error in {scope}: {details}")]
    ValidationError { scope: String, details: String },

    #[error("Accounting identity violation: assets ({assets}) != liabilities ({liabilities}) + equity ({equity}), difference {difference} exceeds tolerance {tolerance}")]
    AccountingIdentityViolation {
        assets: i64,
        liabilities: i64,
        equity: i64,
        difference: i64,
        tolerance: i64,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PucReportError>;
