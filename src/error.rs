//! Error types for the minimizer

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by mask parsing, function construction and minimization.
///
/// Every variant is a precondition violation: the input is rejected as a whole
/// and no partial result is produced.
#[derive(Error, Debug)]
pub enum Error {
    /// A mask string contained a character outside `{0, 1, x}`
    #[error("Malformed mask '{input}': invalid character '{character}' at position {position}")]
    MalformedMask {
        input: String,
        character: char,
        position: usize,
    },

    /// Two masks (or a mask and a domain) of different length were combined
    #[error("Incompatible length: expected {expected} positions, got {got}")]
    IncompatibleLength { expected: usize, got: usize },

    /// A minterm or don't-care index lies outside the truth table
    #[error("Index {index} is out of domain (truth table has {table_size} rows)")]
    IndexOutOfDomain { index: usize, table_size: usize },

    /// The same index was listed both as a term (minterm or maxterm) and as a don't-care
    #[error("Overlapping specification: index {index} is both a term and a don't-care")]
    OverlappingSpecification { index: usize },

    /// A symbolic operator was built without operands
    #[error("Symbolic {operator} requires at least one operand")]
    EmptyOperands { operator: &'static str },

    /// The domain has more variables than the minimizer accepts
    #[error("Domain too large: {variables} variables (limit is {limit})")]
    DomainTooLarge { variables: usize, limit: usize },

    #[error("Config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
