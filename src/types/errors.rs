use thiserror::Error;

/// Fatal load-time failures. Anything that goes wrong after catalogs are
/// loaded is represented as data on the match result, never as an error.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },
    #[error("Schema violation in {path}: {message}")]
    Schema { path: String, message: String },
    #[error("Invalid pattern '{pattern}' for {brand} {model}: {message}")]
    InvalidPattern {
        brand: String,
        model: String,
        pattern: String,
        message: String,
    },
    #[error("Duplicate pattern '{pattern}' in {category} catalog (same format): {first} vs {second}")]
    DuplicatePattern {
        category: String,
        pattern: String,
        first: String,
        second: String,
    },
    #[error("Duplicate override '{text}' in section {section} (same format): {first} vs {second}")]
    DuplicateOverride {
        section: String,
        text: String,
        first: String,
        second: String,
    },
    #[error("Unknown format: {0}")]
    UnknownFormat(String),
    #[error("Unknown fiber: {0}")]
    UnknownFiber(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
