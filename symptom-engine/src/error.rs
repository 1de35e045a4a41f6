use thiserror::Error;

/// Errors raised while assembling a disease catalog.
///
/// These describe a misconfigured catalog and are reported once at
/// construction time; scoring and ranking never fail.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Catalog must contain at least one disease")]
    Empty,

    #[error("Disease name must not be empty")]
    EmptyName,

    #[error("Duplicate disease in catalog: {0}")]
    DuplicateName(String),

    #[error("Base prior for {disease} must be within (0, 1], got {prior}")]
    InvalidPrior { disease: String, prior: f64 },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
