use crate::domain::errors::BoxError;

/// Source of fresh blob references
pub trait ReferenceGenerator: Send + Sync + 'static {
    /// Produce a new random hex reference
    fn generate(&self) -> Result<String, BoxError>;
}
