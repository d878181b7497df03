//! Error types
//!
//! Computing a CRC cannot fail.  The only error in the crate comes
//! from looking up a variant by name.
use thiserror::Error;

/// A CRC variant name that is not in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown CRC variant: {name:?}")]
pub struct ParseVariantError {
    /// The name that failed to parse
    pub name: String,
}
