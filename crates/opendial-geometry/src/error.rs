//! Error types for dial geometry.

use thiserror::Error;

/// Validation errors for geometric parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// A dial must divide the circle into at least one sector.
    #[error("invalid sector count: {0} (a dial needs at least one sector)")]
    InvalidSectorCount(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_names_the_count() {
        let err = GeometryError::InvalidSectorCount(0);
        assert!(err.to_string().contains("invalid sector count: 0"));
    }

    #[test]
    fn test_error_is_std_error() {
        let err = GeometryError::InvalidSectorCount(0);
        let _: &dyn std::error::Error = &err;
    }
}
