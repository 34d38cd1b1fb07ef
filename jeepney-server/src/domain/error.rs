//! Domain error types.
//!
//! These errors represent validation failures and lookup misses in the
//! domain layer. They are distinct from dataset/IO errors.

/// Domain-level errors for validation and lookup.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Route constructed with no coordinates
    #[error("route {0:?} must have at least one coordinate")]
    EmptyRoute(String),

    /// Lookup by name found no route
    #[error("route not found: {0}")]
    RouteNotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::EmptyRoute("R1 - Divisoria".into());
        assert_eq!(
            err.to_string(),
            "route \"R1 - Divisoria\" must have at least one coordinate"
        );

        let err = DomainError::RouteNotFound("R99".into());
        assert_eq!(err.to_string(), "route not found: R99");
    }
}
