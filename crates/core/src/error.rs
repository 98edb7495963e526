use serde::Serialize;

/// A single invalid request parameter.
///
/// Carries enough structure for the API layer to render field-level error
/// detail: where the parameter came from, which field, what constraint was
/// violated, and a machine-readable tag for clients that match on it.
#[derive(Debug, Clone, Serialize)]
pub struct ParamViolation {
    /// Parameter source, currently always `"query"`.
    pub location: &'static str,
    /// Parameter name, e.g. `"page"`.
    pub field: &'static str,
    /// Human-readable description of the violated constraint.
    pub message: String,
    /// Machine-readable error type tag, e.g. `"value_error.number.not_ge"`.
    pub code: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Invalid {} parameter: {}", .0.field, .0.message)]
    Validation(ParamViolation),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
