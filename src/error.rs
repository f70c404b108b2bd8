use thiserror::Error;

/// Top-level error type for corridor measurement and compliance checks.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClearwayError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Compliance(#[from] ComplianceError),
}

/// Errors related to geometric construction and parameters.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeometryError {
    #[error("degenerate segment: start and end coincide at ({x}, {y})")]
    DegenerateSegment { x: f64, y: f64 },

    #[error("boundary has {0} usable edges, at least 3 are required for a closed room")]
    OpenBoundary(usize),

    #[error("invalid parameter {name} = {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Errors raised while reducing scan results to a corridor width.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OperationError {
    #[error(
        "cannot determine corridor width: none of {scanned} candidates is longer than {threshold} m"
    )]
    NoValidCandidate { threshold: f64, scanned: usize },
}

/// Errors related to the regulatory classification inputs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ComplianceError {
    #[error("use category {0} is outside the recognised range 1..=6")]
    InvalidCategory(i32),
}

/// Convenience type alias for results using [`ClearwayError`].
pub type Result<T> = std::result::Result<T, ClearwayError>;
