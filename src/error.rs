use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for curve studies.
#[derive(Debug, Error)]
pub enum CurveStudyError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Definition(#[from] DefinitionError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("cannot read asset {path}: {source}")]
    Asset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write script {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate line: a and b cannot both be zero")]
    DegenerateLine,

    #[error("invalid view window: x in [{min_x}, {max_x}], y in [{min_y}, {max_y}]")]
    InvalidWindow {
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
    },

    #[error("invalid parameter range [{start}, {end}]")]
    InvalidRange { start: f64, end: f64 },

    #[error("parameter {value} is not a finite number")]
    NonFiniteParameter { value: f64 },
}

/// Errors raised while validating a curve definition, before any rendering.
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("{what}: expected {expected} entries, found {found}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{what} must be a finite positive number, found {value}")]
    NotPositive { what: &'static str, value: f64 },

    #[error("curve without symmetry needs at least one trace range")]
    MissingTraceRange,

    #[error("unknown curve: {0}")]
    UnknownCurve(String),
}

/// Errors reported by the rendering collaborator.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("renderer failed: {0}")]
    Backend(String),

    #[error("unknown object id {0}")]
    UnknownObject(u64),
}

/// Errors related to settings files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read settings {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience type alias for results using [`CurveStudyError`].
pub type Result<T> = std::result::Result<T, CurveStudyError>;
