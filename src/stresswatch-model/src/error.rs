use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("{artifact} expects {expected} features, found {found}")]
    FeatureMismatch {
        artifact: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("scaler has an unusable scale {0} for feature {1}")]
    InvalidScale(f64, usize),
    #[error("scaler has a non-finite mean {0} for feature {1}")]
    InvalidMean(f64, usize),
    #[error("linear model has {coefficients} coefficient rows but {intercepts} intercepts")]
    RowCountMismatch {
        coefficients: usize,
        intercepts: usize,
    },
    #[error("model has no classes or nodes")]
    EmptyModel,
    #[error("tree node {0} is malformed")]
    InvalidNode(usize),
    #[error("model predicts {model} classes but label encoder knows {encoder}")]
    ClassCountMismatch { model: usize, encoder: usize },
    #[error("label encoder has no classes")]
    EmptyEncoder,
}
