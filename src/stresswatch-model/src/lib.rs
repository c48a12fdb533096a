#[macro_use]
extern crate serde;

#[macro_use]
extern crate log;

mod error;
pub use error::ModelError;

mod artifact;

mod scaler;
pub use scaler::StandardScaler;

mod model;
pub use model::{DecisionTree, LinearModel, StressModel, TreeNode};

mod encoder;
pub use encoder::LabelEncoder;

mod classifier;
pub use classifier::{ArtifactPaths, ModelClassifier, StressClassifier};

/// Number of input features every artifact is fitted on: SpO₂ then heart rate.
pub const N_FEATURES: usize = 2;
