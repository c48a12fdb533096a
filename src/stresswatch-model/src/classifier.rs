use std::path::{Path, PathBuf};

use stresswatch_types::{Reading, StressLabel, StressLevel};

use crate::{LabelEncoder, ModelError, StandardScaler, StressModel};

/// Boundary between the rule logic and the pre-trained model.
pub trait StressClassifier {
    fn classify(&self, reading: &Reading) -> StressLabel;
}

/// Locations of the three fitted artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub scaler: PathBuf,
    pub label_encoder: PathBuf,
}

impl ArtifactPaths {
    pub const MODEL_FILE: &'static str = "stress_model.json";
    pub const SCALER_FILE: &'static str = "scaler.json";
    pub const LABEL_ENCODER_FILE: &'static str = "label_encoder.json";

    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            model: dir.join(Self::MODEL_FILE),
            scaler: dir.join(Self::SCALER_FILE),
            label_encoder: dir.join(Self::LABEL_ENCODER_FILE),
        }
    }
}

/// Scaler, model and label encoder loaded once and never mutated.
#[derive(Debug, Clone)]
pub struct ModelClassifier {
    scaler: StandardScaler,
    model: StressModel,
    encoder: LabelEncoder,
}

impl ModelClassifier {
    pub fn new(
        scaler: StandardScaler,
        model: StressModel,
        encoder: LabelEncoder,
    ) -> Result<Self, ModelError> {
        scaler.validate()?;
        model.validate()?;
        encoder.validate()?;

        if model.n_classes() != encoder.len() {
            return Err(ModelError::ClassCountMismatch {
                model: model.n_classes(),
                encoder: encoder.len(),
            });
        }

        Ok(Self {
            scaler,
            model,
            encoder,
        })
    }

    pub fn load(paths: &ArtifactPaths) -> Result<Self, ModelError> {
        let scaler = StandardScaler::load(&paths.scaler)?;
        let model = StressModel::load(&paths.model)?;
        let encoder = LabelEncoder::load(&paths.label_encoder)?;

        info!(
            "Loaded stress model with {} classes from {}",
            encoder.len(),
            paths.model.display()
        );

        Self::new(scaler, model, encoder)
    }

    pub fn classes(&self) -> &[String] {
        &self.encoder.classes
    }
}

impl StressClassifier for ModelClassifier {
    fn classify(&self, reading: &Reading) -> StressLabel {
        let scaled = self.scaler.transform(reading.features());
        let index = self.model.predict(&scaled);
        debug!("Scaled {:?} to {:?}, predicted class {}", reading, scaled, index);

        match self.encoder.inverse_transform(index) {
            Some(label) => StressLabel::new(label),
            None => {
                warn!("Class index {} has no label, treating as low stress", index);
                StressLabel::from(StressLevel::Low)
            }
        }
    }
}
