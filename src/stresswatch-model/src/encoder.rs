use std::path::Path;

use crate::{ModelError, artifact::read_json};

/// Maps predicted class indices back to the labels the model was trained on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelEncoder {
    pub classes: Vec<String>,
}

impl LabelEncoder {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let encoder: Self = read_json(path.as_ref())?;
        encoder.validate()?;
        Ok(encoder)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.classes.is_empty() {
            return Err(ModelError::EmptyEncoder);
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn inverse_transform(&self, index: usize) -> Option<&str> {
        self.classes.get(index).map(String::as_str)
    }
}
