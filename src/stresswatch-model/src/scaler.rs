use std::path::Path;

use crate::{ModelError, N_FEATURES, artifact::read_json};

/// Per-feature standardisation, `(x - mean) / scale`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

impl StandardScaler {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let scaler: Self = read_json(path.as_ref())?;
        scaler.validate()?;
        Ok(scaler)
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        for found in [self.mean.len(), self.scale.len()] {
            if found != N_FEATURES {
                return Err(ModelError::FeatureMismatch {
                    artifact: "scaler",
                    expected: N_FEATURES,
                    found,
                });
            }
        }

        if let Some((i, &m)) = self.mean.iter().enumerate().find(|(_, m)| !m.is_finite()) {
            return Err(ModelError::InvalidMean(m, i));
        }

        if let Some((i, &s)) = self
            .scale
            .iter()
            .enumerate()
            .find(|(_, s)| !s.is_finite() || **s == 0.0)
        {
            return Err(ModelError::InvalidScale(s, i));
        }

        Ok(())
    }

    pub fn transform(&self, features: [f64; N_FEATURES]) -> [f64; N_FEATURES] {
        let mut scaled = [0.0; N_FEATURES];
        for (i, x) in features.into_iter().enumerate() {
            scaled[i] = (x - self.mean[i]) / self.scale[i];
        }
        scaled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scaler() -> StandardScaler {
        StandardScaler {
            mean: vec![90.0, 100.0],
            scale: vec![5.0, 20.0],
        }
    }

    #[test]
    fn transform_standardises_each_feature() {
        let scaled = scaler().transform([95.0, 80.0]);
        assert!((scaled[0] - 1.0).abs() < f64::EPSILON);
        assert!((scaled[1] + 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_wrong_feature_count() {
        let scaler = StandardScaler {
            mean: vec![90.0],
            scale: vec![5.0, 20.0],
        };
        assert!(matches!(
            scaler.validate(),
            Err(ModelError::FeatureMismatch { found: 1, .. })
        ));
    }

    #[test]
    fn rejects_zero_scale() {
        let scaler = StandardScaler {
            mean: vec![90.0, 100.0],
            scale: vec![5.0, 0.0],
        };
        assert!(matches!(
            scaler.validate(),
            Err(ModelError::InvalidScale(_, 1))
        ));
    }

    #[test]
    fn rejects_non_finite_mean() {
        let scaler = StandardScaler {
            mean: vec![f64::NAN, 100.0],
            scale: vec![5.0, 20.0],
        };
        assert!(matches!(
            scaler.validate(),
            Err(ModelError::InvalidMean(_, 0))
        ));

        let scaler = StandardScaler {
            mean: vec![90.0, f64::INFINITY],
            scale: vec![5.0, 20.0],
        };
        assert!(matches!(
            scaler.validate(),
            Err(ModelError::InvalidMean(_, 1))
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = StandardScaler::load("does/not/exist/scaler.json").unwrap_err();
        assert!(matches!(err, ModelError::Io { .. }));
    }
}
