use std::fmt::Display;

use serde::Serialize;
use stresswatch_algos::{
    HeartbeatStatus, OxygenStatus, evaluate_heartbeat, evaluate_oxygen, suggestions,
};
use stresswatch_model::StressClassifier;
use stresswatch_types::{Reading, StressLabel};

/// Rule-based statuses, computed from the raw reading without the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VitalSigns {
    pub oxygen: OxygenStatus,
    pub heartbeat: HeartbeatStatus,
}

impl VitalSigns {
    pub fn evaluate(reading: &Reading) -> Self {
        Self {
            oxygen: evaluate_oxygen(reading.spo2),
            heartbeat: evaluate_heartbeat(reading.heart_rate),
        }
    }
}

impl Display for VitalSigns {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "🫁 Oxygen Status: {}\n💓 Heartbeat Status: {}",
            self.oxygen, self.heartbeat
        ))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub reading: Reading,
    pub stress: StressLabel,
    #[serde(flatten)]
    pub vitals: VitalSigns,
    pub suggestions: &'static [&'static str],
}

impl Display for Assessment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "❤️ Predicted Stress Level (ML): {}\n{}\n💡 Suggested Activities:",
            self.stress, self.vitals
        ))?;
        for tip in self.suggestions {
            f.write_fmt(format_args!("\n- {}", tip))?;
        }
        Ok(())
    }
}

/// Runs one reading through the classifier and the rule evaluators.
pub struct StressMonitor<C> {
    classifier: C,
}

impl<C: StressClassifier> StressMonitor<C> {
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    pub fn assess(&self, reading: Reading) -> Assessment {
        let stress = self.classifier.classify(&reading);
        if stress.is_fallback() {
            debug!("No stress keyword in label {:?}, using default suggestions", stress.raw);
        }
        let vitals = VitalSigns::evaluate(&reading);
        debug!(
            "{:?} -> stress {:?}, oxygen {:?}, heartbeat {:?}",
            reading, stress, vitals.oxygen, vitals.heartbeat
        );

        Assessment {
            reading,
            suggestions: suggestions(stress.level),
            stress,
            vitals,
        }
    }
}
