use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OxygenStatus {
    Normal,
    MildHypoxia,
    ModerateHypoxia,
    SevereHypoxia,
}

impl OxygenStatus {
    pub const NORMAL_MIN: f64 = 85.0;
    pub const MILD_MIN: f64 = 75.0;
    pub const MODERATE_MIN: f64 = 65.0;

    pub fn description(self) -> &'static str {
        match self {
            OxygenStatus::Normal => "🟢 Normal Oxygen Saturation (85–100%)",
            OxygenStatus::MildHypoxia => "🟡 Mild Hypoxia — Deep breathing recommended",
            OxygenStatus::ModerateHypoxia => "🟠 Moderate Hypoxia — Sit and breathe slowly",
            OxygenStatus::SevereHypoxia => "🔴 Severe Hypoxia — Seek medical help immediately!",
        }
    }
}

impl Display for OxygenStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// Bands use inclusive lower bounds. Values outside 40-100 are not rejected.
pub fn evaluate_oxygen(spo2: f64) -> OxygenStatus {
    if spo2 >= OxygenStatus::NORMAL_MIN {
        OxygenStatus::Normal
    } else if spo2 >= OxygenStatus::MILD_MIN {
        OxygenStatus::MildHypoxia
    } else if spo2 >= OxygenStatus::MODERATE_MIN {
        OxygenStatus::ModerateHypoxia
    } else {
        OxygenStatus::SevereHypoxia
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_band() {
        assert_eq!(evaluate_oxygen(100.0), OxygenStatus::Normal);
        assert_eq!(evaluate_oxygen(97.0), OxygenStatus::Normal);
        assert_eq!(evaluate_oxygen(85.0), OxygenStatus::Normal);
    }

    #[test]
    fn boundaries_fall_into_upper_band() {
        assert_eq!(evaluate_oxygen(84.99), OxygenStatus::MildHypoxia);
        assert_eq!(evaluate_oxygen(75.0), OxygenStatus::MildHypoxia);
        assert_eq!(evaluate_oxygen(74.99), OxygenStatus::ModerateHypoxia);
        assert_eq!(evaluate_oxygen(65.0), OxygenStatus::ModerateHypoxia);
        assert_eq!(evaluate_oxygen(64.99), OxygenStatus::SevereHypoxia);
    }

    #[test]
    fn out_of_range_values_still_get_a_verdict() {
        assert_eq!(evaluate_oxygen(140.0), OxygenStatus::Normal);
        assert_eq!(evaluate_oxygen(40.0), OxygenStatus::SevereHypoxia);
        assert_eq!(evaluate_oxygen(-3.0), OxygenStatus::SevereHypoxia);
        assert_eq!(evaluate_oxygen(f64::INFINITY), OxygenStatus::Normal);
        assert_eq!(evaluate_oxygen(f64::NEG_INFINITY), OxygenStatus::SevereHypoxia);
        assert_eq!(evaluate_oxygen(f64::NAN), OxygenStatus::SevereHypoxia);
    }

    #[test]
    fn repeated_calls_agree() {
        for spo2 in [40.0, 64.0, 70.0, 80.0, 99.0] {
            assert_eq!(evaluate_oxygen(spo2), evaluate_oxygen(spo2));
        }
    }

    #[test]
    fn description_is_display() {
        let status = evaluate_oxygen(78.0);
        assert_eq!(
            status.to_string(),
            "🟡 Mild Hypoxia — Deep breathing recommended"
        );
    }
}
