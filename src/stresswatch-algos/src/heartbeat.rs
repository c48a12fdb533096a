use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeartbeatStatus {
    Bradycardia,
    Normal,
    ModerateStress,
    HighStress,
}

impl HeartbeatStatus {
    pub const NORMAL_MIN: f64 = 60.0;
    pub const NORMAL_MAX: f64 = 100.0;
    pub const MODERATE_MAX: f64 = 120.0;

    pub fn description(self) -> &'static str {
        match self {
            HeartbeatStatus::Bradycardia => "Bradycardia (Low HR)",
            HeartbeatStatus::Normal => "Normal Heartbeat",
            HeartbeatStatus::ModerateStress => "Moderate Stress (HR high)",
            HeartbeatStatus::HighStress => "High Stress (HR too high)",
        }
    }
}

impl Display for HeartbeatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// Both ends of the normal band are inclusive, the moderate band is `(100, 120]`.
pub fn evaluate_heartbeat(hr: f64) -> HeartbeatStatus {
    if hr < HeartbeatStatus::NORMAL_MIN {
        HeartbeatStatus::Bradycardia
    } else if hr <= HeartbeatStatus::NORMAL_MAX {
        HeartbeatStatus::Normal
    } else if hr <= HeartbeatStatus::MODERATE_MAX {
        HeartbeatStatus::ModerateStress
    } else {
        HeartbeatStatus::HighStress
    }
}
