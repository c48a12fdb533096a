/// One pair of readings supplied for a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Peripheral oxygen saturation, percent.
    pub spo2: f64,
    /// Beats per minute.
    pub heart_rate: f64,
}

impl Reading {
    pub const DEFAULT_SPO2: u8 = 97;
    pub const DEFAULT_HEART_RATE: u8 = 90;

    pub fn new(spo2: f64, heart_rate: f64) -> Self {
        Self { spo2, heart_rate }
    }

    /// Feature vector in the order the classifier was fitted on.
    pub fn features(&self) -> [f64; 2] {
        [self.spo2, self.heart_rate]
    }
}

impl Default for Reading {
    fn default() -> Self {
        Self::new(
            f64::from(Self::DEFAULT_SPO2),
            f64::from(Self::DEFAULT_HEART_RATE),
        )
    }
}
