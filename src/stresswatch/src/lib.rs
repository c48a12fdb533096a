#[macro_use]
extern crate log;

mod monitor;
pub use monitor::{Assessment, StressMonitor, VitalSigns};

pub use stresswatch_algos as algos;
pub use stresswatch_model as model;
pub use stresswatch_types as types;
