#[macro_use]
extern crate serde;

mod reading;
pub use reading::Reading;

mod stress;
pub use stress::{StressLabel, StressLevel};
