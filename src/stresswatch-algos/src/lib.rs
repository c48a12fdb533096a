#[macro_use]
extern crate serde;

#[macro_use]
extern crate log;

pub(crate) mod oxygen;
pub use oxygen::{OxygenStatus, evaluate_oxygen};

pub(crate) mod heartbeat;
pub use heartbeat::{HeartbeatStatus, evaluate_heartbeat};

pub(crate) mod suggestions;
pub use suggestions::{suggestions, suggestions_for_label};

pub(crate) mod quotes;
pub use quotes::{QUOTES, random_quote};
