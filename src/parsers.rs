pub mod derivation;
pub mod predictive;
pub mod reader;
pub mod stack;
pub mod trace;

pub use derivation::Derivation;
pub use predictive::Parser;
pub use trace::{Observer, Recorder, Silent, Step, TraceWriter};
