//! Core recorder types

pub mod error;
pub mod layer;
pub mod log_level;
pub mod pattern;
pub mod recorder;
pub mod snapshot;

pub use error::{MockLoggerError, Result};
pub use layer::LayerWriter;
pub use log_level::LogLevel;
pub use pattern::{IntoPattern, Pattern};
pub use recorder::{MessageRecorder, RecorderBuilder, RecorderConfig};
pub use snapshot::{MessageSnapshot, Messages};
