//! # Mock Logger System
//!
//! An in-memory logger that records messages instead of writing them
//! anywhere, so tests can assert on what was logged.
//!
//! ## Features
//!
//! - **Per-level buffers**: `error`, `warn`, `info`, `verbose`, `debug`, `silly`
//! - **Layers**: any number of tagged write handles sharing one recorder
//! - **Queries**: list, existence check, and exact or regex matching
//! - **Thread Safe**: one lock guards all buffers; reads return owned copies
//! - **`log` bridge**: capture records from code that logs through the `log` crate

pub mod core;
#[cfg(feature = "log-facade")]
pub mod facade;
pub mod macros;

pub use regex::Regex;

pub mod prelude {
    pub use crate::core::{
        IntoPattern, LayerWriter, LogLevel, MessageRecorder, MessageSnapshot, Messages,
        MockLoggerError, Pattern, RecorderBuilder, RecorderConfig, Result,
    };
    pub use regex::Regex;
}

pub use crate::core::{
    IntoPattern, LayerWriter, LogLevel, MessageRecorder, MessageSnapshot, Messages,
    MockLoggerError, Pattern, RecorderBuilder, RecorderConfig, Result,
};
