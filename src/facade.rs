//! Bridge from the `log` crate facade
//!
//! Code under test usually logs through `log::info!` and friends rather than
//! through a [`LayerWriter`] directly. Installing a layer as the global
//! `log` logger routes those records into the recorder.
//!
//! # Example
//!
//! ```
//! use mock_logger_system::MessageRecorder;
//!
//! let recorder = MessageRecorder::new();
//! let layer = recorder.layer("app");
//!
//! log::Log::log(
//!     &layer,
//!     &log::Record::builder()
//!         .level(log::Level::Warn)
//!         .args(format_args!("disk at {}%", 91))
//!         .build(),
//! );
//!
//! assert!(recorder.is_warn_message("disk at 91%").unwrap());
//! ```

use crate::core::{LayerWriter, LogLevel};

impl<L: Send + Sync> log::Log for LayerWriter<L> {
    fn enabled(&self, _metadata: &log::Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &log::Record<'_>) {
        LayerWriter::log(
            self,
            LogLevel::from_log_level(record.level()),
            record.args().to_string(),
        );
    }

    fn flush(&self) {}
}

/// Install `layer` as the global `log` logger with every level enabled.
///
/// Fails if a global logger was already set, as `log::set_boxed_logger` does.
pub fn install<L>(layer: LayerWriter<L>) -> Result<(), log::SetLoggerError>
where
    L: Send + Sync + 'static,
{
    log::set_boxed_logger(Box::new(layer))?;
    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}
