//! Layer-scoped write handles

use super::{log_level::LogLevel, recorder::Shared};
use std::fmt;
use std::sync::Weak;

/// Write handle bound to a caller-supplied layer id.
///
/// A `LayerWriter` owns no messages. It holds a non-owning reference to the
/// recorder it came from and appends into that recorder's buffers; writes
/// made after the recorder is dropped are discarded.
pub struct LayerWriter<L> {
    layer: L,
    shared: Weak<Shared>,
}

impl<L> LayerWriter<L> {
    pub(crate) fn new(layer: L, shared: Weak<Shared>) -> Self {
        Self { layer, shared }
    }

    /// The layer id this handle was derived with, unchanged
    pub fn layer(&self) -> &L {
        &self.layer
    }

    /// Whether the recorder this handle writes into is still alive
    pub fn is_attached(&self) -> bool {
        self.shared.strong_count() > 0
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if let Some(shared) = self.shared.upgrade() {
            shared.append(level, message.into());
        }
    }

    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    pub fn verbose(&self, message: impl Into<String>) {
        self.log(LogLevel::Verbose, message);
    }

    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    pub fn silly(&self, message: impl Into<String>) {
        self.log(LogLevel::Silly, message);
    }
}

impl<L: Clone> Clone for LayerWriter<L> {
    fn clone(&self) -> Self {
        Self {
            layer: self.layer.clone(),
            shared: Weak::clone(&self.shared),
        }
    }
}

impl<L: fmt::Debug> fmt::Debug for LayerWriter<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayerWriter")
            .field("layer", &self.layer)
            .field("attached", &self.is_attached())
            .finish()
    }
}
