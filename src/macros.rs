//! Formatting macros for recording messages through a layer.
//!
//! These macros format their arguments like `format!` and append the result
//! as one message.
//!
//! # Examples
//!
//! ```
//! use mock_logger_system::prelude::*;
//! use mock_logger_system::info;
//!
//! let recorder = MessageRecorder::new();
//! let layer = recorder.layer("server");
//!
//! info!(layer, "Server started");
//!
//! let port = 8080;
//! info!(layer, "Server listening on port {}", port);
//!
//! assert!(recorder.is_info_message("Server listening on port 8080").unwrap());
//! ```

/// Record a message at a given level.
///
/// # Examples
///
/// ```
/// # use mock_logger_system::prelude::*;
/// # let recorder = MessageRecorder::new();
/// # let layer = recorder.layer(());
/// use mock_logger_system::record;
/// record!(layer, LogLevel::Info, "Simple message");
/// record!(layer, LogLevel::Error, "Error code: {}", 500);
/// # assert!(recorder.is_error_message("Error code: 500").unwrap());
/// ```
#[macro_export]
macro_rules! record {
    ($writer:expr, $level:expr, $($arg:tt)+) => {
        $writer.log($level, format!($($arg)+))
    };
}

/// Record an error-level message.
#[macro_export]
macro_rules! error {
    ($writer:expr, $($arg:tt)+) => {
        $crate::record!($writer, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Record a warn-level message.
///
/// ```
/// # use mock_logger_system::prelude::*;
/// # let recorder = MessageRecorder::new();
/// # let layer = recorder.layer(());
/// use mock_logger_system::warn;
/// warn!(layer, "Retry attempt {} of {}", 3, 5);
/// # assert!(recorder.is_warn_message("Retry attempt 3 of 5").unwrap());
/// ```
#[macro_export]
macro_rules! warn {
    ($writer:expr, $($arg:tt)+) => {
        $crate::record!($writer, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Record an info-level message.
#[macro_export]
macro_rules! info {
    ($writer:expr, $($arg:tt)+) => {
        $crate::record!($writer, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Record a verbose-level message.
#[macro_export]
macro_rules! verbose {
    ($writer:expr, $($arg:tt)+) => {
        $crate::record!($writer, $crate::LogLevel::Verbose, $($arg)+)
    };
}

/// Record a debug-level message.
#[macro_export]
macro_rules! debug {
    ($writer:expr, $($arg:tt)+) => {
        $crate::record!($writer, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Record a silly-level message.
#[macro_export]
macro_rules! silly {
    ($writer:expr, $($arg:tt)+) => {
        $crate::record!($writer, $crate::LogLevel::Silly, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, MessageRecorder};

    #[test]
    fn test_record_macro() {
        let recorder = MessageRecorder::new();
        let layer = recorder.layer("macros");
        record!(layer, LogLevel::Info, "Test message");
        record!(layer, LogLevel::Info, "Formatted: {}", 42);

        assert_eq!(
            recorder.get_info_messages(None),
            ["Test message", "Formatted: 42"]
        );
    }

    #[test]
    fn test_level_macros() {
        let recorder = MessageRecorder::new();
        let layer = recorder.layer("macros");
        error!(layer, "Code: {}", 500);
        warn!(layer, "Retry {} of {}", 1, 3);
        info!(layer, "Items: {}", 100);
        verbose!(layer, "Verbose message");
        debug!(layer, "Count: {}", 5);
        silly!(layer, "{}-{}", "a", "b");

        assert!(recorder.is_error_message("Code: 500").unwrap());
        assert!(recorder.is_warn_message("Retry 1 of 3").unwrap());
        assert!(recorder.is_info_message("Items: 100").unwrap());
        assert!(recorder.is_verbose_message("Verbose message").unwrap());
        assert!(recorder.is_debug_message("Count: 5").unwrap());
        assert!(recorder.is_silly_message("a-b").unwrap());
    }
}
