//! Capturing `log` crate records through an installed layer
//!
//! The global logger can only be set once per process, so everything that
//! depends on it lives in this single test.

#![cfg(feature = "log-facade")]

use mock_logger_system::facade;
use mock_logger_system::prelude::*;

#[test]
fn test_installed_layer_captures_log_macros() {
    let recorder = MessageRecorder::new();
    facade::install(recorder.layer("global")).expect("no logger installed yet");

    log::error!("connection refused: {}", "db");
    log::warn!("retrying in {}s", 5);
    log::info!("started");
    log::debug!("state = {:?}", (1, 2));
    log::trace!("tick");

    assert!(recorder.is_error_message("connection refused: db").unwrap());
    assert!(recorder.is_warn_message("retrying in 5s").unwrap());
    assert_eq!(recorder.get_info_messages(None), ["started"]);
    assert_eq!(recorder.get_debug_messages(None), ["state = (1, 2)"]);
    assert_eq!(recorder.get_silly_messages(None), ["tick"]);
    assert!(!recorder.has_verbose_messages(None));

    // a second install is refused
    assert!(facade::install(recorder.layer("again")).is_err());
}
