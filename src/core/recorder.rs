//! Main recorder implementation

use super::{
    error::Result,
    layer::LayerWriter,
    log_level::LogLevel,
    pattern::IntoPattern,
    snapshot::{MessageSnapshot, Messages},
};
use parking_lot::RwLock;
use regex::Regex;
use std::sync::Arc;

/// One buffer per level, indexed by the level's discriminant
pub(crate) type LevelBuffers = [Vec<String>; 6];

/// Settings fixed at construction time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecorderConfig {
    /// Escape `\n`, `\r` and `\t` before a message is stored
    pub sanitize: bool,
    /// Mirror every recorded message to stderr
    pub echo: bool,
}

/// State shared between a recorder and the layers derived from it
pub(crate) struct Shared {
    buffers: RwLock<LevelBuffers>,
    config: RecorderConfig,
}

impl Shared {
    /// Append one message. Never fails.
    pub(crate) fn append(&self, level: LogLevel, message: String) {
        let message = if self.config.sanitize {
            sanitize_message(&message)
        } else {
            message
        };

        if self.config.echo {
            echo(level, &message);
        }

        self.buffers.write()[level as usize].push(message);
    }
}

/// Replaces newlines, carriage returns, and tabs with escape sequences so a
/// single recorded message can never read as several.
fn sanitize_message(message: &str) -> String {
    message
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

#[cfg(feature = "console")]
fn echo(level: LogLevel, message: &str) {
    use colored::Colorize;
    let tag = format!("{:7}", level.as_str()).color(level.color_code());
    eprintln!("[mock] [{}] {}", tag, message);
}

#[cfg(not(feature = "console"))]
fn echo(level: LogLevel, message: &str) {
    eprintln!("[mock] [{:7}] {}", level.as_str(), message);
}

/// In-memory recorder owning one append-only message buffer per level.
///
/// Writes go through [`LayerWriter`] handles obtained from [`layer`](Self::layer);
/// assertions query the recorder directly.
///
/// # Example
///
/// ```
/// use mock_logger_system::MessageRecorder;
///
/// let recorder = MessageRecorder::new();
/// let db = recorder.layer("db");
///
/// db.info("info message 1");
/// db.info("info message 2");
///
/// assert!(recorder.is_info_message("info message 1").unwrap());
/// assert_eq!(recorder.get_messages("info", None).unwrap().len(), 2);
/// assert!(recorder.get_messages("bogus-level", None).is_err());
/// ```
pub struct MessageRecorder {
    shared: Arc<Shared>,
}

impl MessageRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RecorderConfig::default())
    }

    #[must_use]
    pub fn with_config(config: RecorderConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                buffers: RwLock::new(Default::default()),
                config,
            }),
        }
    }

    #[must_use]
    pub fn builder() -> RecorderBuilder {
        RecorderBuilder::new()
    }

    pub fn config(&self) -> RecorderConfig {
        self.shared.config
    }

    /// Derive a write handle tagged with `layer`.
    ///
    /// Every handle derived from this recorder appends into the same buffers.
    pub fn layer<L>(&self, layer: L) -> LayerWriter<L> {
        LayerWriter::new(layer, Arc::downgrade(&self.shared))
    }

    /// Names of the known levels, in priority order
    pub fn levels(&self) -> Vec<&'static str> {
        LogLevel::ALL.iter().map(LogLevel::as_str).collect()
    }

    /// Copy of the messages recorded at `level`.
    ///
    /// With a `pattern`, only the messages it matches are returned, in their
    /// original order. An empty `level` is rejected here because the result
    /// is a single level's list; use [`query`](Self::query) to treat an empty
    /// name as "every level".
    pub fn get_messages(
        &self,
        level: impl AsRef<str>,
        pattern: Option<&Regex>,
    ) -> Result<Vec<String>> {
        let level: LogLevel = level.as_ref().parse()?;
        Ok(self.messages_at(level, pattern))
    }

    /// Deep copy of every level buffer
    pub fn all_messages(&self) -> MessageSnapshot {
        let buffers = self.shared.buffers.read();
        MessageSnapshot::new(
            LogLevel::ALL
                .iter()
                .map(|level| (*level, buffers[*level as usize].clone()))
                .collect(),
        )
    }

    /// Query with an optional level name.
    ///
    /// `None` or an empty name returns the whole state; the pattern is
    /// ignored in that case.
    pub fn query(&self, level: Option<&str>, pattern: Option<&Regex>) -> Result<Messages> {
        match level {
            None | Some("") => Ok(Messages::All(self.all_messages())),
            Some(name) => self.get_messages(name, pattern).map(Messages::Level),
        }
    }

    /// Whether any message is recorded at `level`, optionally matching `pattern`.
    ///
    /// An empty `level` names no level and is always `false`.
    pub fn has_messages(&self, level: impl AsRef<str>, pattern: Option<&Regex>) -> Result<bool> {
        let level = level.as_ref();
        if level.is_empty() {
            return Ok(false);
        }
        let level: LogLevel = level.parse()?;
        Ok(self.has_messages_at(level, pattern))
    }

    /// Whether any message at `level` matches `pattern`.
    ///
    /// Strings compare by equality, regexes by search. The level is checked
    /// before the pattern is converted.
    pub fn is_message(&self, level: impl AsRef<str>, pattern: impl IntoPattern) -> Result<bool> {
        let level: LogLevel = level.as_ref().parse()?;
        self.is_message_at(level, pattern)
    }

    /// Number of messages recorded at `level`
    pub fn message_count(&self, level: LogLevel) -> usize {
        self.shared.buffers.read()[level as usize].len()
    }

    /// Number of messages recorded across all levels
    pub fn total_count(&self) -> usize {
        self.shared.buffers.read().iter().map(Vec::len).sum()
    }

    /// Empty every buffer
    pub fn clear(&self) {
        for buffer in self.shared.buffers.write().iter_mut() {
            buffer.clear();
        }
    }

    fn messages_at(&self, level: LogLevel, pattern: Option<&Regex>) -> Vec<String> {
        let buffers = self.shared.buffers.read();
        let buffer = &buffers[level as usize];
        match pattern {
            Some(re) => buffer.iter().filter(|m| re.is_match(m)).cloned().collect(),
            None => buffer.clone(),
        }
    }

    fn has_messages_at(&self, level: LogLevel, pattern: Option<&Regex>) -> bool {
        let buffers = self.shared.buffers.read();
        let buffer = &buffers[level as usize];
        match pattern {
            Some(re) => buffer.iter().any(|m| re.is_match(m)),
            None => !buffer.is_empty(),
        }
    }

    fn is_message_at(&self, level: LogLevel, pattern: impl IntoPattern) -> Result<bool> {
        let pattern = pattern.into_pattern()?;
        let buffers = self.shared.buffers.read();
        Ok(buffers[level as usize].iter().any(|m| pattern.matches(m)))
    }
}

/// Generates `get_<level>_messages`, `has_<level>_messages` and
/// `is_<level>_message` for each level.
macro_rules! level_accessors {
    ($($level:ident => $get:ident, $has:ident, $is:ident;)+) => {
        impl MessageRecorder {
            $(
                #[doc = concat!("Messages recorded at `", stringify!($level), "`")]
                pub fn $get(&self, pattern: Option<&Regex>) -> Vec<String> {
                    self.messages_at(LogLevel::$level, pattern)
                }

                #[doc = concat!("Whether any `", stringify!($level), "` message exists")]
                pub fn $has(&self, pattern: Option<&Regex>) -> bool {
                    self.has_messages_at(LogLevel::$level, pattern)
                }

                #[doc = concat!("Whether a `", stringify!($level), "` message matches `pattern`")]
                pub fn $is(&self, pattern: impl IntoPattern) -> Result<bool> {
                    self.is_message_at(LogLevel::$level, pattern)
                }
            )+
        }
    };
}

level_accessors! {
    Error => get_error_messages, has_error_messages, is_error_message;
    Warn => get_warn_messages, has_warn_messages, is_warn_message;
    Info => get_info_messages, has_info_messages, is_info_message;
    Verbose => get_verbose_messages, has_verbose_messages, is_verbose_message;
    Debug => get_debug_messages, has_debug_messages, is_debug_message;
    Silly => get_silly_messages, has_silly_messages, is_silly_message;
}

impl Default for MessageRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MessageRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageRecorder")
            .field("config", &self.shared.config)
            .field("messages", &self.all_messages())
            .finish()
    }
}

/// Builder for [`MessageRecorder`].
///
/// # Example
///
/// ```
/// use mock_logger_system::MessageRecorder;
///
/// let recorder = MessageRecorder::builder()
///     .sanitize(true)
///     .echo(false)
///     .build();
///
/// recorder.layer("io").warn("line 1\nline 2");
/// assert_eq!(recorder.get_warn_messages(None), ["line 1\\nline 2"]);
/// ```
#[derive(Debug, Default)]
pub struct RecorderBuilder {
    config: RecorderConfig,
}

impl RecorderBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Escape control characters in recorded messages
    #[must_use]
    pub fn sanitize(mut self, enabled: bool) -> Self {
        self.config.sanitize = enabled;
        self
    }

    /// Mirror recorded messages to stderr
    #[must_use]
    pub fn echo(mut self, enabled: bool) -> Self {
        self.config.echo = enabled;
        self
    }

    #[must_use]
    pub fn build(self) -> MessageRecorder {
        MessageRecorder::with_config(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::MockLoggerError;

    fn re(source: &str) -> Regex {
        Regex::new(source).unwrap()
    }

    #[test]
    fn test_levels_are_fixed() {
        let recorder = MessageRecorder::new();
        assert_eq!(
            recorder.levels(),
            ["error", "warn", "info", "verbose", "debug", "silly"]
        );
    }

    #[test]
    fn test_new_recorder_is_empty() {
        let recorder = MessageRecorder::new();
        for level in recorder.levels() {
            assert!(recorder.get_messages(level, None).unwrap().is_empty());
            assert!(!recorder.has_messages(level, None).unwrap());
        }
        assert_eq!(recorder.total_count(), 0);
    }

    #[test]
    fn test_get_messages_filters_in_order() {
        let recorder = MessageRecorder::new();
        let layer = recorder.layer(());
        layer.debug("debug message 1");
        layer.debug("debug message 2");
        layer.debug("debug message 12");

        assert_eq!(
            recorder.get_messages(LogLevel::Debug, Some(&re(" 2$"))).unwrap(),
            ["debug message 2"]
        );
        assert_eq!(
            recorder.get_debug_messages(Some(&re("2"))),
            ["debug message 2", "debug message 12"]
        );
    }

    #[test]
    fn test_query_dispatches_on_level() {
        let recorder = MessageRecorder::new();
        recorder.layer("l").silly("silly message 1");

        let all = recorder.query(None, None).unwrap().into_all().unwrap();
        assert_eq!(all.get(LogLevel::Silly), ["silly message 1"]);
        assert_eq!(recorder.query(Some(""), None).unwrap(), Messages::All(all));

        let level = recorder.query(Some("silly"), None).unwrap();
        assert_eq!(level, Messages::Level(vec!["silly message 1".to_string()]));

        let err = recorder.query(Some("bogus-level"), None).unwrap_err();
        assert_eq!(err, MockLoggerError::unsupported_level("bogus-level"));
    }

    #[test]
    fn test_is_message_checks_level_first() {
        let recorder = MessageRecorder::new();
        let err = recorder
            .is_message("unknown level", serde_json::json!(17.3))
            .unwrap_err();
        assert!(matches!(err, MockLoggerError::UnsupportedLevel { .. }));

        let err = recorder
            .is_message("info", serde_json::json!(17.3))
            .unwrap_err();
        assert!(matches!(err, MockLoggerError::InvalidPattern { .. }));
    }

    #[test]
    fn test_empty_level_name() {
        let recorder = MessageRecorder::new();
        recorder.layer("empty").info("a");

        assert!(!recorder.has_messages("", None).unwrap());
        assert!(!recorder.has_messages("", Some(&re("a"))).unwrap());
        assert!(recorder.query(Some(""), None).unwrap().into_all().is_some());
        assert_eq!(
            recorder.get_messages("", None).unwrap_err(),
            MockLoggerError::unsupported_level("")
        );
    }

    #[test]
    fn test_counts_and_clear() {
        let recorder = MessageRecorder::new();
        let layer = recorder.layer("counts");
        layer.error("e1");
        layer.error("e2");
        layer.warn("w1");

        assert_eq!(recorder.message_count(LogLevel::Error), 2);
        assert_eq!(recorder.message_count(LogLevel::Warn), 1);
        assert_eq!(recorder.total_count(), 3);

        recorder.clear();
        assert_eq!(recorder.total_count(), 0);
        assert_eq!(recorder.levels().len(), 6);

        layer.error("e3");
        assert_eq!(recorder.get_error_messages(None), ["e3"]);
    }

    #[test]
    fn test_builder_config() {
        let recorder = MessageRecorder::builder().sanitize(true).build();
        assert_eq!(
            recorder.config(),
            RecorderConfig {
                sanitize: true,
                echo: false
            }
        );

        recorder.layer(1).info("a\tb\r\nc");
        assert!(recorder.is_info_message("a\\tb\\r\\nc").unwrap());
    }

    #[test]
    fn test_default_keeps_raw_text() {
        let recorder = MessageRecorder::default();
        assert_eq!(recorder.config(), RecorderConfig::default());

        recorder.layer(1).info("a\nb");
        assert!(recorder.is_info_message("a\nb").unwrap());
    }

    #[test]
    fn test_echo_still_records() {
        let recorder = MessageRecorder::builder().echo(true).build();
        recorder.layer("echo").verbose("shown on stderr");
        assert!(recorder.has_verbose_messages(None));
    }
}
