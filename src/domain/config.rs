//! Application configuration value object

use serde::{Deserialize, Serialize};

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default backend override (same values as `--backend`)
    pub backend: Option<String>,
    /// Always print the notification block to stdout
    pub print: Option<bool>,
    /// Always append a record to the history log
    pub save: Option<bool>,
    /// Whether to send notifications at all
    pub notify: Option<bool>,
}

impl AppConfig {
    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            backend: other.backend.or(self.backend),
            print: other.print.or(self.print),
            save: other.save.or(self.save),
            notify: other.notify.or(self.notify),
        }
    }

    pub fn print_or_default(&self) -> bool {
        self.print.unwrap_or(false)
    }

    pub fn save_or_default(&self) -> bool {
        self.save.unwrap_or(false)
    }

    pub fn notify_or_default(&self) -> bool {
        self.notify.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_has_no_values() {
        let config = AppConfig::empty();
        assert!(config.backend.is_none());
        assert!(config.print.is_none());
        assert!(config.save.is_none());
        assert!(config.notify.is_none());
    }

    #[test]
    fn merge_prefers_other() {
        let base = AppConfig {
            backend: Some("stdout".into()),
            print: Some(false),
            ..Default::default()
        };
        let other = AppConfig {
            print: Some(true),
            save: Some(true),
            ..Default::default()
        };
        let merged = base.merge(other);
        assert_eq!(merged.backend, Some("stdout".into()));
        assert_eq!(merged.print, Some(true));
        assert_eq!(merged.save, Some(true));
    }

    #[test]
    fn defaults() {
        let config = AppConfig::empty();
        assert!(!config.print_or_default());
        assert!(!config.save_or_default());
        assert!(config.notify_or_default());
    }
}
