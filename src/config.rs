// ── Window configuration ──────────────────────────────────────────────────────
//
// Pure Rust, no Win32 imports.  The serde derives let a host application keep
// the window parameters inside its own configuration file.

use serde::{Deserialize, Serialize};

use crate::error::{BootstrapError, Result};

/// Class name registered when the configuration does not name one.
pub const DEFAULT_CLASS_NAME: &str = "WindowBootstrapClass";

/// Parameters for the single bootstrap window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Requested client-area width in device pixels.
    pub width: i32,
    /// Requested client-area height in device pixels.
    pub height: i32,
    /// Title bar text.
    pub title: String,
    /// Name of the window class to register and instantiate.
    #[serde(default = "default_class_name")]
    pub class_name: String,
}

fn default_class_name() -> String {
    DEFAULT_CLASS_NAME.to_owned()
}

impl WindowConfig {
    /// Build a validated configuration using the default class name.
    pub fn new(width: i32, height: i32, title: impl Into<String>) -> Result<Self> {
        let config = Self {
            width,
            height,
            title: title.into(),
            class_name: default_class_name(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Replace the class name, re-validating the result.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Result<Self> {
        self.class_name = class_name.into();
        self.validate()?;
        Ok(self)
    }

    /// Check the invariants the Win32 calls rely on.
    ///
    /// Deserialized configs bypass `new`, so callers that load one from disk
    /// should run this before handing it to the bootstrap.
    pub fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(BootstrapError::InvalidConfig(format!(
                "client size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.class_name.is_empty() {
            return Err(BootstrapError::InvalidConfig(
                "class name must not be empty".to_owned(),
            ));
        }
        // Both strings are handed to Win32 as NUL-terminated UTF-16.
        if self.class_name.contains('\0') || self.title.contains('\0') {
            return Err(BootstrapError::InvalidConfig(
                "title and class name must not contain NUL".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_uses_default_class_name() {
        let c = WindowConfig::new(800, 600, "Demo").expect("valid");
        assert_eq!(c.class_name, DEFAULT_CLASS_NAME);
        assert_eq!(c.title, "Demo");
    }

    #[test]
    fn rejects_non_positive_size() {
        assert!(matches!(
            WindowConfig::new(0, 600, "Demo"),
            Err(BootstrapError::InvalidConfig(_))
        ));
        assert!(matches!(
            WindowConfig::new(800, -1, "Demo"),
            Err(BootstrapError::InvalidConfig(_))
        ));
    }

    #[test]
    fn rejects_empty_class_name_and_interior_nul() {
        let base = WindowConfig::new(1, 1, "t").expect("valid");
        assert!(base.clone().with_class_name("").is_err());
        assert!(base.clone().with_class_name("a\0b").is_err());
        assert!(WindowConfig::new(1, 1, "bad\0title").is_err());
    }

    #[test]
    fn empty_title_is_allowed() {
        assert!(WindowConfig::new(1, 1, "").is_ok());
    }

    #[test]
    fn deserialize_fills_default_class_name() {
        let c: WindowConfig =
            serde_json::from_str(r#"{"width":320,"height":200,"title":"Small"}"#)
                .expect("deserialize");
        assert_eq!(c.class_name, DEFAULT_CLASS_NAME);
        assert_eq!((c.width, c.height), (320, 200));
        c.validate().expect("valid");
    }

    #[test]
    fn deserialized_config_still_needs_validation() {
        let c: WindowConfig =
            serde_json::from_str(r#"{"width":0,"height":200,"title":"x","class_name":"C"}"#)
                .expect("deserialize");
        assert!(c.validate().is_err());
    }
}
