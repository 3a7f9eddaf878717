//! Counter configuration
//!
//! Stores the initial attributes, window settings and design token
//! overrides in `<config dir>/counter-app/config.toml`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GuiError, GuiResult};
use crate::theme::{BaseTheme, DesignTokens};

/// Initial host attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterSection {
    pub count: Option<i64>,
    pub min: Option<i64>,
    pub max: Option<i64>,
    pub fancy: bool,
    pub title: Option<String>,
    /// Text shown under the buttons
    pub slot: Option<String>,
}

/// Window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSection {
    pub title: String,
    /// Window size (width, height)
    pub size: (u32, u32),
}

impl Default for WindowSection {
    fn default() -> Self {
        Self {
            title: "Counter".to_string(),
            size: (360, 280),
        }
    }
}

/// Theming and localization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSection {
    /// `light` or `dark`
    pub base: String,
    /// Locale tag for the title, e.g. `ar` or `es-MX`
    pub locale: Option<String>,
    /// Colour token overrides (token name -> hex)
    pub colors: BTreeMap<String, String>,
    /// Size token overrides (token name -> pixels)
    pub sizes: BTreeMap<String, f32>,
}

impl Default for ThemeSection {
    fn default() -> Self {
        Self {
            base: "light".to_string(),
            locale: None,
            colors: BTreeMap::new(),
            sizes: BTreeMap::new(),
        }
    }
}

/// Main counter configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub counter: CounterSection,
    pub window: WindowSection,
    pub theme: ThemeSection,
}

impl CounterConfig {
    /// Get the default config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("counter-app").join("config.toml"))
    }

    /// Load configuration from the default location, falling back to
    /// defaults when the file is missing or unreadable
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| Self::load_from(&path).ok())
            .unwrap_or_default()
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> GuiResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| GuiError::Config(format!("{}: {e}", path.display())))?;
        let config: Self =
            toml::from_str(&content).map_err(|e| GuiError::Config(format!("{}: {e}", path.display())))?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> GuiResult<()> {
        let path = Self::config_path()
            .ok_or_else(|| GuiError::Config("Config directory not found".to_string()))?;
        self.save_to(&path)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> GuiResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| GuiError::Config(e.to_string()))?;
        }

        std::fs::write(path, self.to_toml()?).map_err(|e| GuiError::Config(e.to_string()))?;
        debug!(path = %path.display(), "saved configuration");
        Ok(())
    }

    /// Serialize as the TOML written by [`save_to`](Self::save_to)
    pub fn to_toml(&self) -> GuiResult<String> {
        toml::to_string_pretty(self).map_err(|e| GuiError::Config(e.to_string()))
    }

    /// Build design tokens with the configured overrides applied
    pub fn tokens(&self) -> GuiResult<DesignTokens> {
        let mut tokens = DesignTokens::default();
        tokens.base = BaseTheme::from_name(&self.theme.base).ok_or_else(|| {
            GuiError::Config(format!("unknown base theme `{}`", self.theme.base))
        })?;

        for (name, hex) in &self.theme.colors {
            tokens.set_color(name, hex)?;
        }
        for (name, size) in &self.theme.sizes {
            tokens.set_size(name, *size)?;
        }
        Ok(tokens)
    }

    /// The configured counter section as host attribute writes, in the
    /// order a host would set them
    #[must_use]
    pub fn attribute_writes(&self) -> Vec<(&'static str, Option<String>)> {
        let section = &self.counter;
        let mut writes = Vec::new();

        if let Some(count) = section.count {
            writes.push(("count", Some(count.to_string())));
        }
        if let Some(min) = section.min {
            writes.push(("min", Some(min.to_string())));
        }
        if let Some(max) = section.max {
            writes.push(("max", Some(max.to_string())));
        }
        if section.fancy {
            writes.push(("fancy", Some(String::new())));
        }
        if let Some(title) = &section.title {
            writes.push(("title", Some(title.clone())));
        }
        writes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::names;

    #[test]
    fn test_default_config() {
        let config = CounterConfig::default();
        assert_eq!(config.window.size, (360, 280));
        assert_eq!(config.theme.base, "light");
        assert!(config.attribute_writes().is_empty());
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: CounterConfig = toml::from_str("[counter]\nmax = 30\n").unwrap();
        assert_eq!(config.counter.max, Some(30));
        assert_eq!(config.window, WindowSection::default());
    }

    #[test]
    fn test_attribute_writes() {
        let mut config = CounterConfig::default();
        config.counter.count = Some(5);
        config.counter.max = Some(10);
        config.counter.fancy = true;

        let writes = config.attribute_writes();
        assert_eq!(
            writes,
            vec![
                ("count", Some("5".to_string())),
                ("max", Some("10".to_string())),
                ("fancy", Some(String::new())),
            ]
        );
    }

    #[test]
    fn test_tokens_with_overrides() {
        let mut config = CounterConfig::default();
        config.theme.base = "dark".to_string();
        config
            .theme
            .colors
            .insert(names::SKY_BLUE.to_string(), "#112233".to_string());

        let tokens = config.tokens().unwrap();
        assert_eq!(tokens.base, BaseTheme::Dark);
        assert_eq!(tokens.color(names::SKY_BLUE).unwrap().to_hex(), "#112233");
    }

    #[test]
    fn test_tokens_reject_bad_theme() {
        let mut config = CounterConfig::default();
        config.theme.base = "neon".to_string();
        assert!(matches!(config.tokens(), Err(GuiError::Config(_))));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = CounterConfig::default();
        config.counter.title = Some("Clicks".to_string());
        config.theme.locale = Some("ar".to_string());
        config.save_to(&path).unwrap();

        let loaded = CounterConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = CounterConfig::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, GuiError::Config(_)));
    }
}
