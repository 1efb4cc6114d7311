//! Operator-tunable parts of the generated script: notification styling and
//! how long the notification stays on screen.
//!
//! Loaded from TOML, e.g.
//!
//! ```toml
//! dismiss_after_ms = 2500
//!
//! [notice]
//! background = "#eeffee"
//! color = "#333"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_DISMISS_AFTER_MS: u32 = 2500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateOptions {
    /// Delay before the notification removes itself.
    pub dismiss_after_ms: u32,
    pub notice: NoticeStyle,
}

impl Default for TemplateOptions {
    fn default() -> Self {
        Self {
            dismiss_after_ms: DEFAULT_DISMISS_AFTER_MS,
            notice: NoticeStyle::default(),
        }
    }
}

/// Inline CSS for the floating notification. Purely presentational.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoticeStyle {
    pub font: String,
    pub font_style: String,
    pub color: String,
    pub background: String,
    pub border: String,
    pub border_radius: String,
    pub box_shadow: String,
    pub padding: String,
    pub top: String,
    pub right: String,
    pub z_index: String,
}

impl Default for NoticeStyle {
    fn default() -> Self {
        Self {
            font: "16px Arial, sans-serif".into(),
            font_style: "italic".into(),
            color: "#333".into(),
            background: "#eeffee".into(),
            border: "2px solid #aaa".into(),
            border_radius: "10px".into(),
            box_shadow: "3px 3px 15px 0px rgba(0, 0, 0, 0.3)".into(),
            padding: "15px 20px".into(),
            top: "15px".into(),
            right: "15px".into(),
            z_index: "9999999".into(),
        }
    }
}

impl NoticeStyle {
    /// `(style property, value)` pairs in the order they are applied.
    pub fn properties(&self) -> [(&'static str, &str); 11] {
        [
            ("font", self.font.as_str()),
            ("fontStyle", self.font_style.as_str()),
            ("color", self.color.as_str()),
            ("background", self.background.as_str()),
            ("border", self.border.as_str()),
            ("borderRadius", self.border_radius.as_str()),
            ("boxShadow", self.box_shadow.as_str()),
            ("padding", self.padding.as_str()),
            ("top", self.top.as_str()),
            ("right", self.right.as_str()),
            ("zIndex", self.z_index.as_str()),
        ]
    }
}

impl TemplateOptions {
    /// Load options from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read config: {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Failed to parse config: {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
