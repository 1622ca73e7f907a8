//! Rendering options for sexagenary names.

use crate::gapja::Script;

/// Options for [`Gapja::render_with`](crate::Gapja::render_with).
///
/// # Example
///
/// ```
/// use eumryeok_calendar::{RenderConfig, Script};
///
/// let config = RenderConfig::new()
///     .with_script(Script::Chinese)
///     .with_intercalation_marker(false);
///
/// assert_eq!(config.script(), Script::Chinese);
/// assert!(!config.intercalation_marker());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Character set for stems, branches and units.
    script: Script,
    /// Whether to append the parenthesised intercalation marker.
    intercalation_marker: bool,
}

impl RenderConfig {
    /// Creates the default configuration: Korean script, marker shown.
    pub fn new() -> Self {
        Self {
            script: Script::Korean,
            intercalation_marker: true,
        }
    }

    /// Sets the character set.
    pub fn with_script(mut self, script: Script) -> Self {
        self.script = script;
        self
    }

    /// Sets whether an intercalation month is marked.
    pub fn with_intercalation_marker(mut self, marker: bool) -> Self {
        self.intercalation_marker = marker;
        self
    }

    /// Returns the character set.
    pub fn script(&self) -> Script {
        self.script
    }

    /// Returns whether an intercalation month is marked.
    pub fn intercalation_marker(&self) -> bool {
        self.intercalation_marker
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new()
    }
}
