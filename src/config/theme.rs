//! Theme configuration: design tokens and utility-framework wiring

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Theme configuration
///
/// Design tokens are indirected through CSS custom properties so the
/// actual values live in one stylesheet; this struct only declares the
/// token names and which variables they reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Globs the utility framework scans for class usage
    pub content: Vec<String>,
    /// Dark-mode activation strategy
    pub dark_mode: DarkMode,
    /// Font tokens: name -> CSS variable reference
    pub fonts: IndexMap<String, String>,
    /// Color tokens: name -> CSS variable reference
    pub colors: IndexMap<String, String>,
    /// Enabled theme plugins
    pub plugins: Vec<String>,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        let mut fonts = IndexMap::new();
        fonts.insert("oswald".to_string(), css_var("font-oswald"));

        let mut colors = IndexMap::new();
        colors.insert("background".to_string(), css_var("color-background"));
        colors.insert("text".to_string(), css_var("color-text"));
        colors.insert("muted".to_string(), css_var("color-text-muted"));
        colors.insert("link".to_string(), css_var("color-link"));

        Self {
            content: vec!["src/**/*.{html,md,mdx,js,ts}".to_string()],
            dark_mode: DarkMode::Class,
            fonts,
            colors,
            plugins: vec!["typography".to_string()],
        }
    }
}

impl ThemeConfig {
    /// Look up a color token's variable reference
    pub fn color(&self, name: &str) -> Option<&str> {
        self.colors.get(name).map(|s| s.as_str())
    }

    /// Look up a font token's variable reference
    pub fn font(&self, name: &str) -> Option<&str> {
        self.fonts.get(name).map(|s| s.as_str())
    }
}

/// Build a `var(--name)` reference for a custom property
pub fn css_var(name: &str) -> String {
    format!("var(--{})", name.trim_start_matches("--"))
}

/// Dark-mode activation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DarkMode {
    /// Toggled by a class on the document root
    Class,
    /// Follows the OS color-scheme preference
    Media,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tokens() {
        let theme = ThemeConfig::default();
        assert_eq!(theme.dark_mode, DarkMode::Class);
        assert_eq!(theme.color("background"), Some("var(--color-background)"));
        assert_eq!(theme.color("muted"), Some("var(--color-text-muted)"));
        assert_eq!(theme.font("oswald"), Some("var(--font-oswald)"));
        assert_eq!(theme.plugins, vec!["typography"]);
    }

    #[test]
    fn test_css_var() {
        assert_eq!(css_var("color-link"), "var(--color-link)");
        assert_eq!(css_var("--color-link"), "var(--color-link)");
    }

    #[test]
    fn test_parse_theme() {
        let yaml = r#"
dark_mode: media
colors:
  accent: var(--color-accent)
"#;
        let theme: ThemeConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(theme.dark_mode, DarkMode::Media);
        assert_eq!(theme.color("accent"), Some("var(--color-accent)"));
    }
}
