//! Parser configuration.

/// Configuration for the parser.
///
/// The defaults reproduce the conventional scene naming rules: title tokens
/// are joined with a single space and a group written as `TAG-GROUP@SITE`
/// is narrowed to the part after `@`.
///
/// ```
/// use pt_title::config::ParserConfig;
///
/// let config = ParserConfig::builder()
///     .title_separator("_")
///     .site_separator(None)
///     .build();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParserConfig {
    /// String placed between title tokens.
    /// Default: `" "`
    pub title_separator: String,

    /// Marker that narrows the release group to whatever follows it.
    /// `None` keeps everything after the final hyphen.
    /// Default: `Some('@')`
    pub site_separator: Option<char>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            title_separator: " ".to_string(),
            site_separator: Some('@'),
        }
    }
}

impl ParserConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder.
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::default()
    }
}

/// Builder for `ParserConfig`.
#[derive(Debug, Clone, Default)]
pub struct ParserConfigBuilder {
    title_separator: Option<String>,
    site_separator: Option<Option<char>>,
}

impl ParserConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the string used to join title tokens.
    ///
    /// Default: `" "`
    pub fn title_separator(mut self, separator: impl Into<String>) -> Self {
        self.title_separator = Some(separator.into());
        self
    }

    /// Set the marker that narrows the release group, or `None` to disable.
    ///
    /// Default: `Some('@')`
    pub fn site_separator(mut self, separator: Option<char>) -> Self {
        self.site_separator = Some(separator);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ParserConfig {
        let defaults = ParserConfig::default();
        ParserConfig {
            title_separator: self.title_separator.unwrap_or(defaults.title_separator),
            site_separator: self.site_separator.unwrap_or(defaults.site_separator),
        }
    }
}
