//! # pt-title
//!
//! Extracts structured metadata from scene-style release names.
//!
//! Given a name such as `"Some.Movie.Title.2015.1080p.BluRay.x264-GROUP"`,
//! the parser splits it on dots and spaces, locates the year, the digital
//! format and the resolution, reads the release group off the last token,
//! and takes every token before the first recognised field as the title.
//!
//! ## Quick Start
//!
//! ```
//! use pt_title::{parse, DigitalFormat, DigitalResolution};
//!
//! let info = parse("Some.Movie.Title.2015.1080p.BluRay.x264-GROUP");
//!
//! assert_eq!(info.title, "Some Movie Title");
//! assert_eq!(info.year, Some(2015));
//! assert_eq!(info.resolution, DigitalResolution::FHD);
//! assert_eq!(info.source, DigitalFormat::Blueray);
//! assert_eq!(info.group, "GROUP");
//! ```
//!
//! ## Configurable Parsing
//!
//! ```
//! use pt_title::Parser;
//! use pt_title::config::ParserConfig;
//!
//! let config = ParserConfig::builder().site_separator(None).build();
//!
//! let parser = Parser::new(config);
//! let info = parser.parse("Movie.2020.WEBDL.720p-TAG@SITE");
//! assert_eq!(info.group, "TAG@SITE");
//! ```

pub mod config;
pub mod error;
pub mod model;
pub mod tokenizer;

mod parser;

pub use config::ParserConfig;
pub use error::ParseError;
pub use model::{AliasTable, DigitalFormat, DigitalResolution, MediaInfo};

/// Parse a release name into structured metadata using default settings.
///
/// Never fails: fields that cannot be found come back absent.
///
/// # Examples
///
/// ```
/// use pt_title::{parse, DigitalFormat};
///
/// let info = parse("NoYearNoFormatNoRes");
/// assert_eq!(info.title, "NoYearNoFormatNoRes");
/// assert!(info.year.is_none());
/// assert_eq!(info.source, DigitalFormat::Unknown);
/// ```
pub fn parse(input: &str) -> MediaInfo {
    parser::parse(input)
}

/// A configurable release name parser.
///
/// ```
/// use pt_title::Parser;
/// use pt_title::config::ParserConfig;
///
/// let parser = Parser::new(ParserConfig::builder().title_separator("_").build());
/// assert_eq!(parser.parse("Some.Movie.2015").title, "Some_Movie");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a new parser with the given configuration.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// The configuration this parser was built with.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a release name into structured metadata.
    pub fn parse(&self, input: &str) -> MediaInfo {
        parser::parse_with_config(input, &self.config)
    }
}
