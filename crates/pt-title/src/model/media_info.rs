//! The parse result.

use super::{DigitalFormat, DigitalResolution};

/// Structured metadata extracted from a release name.
///
/// Produced once per [`parse`](crate::parse) call. Every field falls back to
/// an "absent" value when its token is not found: an empty string, `None`,
/// or the `Unknown` variant.
///
/// # Examples
///
/// ```
/// use pt_title::{parse, DigitalFormat, DigitalResolution};
///
/// let info = parse("Some.Movie.Title.2015.1080p.BluRay.x264-GROUP");
/// assert_eq!(info.title, "Some Movie Title");
/// assert_eq!(info.year, Some(2015));
/// assert_eq!(info.source, DigitalFormat::Blueray);
/// assert_eq!(info.resolution, DigitalResolution::FHD);
/// assert_eq!(info.group, "GROUP");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaInfo {
    /// Tokens before the first recognised field, joined with a space.
    pub title: String,

    /// Release year (1000--2999).
    pub year: Option<u32>,

    /// Release group (text after the final hyphen of the last token).
    pub group: String,

    /// Digital distribution format.
    pub source: DigitalFormat,

    /// Resolution class.
    pub resolution: DigitalResolution,
}

impl MediaInfo {
    /// True when nothing at all was extracted.
    pub fn is_empty(&self) -> bool {
        *self == MediaInfo::default()
    }
}
