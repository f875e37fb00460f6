//! Digital distribution format (the release "source").

use super::AliasTable;
use crate::error::ParseError;

/// Acquisition or distribution channel of the release.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum DigitalFormat {
    /// Blu-ray disc rip
    Blueray,
    /// HDTV broadcast capture
    HDTV,
    /// Web download
    WebDL,
    /// Ultra HD broadcast capture
    UHDTV,
    /// No format token was found
    #[default]
    Unknown,
}

static FORMAT_ALIASES: phf::Map<&'static str, DigitalFormat> = phf::phf_map! {
    "bluray" => DigitalFormat::Blueray,
    "blu-ray" => DigitalFormat::Blueray,
    "blueray" => DigitalFormat::Blueray,
    "bd" => DigitalFormat::Blueray,
    "hdtv" => DigitalFormat::HDTV,
    "webdl" => DigitalFormat::WebDL,
    "web-dl" => DigitalFormat::WebDL,
    "uhdtv" => DigitalFormat::UHDTV,
};

impl DigitalFormat {
    /// Every recognisable variant, in declaration order.
    pub const ALL: [DigitalFormat; 4] = [
        DigitalFormat::Blueray,
        DigitalFormat::HDTV,
        DigitalFormat::WebDL,
        DigitalFormat::UHDTV,
    ];

    /// Whether a format token was actually recognised.
    pub fn is_known(self) -> bool {
        self != DigitalFormat::Unknown
    }
}

impl AliasTable for DigitalFormat {
    const UNKNOWN: Self = DigitalFormat::Unknown;

    fn from_alias(alias: &str) -> Option<Self> {
        FORMAT_ALIASES.get(alias).copied()
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            DigitalFormat::Blueray => &["bluray", "blu-ray", "blueray", "bd"],
            DigitalFormat::HDTV => &["hdtv"],
            DigitalFormat::WebDL => &["webdl", "web-dl"],
            DigitalFormat::UHDTV => &["uhdtv"],
            DigitalFormat::Unknown => &[],
        }
    }
}

impl std::fmt::Display for DigitalFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DigitalFormat::Blueray => write!(f, "BluRay"),
            DigitalFormat::HDTV => write!(f, "HDTV"),
            DigitalFormat::WebDL => write!(f, "WEB-DL"),
            DigitalFormat::UHDTV => write!(f, "UHDTV"),
            DigitalFormat::Unknown => write!(f, "Unknown"),
        }
    }
}

impl std::str::FromStr for DigitalFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DigitalFormat::from_alias(&s.to_lowercase()).ok_or_else(|| ParseError::unknown_format(s))
    }
}
