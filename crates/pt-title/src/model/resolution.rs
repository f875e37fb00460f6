//! Video resolution class.

use super::AliasTable;
use crate::error::ParseError;

/// Resolution class of the release.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum DigitalResolution {
    /// 1080p/1080i Full HD
    FHD,
    /// 720p HD
    HD,
    /// 2160p Ultra HD (4K)
    UHD4K,
    /// No resolution token was found
    #[default]
    Unknown,
}

static RESOLUTION_ALIASES: phf::Map<&'static str, DigitalResolution> = phf::phf_map! {
    "1080" => DigitalResolution::FHD,
    "1080p" => DigitalResolution::FHD,
    "1080i" => DigitalResolution::FHD,
    "720" => DigitalResolution::HD,
    "720p" => DigitalResolution::HD,
    "4k" => DigitalResolution::UHD4K,
};

impl DigitalResolution {
    /// Every recognisable variant, in declaration order.
    pub const ALL: [DigitalResolution; 3] = [
        DigitalResolution::FHD,
        DigitalResolution::HD,
        DigitalResolution::UHD4K,
    ];

    /// Whether a resolution token was actually recognised.
    pub fn is_known(self) -> bool {
        self != DigitalResolution::Unknown
    }
}

impl AliasTable for DigitalResolution {
    const UNKNOWN: Self = DigitalResolution::Unknown;

    fn from_alias(alias: &str) -> Option<Self> {
        RESOLUTION_ALIASES.get(alias).copied()
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            DigitalResolution::FHD => &["1080", "1080p", "1080i"],
            DigitalResolution::HD => &["720", "720p"],
            DigitalResolution::UHD4K => &["4k"],
            DigitalResolution::Unknown => &[],
        }
    }
}

impl std::fmt::Display for DigitalResolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DigitalResolution::FHD => write!(f, "1080p"),
            DigitalResolution::HD => write!(f, "720p"),
            DigitalResolution::UHD4K => write!(f, "4K"),
            DigitalResolution::Unknown => write!(f, "Unknown"),
        }
    }
}

impl std::str::FromStr for DigitalResolution {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DigitalResolution::from_alias(&s.to_lowercase())
            .ok_or_else(|| ParseError::unknown_resolution(s))
    }
}
