//! Data model types for parsed release names.
//!
//! [`MediaInfo`] is the parse result. [`DigitalFormat`] and
//! [`DigitalResolution`] are closed enumerations, each backed by a static
//! alias table used to recognise tokens.

mod format;
mod media_info;
mod resolution;

pub use format::DigitalFormat;
pub use media_info::MediaInfo;
pub use resolution::DigitalResolution;

/// An enumeration whose variants are recognised through fixed alias strings.
///
/// Implementors back [`from_alias`](AliasTable::from_alias) with a static map,
/// so lookups never depend on iteration order and alias sets stay disjoint.
pub trait AliasTable: Copy + 'static {
    /// The variant reported when nothing matches.
    const UNKNOWN: Self;

    /// Look up an already-lowercased alias.
    fn from_alias(alias: &str) -> Option<Self>;

    /// Lowercased alias strings recognised for this variant.
    fn aliases(self) -> &'static [&'static str];
}
