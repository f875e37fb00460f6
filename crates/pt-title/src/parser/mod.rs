//! Core parsing logic for release names.
//!
//! The parser operates in three phases:
//! 1. Tokenize the input with the Logos lexer.
//! 2. Run the year, source and resolution scanners and the group extractor
//!    independently over the same tokens.
//! 3. Cut the title at the earliest recognised field.

mod alias;
mod group;
mod year;

use crate::config::ParserConfig;
use crate::model::{DigitalFormat, DigitalResolution, MediaInfo};
use crate::tokenizer::tokenize;

/// A recognised value and the index of the token it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Found<T> {
    pub value: T,
    pub index: usize,
}

/// Parse a release name using the default configuration.
pub fn parse(input: &str) -> MediaInfo {
    parse_with_config(input, &ParserConfig::default())
}

/// Parse a release name into a [`MediaInfo`] with custom configuration.
pub fn parse_with_config(input: &str, config: &ParserConfig) -> MediaInfo {
    if input.is_empty() {
        return MediaInfo::default();
    }

    let tokens = tokenize(input);

    #[cfg(feature = "tracing")]
    tracing::trace!(tokens = tokens.len(), "tokenized release name");

    let year = year::find(candidates(&tokens));
    let source = alias::find::<DigitalFormat>(candidates(&tokens));
    let resolution = alias::find::<DigitalResolution>(candidates(&tokens));
    let group = group::find(&tokens, config.site_separator);

    // Everything before the earliest recognised field is the title.
    let cut = [
        year.map(|f| f.index),
        source.map(|f| f.index),
        resolution.map(|f| f.index),
    ]
    .into_iter()
    .flatten()
    .min()
    .unwrap_or(tokens.len());

    let info = MediaInfo {
        title: tokens[..cut].join(config.title_separator.as_str()),
        year: year.map(|f| f.value),
        group: group.to_string(),
        source: source.map_or(DigitalFormat::Unknown, |f| f.value),
        resolution: resolution.map_or(DigitalResolution::Unknown, |f| f.value),
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        title = %info.title,
        year = ?info.year,
        source = %info.source,
        resolution = %info.resolution,
        group = %info.group,
        cut,
        "parsed release name"
    );

    info
}

/// Texts the field scanners test, in token order.
///
/// Every token is a candidate. The last token is additionally tried without
/// its group suffix, so `720p-GROUP` still yields `720p`.
fn candidates<'a>(tokens: &'a [&'a str]) -> impl Iterator<Item = (usize, &'a str)> + 'a {
    let last = tokens.len().checked_sub(1);
    tokens.iter().enumerate().flat_map(move |(index, token)| {
        let stem = if Some(index) == last {
            group::stem(token)
        } else {
            None
        };
        std::iter::once((index, *token)).chain(stem.map(|s| (index, s)))
    })
}
