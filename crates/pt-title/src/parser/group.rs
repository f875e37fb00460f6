//! Release group extraction.
//!
//! Only the last token is inspected. The group is whatever follows its final
//! hyphen, narrowed past the site separator when one is present, e.g.
//! `x264-GROUP` gives `GROUP` and `720p-TAG@SITE` gives `SITE`.

/// Extract the release group from the last token, or `""` when it has no hyphen.
pub fn find<'a>(tokens: &[&'a str], site_separator: Option<char>) -> &'a str {
    let Some(last) = tokens.last() else {
        return "";
    };
    let Some((_, group)) = last.rsplit_once('-') else {
        return "";
    };

    match site_separator.and_then(|sep| group.rsplit_once(sep)) {
        Some((_, site)) => site,
        None => group,
    }
}

/// The part of a token before its final hyphen.
pub fn stem(token: &str) -> Option<&str> {
    token.rsplit_once('-').map(|(stem, _)| stem)
}
