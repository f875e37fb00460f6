//! Logos-based tokenizer for release names.
//!
//! Release names are split on spaces and dots. Runs of delimiters collapse,
//! so the tokenizer never yields an empty token and leading or trailing
//! delimiters are dropped. Hyphens, underscores and brackets stay inside
//! tokens; the group extractor relies on the hyphen surviving.

use logos::Logos;

/// Token types emitted by the Logos lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ .]+")]
pub enum Token {
    /// A maximal run of non-delimiter characters.
    #[regex(r"[^ .]+")]
    Word,
}

/// Tokenize an input string into its words, in order.
///
/// # Examples
///
/// ```
/// use pt_title::tokenizer::tokenize;
///
/// assert_eq!(tokenize("..The Movie..2015."), vec!["The", "Movie", "2015"]);
/// ```
pub fn tokenize(input: &str) -> Vec<&str> {
    Token::lexer(input)
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|_| &input[span]))
        .collect()
}
