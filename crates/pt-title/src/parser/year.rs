//! Year scanner.
//!
//! A year is a token of exactly four ASCII digits starting with `1` or `2`.

use winnow::prelude::*;
use winnow::stream::AsChar;
use winnow::token::{one_of, take_while};

use super::Found;

/// Recognise a whole token as a year in 1000--2999.
fn year_digits(input: &mut &str) -> PResult<u32> {
    (one_of(['1', '2']), take_while(3, AsChar::is_dec_digit))
        .map(|(lead, rest): (char, &str)| {
            rest.bytes()
                .fold(lead as u32 - '0' as u32, |acc, b| acc * 10 + u32::from(b - b'0'))
        })
        .parse_next(input)
}

/// Return the first candidate that is a year, with its token index.
pub fn find<'a>(mut candidates: impl Iterator<Item = (usize, &'a str)>) -> Option<Found<u32>> {
    candidates.find_map(|(index, text)| {
        year_digits
            .parse(text)
            .ok()
            .map(|value| Found { value, index })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use winnow::prelude::*;

    fn year_of(text: &str) -> Option<u32> {
        year_digits.parse(text).ok()
    }

    #[test]
    fn test_accepts_four_digit_years() {
        assert_eq!(year_of("1999"), Some(1999));
        assert_eq!(year_of("2015"), Some(2015));
        assert_eq!(year_of("1000"), Some(1000));
        assert_eq!(year_of("2999"), Some(2999));
    }

    #[test]
    fn test_rejects_out_of_range_lead() {
        assert_eq!(year_of("0999"), None);
        assert_eq!(year_of("3000"), None);
        assert_eq!(year_of("9999"), None);
    }

    #[test]
    fn test_rejects_wrong_length_or_non_digits() {
        assert_eq!(year_of("199"), None);
        assert_eq!(year_of("19999"), None);
        assert_eq!(year_of("20a5"), None);
        assert_eq!(year_of("2O15"), None);
        assert_eq!(year_of("1080p"), None);
        assert_eq!(year_of("2+15"), None);
        assert_eq!(year_of(""), None);
    }

    #[test]
    fn test_rejects_non_ascii_digits() {
        assert_eq!(year_of("２０１５"), None);
        assert_eq!(year_of("2٠١٥"), None);
    }

    #[test]
    fn test_first_match_wins() {
        let tokens = ["Blade", "Runner", "2049", "2017"];
        let found = find(tokens.iter().copied().enumerate());
        assert_eq!(found, Some(Found { value: 2049, index: 2 }));
    }

    #[test]
    fn test_not_found() {
        let tokens = ["Movie", "1080p", "x264-GROUP"];
        assert_eq!(find(tokens.iter().copied().enumerate()), None);
    }
}
