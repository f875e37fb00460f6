//! Source and resolution scanners.
//!
//! Both scan the same way: each candidate is lowercased and looked up in the
//! variant's static alias table. The first hit in token order wins.

use super::Found;
use crate::model::AliasTable;

/// Return the first candidate naming a variant of `T`, with its token index.
pub fn find<'a, T: AliasTable>(
    mut candidates: impl Iterator<Item = (usize, &'a str)>,
) -> Option<Found<T>> {
    candidates.find_map(|(index, text)| {
        T::from_alias(&text.to_lowercase()).map(|value| Found { value, index })
    })
}
