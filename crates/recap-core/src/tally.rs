//! Contributor tallying and ranking.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One ranked row of the weekly tally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyEntry {
    pub name: String,
    pub count: u64,
}

/// Folds extracted names into a tally and ranks it by count, descending.
///
/// Ties keep the order in which the distinct names were first encountered.
/// Names are compared exactly as extracted — no trimming beyond what
/// extraction already did and no case folding — so cosmetic variants of the
/// same contributor count as separate entries.
#[must_use]
pub fn tally_names<I>(names: I) -> Vec<TallyEntry>
where
    I: IntoIterator<Item = String>,
{
    let (mut entries, _) = names.into_iter().fold(
        (Vec::<TallyEntry>::new(), HashMap::<String, usize>::new()),
        |(mut entries, mut index), name| {
            if let Some(&slot) = index.get(&name) {
                entries[slot].count += 1;
            } else {
                index.insert(name.clone(), entries.len());
                entries.push(TallyEntry { name, count: 1 });
            }
            (entries, index)
        },
    );

    // Stable sort: equal counts keep first-seen order.
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries
}

#[cfg(test)]
#[path = "tally_test.rs"]
mod tests;
