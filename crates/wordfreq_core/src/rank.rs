use std::cmp::Ordering;

use crate::{FrequencyTable, Token};

/// One line of a report: 1-based rank, token and its count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub rank: usize,
    pub token: Token,
    pub count: usize,
}

/// Orders the table by count descending, ties broken by ascending token.
///
/// Ranks run 1..=N with no gaps, N being the number of distinct tokens.
pub fn rank(table: &FrequencyTable) -> Vec<RankedEntry> {
    let mut pairs: Vec<(&Token, usize)> = table.iter().collect();
    pairs.sort_by(by_count_then_token);

    pairs
        .into_iter()
        .enumerate()
        .map(|(index, (token, count))| RankedEntry {
            rank: index + 1,
            token: token.clone(),
            count,
        })
        .collect()
}

fn by_count_then_token(a: &(&Token, usize), b: &(&Token, usize)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}
