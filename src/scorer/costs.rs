use crate::corpus::normalize_word;
use crate::geometry::{distance, Geometry};
use crate::layouts::{letter_index, Layout};

/// Corpus-average inter-letter travel, evaluated straight from raw words.
///
/// Every qualifying adjacent pair weighs the same, so long words pull harder
/// than short ones. Returns `0.0` when no pair qualifies.
pub fn layout_cost<S: AsRef<str>>(layout: &Layout, geom: &Geometry, words: &[S]) -> f64 {
    let mut total = 0.0;
    let mut count: u64 = 0;

    for raw in words {
        let word = normalize_word(raw.as_ref());
        if word.len() < 2 {
            continue;
        }
        for pair in word.windows(2) {
            if let (Some(l1), Some(l2)) = (letter_index(pair[0]), letter_index(pair[1])) {
                total += distance(layout.position_of(l1, geom), layout.position_of(l2, geom));
                count += 1;
            }
        }
    }

    if count > 0 {
        total / count as f64
    } else {
        0.0
    }
}

/// Higher is better.
#[inline(always)]
pub fn fitness(cost: f64) -> f64 {
    -cost
}
