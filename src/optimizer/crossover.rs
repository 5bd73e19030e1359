use crate::geometry::ALPHABET_LEN;
use crate::layouts::Layout;
use fastrand::Rng;

/// Order Crossover (OX) over the slot sequence in letter order.
///
/// Picks two distinct cut points and delegates to [`order_crossover_with_cuts`].
pub fn order_crossover(p1: &Layout, p2: &Layout, rng: &mut Rng) -> Layout {
    let a = rng.usize(0..ALPHABET_LEN);
    let mut b = rng.usize(0..ALPHABET_LEN - 1);
    if b >= a {
        b += 1;
    }
    order_crossover_with_cuts(p1, p2, a.min(b), a.max(b))
}

/// Copies `p1[start..=end]` verbatim, then fills the remaining slots left to
/// right from index 0 with `p2`'s slots in `p2`'s order, skipping any slot
/// already taken by the copied segment.
///
/// `start == end` is accepted and copies a single gene.
pub fn order_crossover_with_cuts(p1: &Layout, p2: &Layout, start: usize, end: usize) -> Layout {
    debug_assert!(start <= end && end < ALPHABET_LEN);

    let genes1 = p1.slots();
    let genes2 = p2.slots();

    let mut child = [0u8; ALPHABET_LEN];
    let mut filled = [false; ALPHABET_LEN];
    let mut used = [false; ALPHABET_LEN];

    // 1. Inherit segment from P1
    for i in start..=end {
        child[i] = genes1[i];
        filled[i] = true;
        used[genes1[i] as usize] = true;
    }

    // 2. Fill gaps from P2, preserving its relative order
    let mut donor = genes2.iter().filter(|&&g| !used[g as usize]);
    for i in 0..ALPHABET_LEN {
        if !filled[i] {
            if let Some(&gene) = donor.next() {
                child[i] = gene;
            }
        }
    }

    Layout::from_slots_unchecked(child)
}
