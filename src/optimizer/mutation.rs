use crate::geometry::ALPHABET_LEN;
use crate::layouts::Layout;
use fastrand::Rng;

/// One Bernoulli trial per call: with probability `rate` two distinct letters
/// trade positions. Returns the (possibly unchanged) layout by value.
pub fn mutate(layout: Layout, rate: f64, rng: &mut Rng) -> Layout {
    if rng.f64() < rate {
        let (a, b) = pick_two_letters(rng);
        layout.with_swapped(a, b)
    } else {
        layout
    }
}

fn pick_two_letters(rng: &mut Rng) -> (usize, usize) {
    let a = rng.usize(0..ALPHABET_LEN);
    let mut b = rng.usize(0..ALPHABET_LEN - 1);
    if b >= a {
        b += 1;
    }
    (a, b)
}
