use crate::layouts::Layout;
use fastrand::Rng;

/// Uniformly random bijection: shuffles the catalog slots and zips them against
/// the letters in rank order.
pub fn random_layout(rng: &mut Rng) -> Layout {
    let mut slots = *Layout::identity().slots();
    rng.shuffle(&mut slots);
    Layout::from_slots_unchecked(slots)
}

pub fn random_population(rng: &mut Rng, size: usize) -> Vec<Layout> {
    (0..size).map(|_| random_layout(rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ALPHABET_LEN;
    use crate::layouts::is_permutation;

    #[test]
    fn test_random_layouts_are_permutations() {
        let mut rng = Rng::with_seed(7);
        for layout in random_population(&mut rng, 200) {
            assert!(is_permutation(layout.slots()));
        }
    }

    #[test]
    fn test_every_slot_reachable_for_a_letter() {
        let mut rng = Rng::with_seed(11);
        let mut seen = [false; ALPHABET_LEN];
        for _ in 0..2000 {
            seen[random_layout(&mut rng).slot_of(0) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "Letter 'a' never reached some slot");
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = random_layout(&mut Rng::with_seed(99));
        let b = random_layout(&mut Rng::with_seed(99));
        assert_eq!(a, b);
    }
}
