pub mod costs;
pub mod types;

pub use self::costs::{fitness, layout_cost};
pub use self::types::ScoreDetails;

use crate::corpus::Corpus;
use crate::error::KgResult;
use crate::geometry::{Geometry, ALPHABET_LEN};
use crate::layouts::Layout;
use tracing::debug;

/// One ordered letter pair that occurs in the corpus.
#[derive(Debug, Clone, Copy)]
struct PairRef {
    first: u8,
    second: u8,
    count: f64,
}

/// Cost evaluator bound to one catalog and one corpus.
///
/// Distances are precomputed for every slot pair and the corpus is kept as a
/// sparse list of occurring letter pairs, so a full evaluation touches at most
/// 26 * 26 entries regardless of corpus size.
pub struct Scorer {
    pub geometry: Geometry,
    distance_matrix: Vec<f64>,
    pairs: Vec<PairRef>,
    total_pairs: u64,
}

impl Scorer {
    pub fn new(geometry: Geometry, corpus: &Corpus) -> KgResult<Self> {
        geometry.validate()?;
        let distance_matrix = geometry.distance_matrix();

        let mut pairs = Vec::new();
        for a in 0..ALPHABET_LEN {
            for b in 0..ALPHABET_LEN {
                let count = corpus.pair_count(a, b);
                if count > 0 {
                    pairs.push(PairRef {
                        first: a as u8,
                        second: b as u8,
                        count: count as f64,
                    });
                }
            }
        }

        debug!(
            "Scorer ready: {} distinct letter pairs, {} total",
            pairs.len(),
            corpus.total_pairs()
        );

        Ok(Self {
            geometry,
            distance_matrix,
            pairs,
            total_pairs: corpus.total_pairs(),
        })
    }

    #[inline(always)]
    fn slot_distance(&self, a: u8, b: u8) -> f64 {
        self.distance_matrix[a as usize * ALPHABET_LEN + b as usize]
    }

    /// Fast path used by the optimizer.
    pub fn score(&self, layout: &Layout) -> f64 {
        if self.total_pairs == 0 {
            return 0.0;
        }
        let slots = layout.slots();
        let mut total = 0.0;
        for p in &self.pairs {
            total += self.slot_distance(slots[p.first as usize], slots[p.second as usize]) * p.count;
        }
        total / self.total_pairs as f64
    }

    pub fn fitness(&self, layout: &Layout) -> f64 {
        fitness(self.score(layout))
    }

    /// Slow path with counters, used by reports.
    pub fn score_details(&self, layout: &Layout) -> ScoreDetails {
        let slots = layout.slots();
        let mut d = ScoreDetails {
            pair_count: self.total_pairs,
            ..Default::default()
        };

        for p in &self.pairs {
            let s1 = slots[p.first as usize];
            let s2 = slots[p.second as usize];
            let n = p.count as u64;
            d.total_distance += self.slot_distance(s1, s2) * p.count;
            if s1 == s2 {
                d.same_key_pairs += n;
            } else if self.geometry.position(s1).y != self.geometry.position(s2).y {
                d.row_jumps += n;
            }
        }

        if self.total_pairs > 0 {
            d.cost = d.total_distance / self.total_pairs as f64;
        }
        d
    }

    pub fn total_pairs(&self) -> u64 {
        self.total_pairs
    }
}
