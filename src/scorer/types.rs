#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ScoreDetails {
    /// Mean travel per qualifying letter pair (the optimized quantity).
    pub cost: f64,

    // Raw components
    pub total_distance: f64,
    pub pair_count: u64,

    // === STATISTICAL COUNTERS ===
    /// Pairs typed on one key (double letters).
    pub same_key_pairs: u64,
    /// Pairs whose keys sit on different rows.
    pub row_jumps: u64,
}

impl ScoreDetails {
    pub fn row_jump_ratio(&self) -> f64 {
        if self.pair_count == 0 {
            0.0
        } else {
            self.row_jumps as f64 / self.pair_count as f64
        }
    }
}
