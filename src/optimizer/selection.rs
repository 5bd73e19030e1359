use fastrand::Rng;

/// Draws `size` distinct indices from `costs` and returns the one with the
/// lowest cost. Ties go to the first index drawn.
///
/// Callers validate `1 <= size <= costs.len()` up front.
pub fn tournament_select(costs: &[f64], size: usize, rng: &mut Rng) -> usize {
    debug_assert!(size >= 1 && size <= costs.len());

    let mut best: Option<usize> = None;
    for idx in sample_distinct(costs.len(), size, rng) {
        match best {
            Some(b) if costs[idx] >= costs[b] => {}
            _ => best = Some(idx),
        }
    }
    best.unwrap_or(0)
}

/// `k` distinct values from `0..n`, in draw order.
pub fn sample_distinct(n: usize, k: usize, rng: &mut Rng) -> Vec<usize> {
    let k = k.min(n);
    if k * 4 <= n {
        // Sparse draw: rejection is cheaper than materializing 0..n
        let mut picked = Vec::with_capacity(k);
        while picked.len() < k {
            let idx = rng.usize(0..n);
            if !picked.contains(&idx) {
                picked.push(idx);
            }
        }
        picked
    } else {
        // Partial Fisher-Yates
        let mut pool: Vec<usize> = (0..n).collect();
        for i in 0..k {
            let j = rng.usize(i..n);
            pool.swap(i, j);
        }
        pool.truncate(k);
        pool
    }
}
