use crate::error::{KeyGaError, KgResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Number of letters (and therefore key positions) a layout covers.
pub const ALPHABET_LEN: usize = 26;

/// The letters in rank order. Index `i` of a layout is the slot for `LETTERS[i]`.
pub const LETTERS: [u8; ALPHABET_LEN] = *b"abcdefghijklmnopqrstuvwxyz";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64, // Horizontal offset (~1u key width)
    pub y: f64, // Row: 2 = Upper, 1 = Middle, 0 = Lower
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Euclidean distance between two key positions.
#[inline(always)]
pub fn distance(p1: Position, p2: Position) -> f64 {
    let dx = p1.x - p2.x;
    let dy = p1.y - p2.y;
    (dx * dx + dy * dy).sqrt()
}

/// Fixed catalog of key positions. A layout assigns every letter one index into
/// `positions`; the catalog itself never changes during a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub positions: Vec<Position>,
}

impl Geometry {
    /// Builds a catalog and checks it has exactly one position per letter.
    pub fn new(positions: Vec<Position>) -> KgResult<Self> {
        let geom = Self { positions };
        geom.validate()?;
        Ok(geom)
    }

    /// Three staggered rows of 10, 9 and 7 keys.
    pub fn standard() -> Self {
        let mut positions = Vec::with_capacity(ALPHABET_LEN);
        // Upper
        for c in 0..10 {
            positions.push(Position::new(c as f64, 2.0));
        }
        // Middle
        for c in 0..9 {
            positions.push(Position::new(c as f64 + 0.5, 1.0));
        }
        // Lower
        for c in 0..7 {
            positions.push(Position::new(c as f64 + 1.5, 0.0));
        }
        Self { positions }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KgResult<Self> {
        let content = fs::read_to_string(path)?;
        let geom: Geometry = serde_json::from_str(&content)?;
        geom.validate()?;
        Ok(geom)
    }

    pub fn validate(&self) -> KgResult<()> {
        if self.positions.len() != ALPHABET_LEN {
            return Err(KeyGaError::Geometry(format!(
                "Catalog has {} positions, expected {}",
                self.positions.len(),
                ALPHABET_LEN
            )));
        }
        if let Some(p) = self
            .positions
            .iter()
            .find(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(KeyGaError::Geometry(format!(
                "Non-finite position ({}, {})",
                p.x, p.y
            )));
        }
        Ok(())
    }

    #[inline(always)]
    pub fn position(&self, slot: u8) -> Position {
        self.positions[slot as usize]
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Flattened `len * len` table of pairwise distances, indexed `a * len + b`.
    pub fn distance_matrix(&self) -> Vec<f64> {
        let n = self.positions.len();
        let mut matrix = vec![0.0; n * n];
        for (i, &a) in self.positions.iter().enumerate() {
            for (j, &b) in self.positions.iter().enumerate() {
                matrix[i * n + j] = distance(a, b);
            }
        }
        matrix
    }

    /// Smallest distance between two distinct catalog slots.
    pub fn min_pairwise_distance(&self) -> f64 {
        let mut best = f64::INFINITY;
        for (i, &a) in self.positions.iter().enumerate() {
            for &b in &self.positions[i + 1..] {
                best = best.min(distance(a, b));
            }
        }
        best
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_is_valid() {
        let geom = Geometry::standard();
        assert_eq!(geom.len(), ALPHABET_LEN);
        assert!(geom.validate().is_ok());

        let rows = [2.0, 1.0, 0.0].map(|y| geom.positions.iter().filter(|p| p.y == y).count());
        assert_eq!(rows, [10, 9, 7]);
    }

    #[test]
    fn test_wrong_size_is_fatal() {
        let mut positions = Geometry::standard().positions;
        positions.pop();
        let err = Geometry::new(positions).unwrap_err();
        assert!(matches!(err, KeyGaError::Geometry(_)));
    }

    #[test]
    fn test_distance_basics() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_eq!(distance(a, b), 5.0);
        assert_eq!(distance(b, a), 5.0);
        assert_eq!(distance(a, a), 0.0);
    }

    #[test]
    fn test_min_pairwise_distance() {
        // Row neighbours are 1.0 apart, stagger neighbours sqrt(1.25)
        assert_eq!(Geometry::standard().min_pairwise_distance(), 1.0);
    }
}
