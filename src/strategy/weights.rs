//! Per-number weights inferred from play history.

use crate::core::Tile;

/// Weight per pip number, 0 through 6.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PipWeights([f64; 7]);

impl PipWeights {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `scale / (i + 1)` to both pips of the i-th tile, so earlier
    /// plays count more.
    pub fn accumulate_harmonic(&mut self, tiles: &[Tile], scale: f64) {
        for (i, tile) in tiles.iter().enumerate() {
            let weight = scale / (i as f64 + 1.0);
            for pip in tile.pips() {
                self.0[pip as usize] += weight;
            }
        }
    }

    #[must_use]
    pub fn get(&self, pip: u8) -> f64 {
        self.0[pip as usize]
    }

    /// Total weight over a set of numbers.
    #[must_use]
    pub fn sum(&self, pips: &[u8]) -> f64 {
        pips.iter().map(|&p| self.get(p)).sum()
    }
}

/// The first candidate with the highest score, so ties go to hand order.
pub(crate) fn first_max<T: Copy>(candidates: impl IntoIterator<Item = (T, f64)>) -> Option<(T, f64)> {
    let mut best: Option<(T, f64)> = None;
    for (item, score) in candidates {
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((item, score));
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harmonic_decay() {
        let mut weights = PipWeights::new();
        weights.accumulate_harmonic(&[Tile::new(1, 2), Tile::new(2, 3)], 2.0);
        assert!((weights.get(1) - 2.0).abs() < 1e-9);
        assert!((weights.get(2) - 3.0).abs() < 1e-9);
        assert!((weights.get(3) - 1.0).abs() < 1e-9);
        assert_eq!(weights.get(6), 0.0);
    }

    #[test]
    fn test_double_counts_both_halves() {
        let mut weights = PipWeights::new();
        weights.accumulate_harmonic(&[Tile::new(4, 4)], 1.0);
        assert!((weights.get(4) - 2.0).abs() < 1e-9);
        assert!((weights.sum(&[4, 0]) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_first_max_keeps_earliest_tie() {
        assert_eq!(first_max([(0, 1.0), (1, 3.0), (2, 3.0)]), Some((1, 3.0)));
        assert_eq!(first_max(Vec::<(usize, f64)>::new()), None);
        assert_eq!(first_max([(7, -4.0), (8, -5.0)]), Some((7, -4.0)));
    }
}
