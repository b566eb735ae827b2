// ============================================================
// Layer 4 — Train/Test Splitter
// ============================================================
// Shuffles row indices and splits them into two disjoint sets:
//   - Test set:     the first ceil(n · test_fraction) indices
//   - Training set: every remaining index
//
// 150 iris rows with test_fraction = 0.2 → 120 train / 30 test.
//
// Why a fixed seed?
//   The split must be identical on every run, otherwise the
//   accuracy printed by training would change between runs
//   for reasons unrelated to the model. StdRng seeded with
//   seed_from_u64 gives the same permutation every time.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom.
//
// Reference: Rust Book §8 (Vectors)
//            rand crate documentation

use anyhow::{bail, Result};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::domain::table::{Dataset, Partition};

/// Shuffle `0..n` with a seeded RNG and return (train, test) indices.
pub fn split_indices(n: usize, test_fraction: f64, seed: u64) -> Result<(Vec<usize>, Vec<usize>)> {
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        bail!("test_fraction must be in (0, 1), got {test_fraction}");
    }

    let mut rng     = StdRng::seed_from_u64(seed);
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(&mut rng);

    // Round the test side up, matching the usual 80/20 convention
    let n_test = ((n as f64) * test_fraction).ceil() as usize;
    let n_test = n_test.min(n);

    // split_off(k) leaves [0..k] in place and returns [k..n]
    let train = indices.split_off(n_test);
    let test  = indices;

    tracing::debug!(
        "Dataset split: {} training, {} test (seed {})",
        train.len(),
        test.len(),
        seed
    );
    Ok((train, test))
}

/// Split a dataset into row-aligned train and test partitions.
pub fn train_test_split(dataset: &Dataset, test_fraction: f64, seed: u64) -> Result<Partition> {
    let (train_idx, test_idx) = split_indices(dataset.n_rows(), test_fraction, seed)?;
    Ok(Partition {
        train: dataset.select(&train_idx),
        test:  dataset.select(&test_idx),
    })
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::table::{FeatureTable, LabelColumn};

    #[test]
    fn test_correct_split_sizes() {
        let (train, test) = split_indices(150, 0.2, 42).unwrap();
        assert_eq!(train.len(), 120);
        assert_eq!(test.len(), 30);

        let (train, test) = split_indices(100, 0.2, 42).unwrap();
        assert_eq!(train.len(), 80);
        assert_eq!(test.len(), 20);
    }

    #[test]
    fn test_test_side_rounds_up() {
        let (train, test) = split_indices(11, 0.2, 0).unwrap();
        assert_eq!(test.len(), 3);
        assert_eq!(train.len(), 8);
    }

    #[test]
    fn test_all_items_preserved_and_disjoint() {
        let (train, test) = split_indices(50, 0.3, 7).unwrap();
        let mut all: Vec<usize> = train.iter().chain(&test).copied().collect();
        all.sort_unstable();
        assert_eq!(all, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_same_split() {
        assert_eq!(split_indices(150, 0.2, 42).unwrap(), split_indices(150, 0.2, 42).unwrap());
    }

    #[test]
    fn test_different_seed_different_split() {
        assert_ne!(split_indices(150, 0.2, 42).unwrap(), split_indices(150, 0.2, 43).unwrap());
    }

    #[test]
    fn test_empty_dataset() {
        let (train, test) = split_indices(0, 0.2, 42).unwrap();
        assert!(train.is_empty());
        assert!(test.is_empty());
    }

    #[test]
    fn test_invalid_fraction_rejected() {
        assert!(split_indices(10, 0.0, 42).is_err());
        assert!(split_indices(10, 1.0, 42).is_err());
        assert!(split_indices(10, f64::NAN, 42).is_err());
    }

    #[test]
    fn test_partition_rows_stay_aligned() {
        // Label i belongs to the row whose feature is i as f32
        let features = FeatureTable::new(
            vec!["x".to_string()],
            (0..20).map(|i| vec![i as f32]).collect(),
        )
        .unwrap();
        let target  = LabelColumn::new("target", (0..20).collect());
        let dataset = Dataset::new(features, target).unwrap();

        let part = train_test_split(&dataset, 0.25, 1).unwrap();
        assert_eq!(part.train.n_rows(), 15);
        assert_eq!(part.test.n_rows(), 5);
        for split in [&part.train, &part.test] {
            for (row, label) in split.features().rows().iter().zip(split.target().values()) {
                assert_eq!(row[0], *label as f32);
            }
        }
    }
}
