//! Seeded train/test index splitting

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Shuffle 0..n_samples and split into (train, test) index sets
///
/// The seed controls only which samples land in which partition; the
/// same (n_samples, test_fraction, seed) triple always yields the same
/// split. The train side is never left empty for n_samples > 0.
pub fn train_test_split(
    n_samples: usize,
    test_fraction: f64,
    seed: u64,
) -> (Vec<usize>, Vec<usize>) {
    let mut indices: Vec<usize> = (0..n_samples).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let fraction = test_fraction.clamp(0.0, 1.0);
    let mut test_len = (n_samples as f64 * fraction).round() as usize;
    if test_len >= n_samples && n_samples > 0 {
        test_len = n_samples - 1;
    }

    let (test, train) = indices.split_at(test_len);
    (train.to_vec(), test.to_vec())
}
