use rand::seq::SliceRandom;
use rand::RngCore;

/// Returns the elements of `items` in a uniformly random order.
///
/// The input is never mutated; every permutation is equally likely
/// (Fisher-Yates via `SliceRandom::shuffle`).
pub fn shuffled<T: Clone>(rng: &mut dyn RngCore, items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    out.shuffle(rng);
    out
}

/// Shuffles multiple-choice options and returns the new position of the
/// option that was at `correct_index`, so the index is never stale.
///
/// Panics if `correct_index` is out of range.
pub fn shuffle_options(
    rng: &mut dyn RngCore,
    options: Vec<String>,
    correct_index: usize,
) -> (Vec<String>, usize) {
    assert!(correct_index < options.len(), "correct_index out of range");

    // Shuffle (original index, option) pairs so tracking survives
    // duplicate option text.
    let mut indexed: Vec<(usize, String)> = options.into_iter().enumerate().collect();
    indexed.shuffle(rng);

    let new_index = indexed
        .iter()
        .position(|(original, _)| *original == correct_index)
        .unwrap_or(0);
    let options = indexed.into_iter().map(|(_, option)| option).collect();
    (options, new_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_shuffled_preserves_elements() {
        let mut rng = StdRng::seed_from_u64(7);
        let items = vec![1, 2, 3, 4, 5];
        let out = shuffled(&mut rng, &items);

        let mut sorted = out.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, items);
        // Input untouched.
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_shuffled_reaches_every_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let items = vec![1, 2, 3];
        let mut seen = HashSet::new();
        for _ in 0..500 {
            seen.insert(shuffled(&mut rng, &items));
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_correct_index_tracks_shuffle() {
        let options: Vec<String> = ["A", "B", "C", "D"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (shuffled, index) = shuffle_options(&mut rng, options.clone(), 2);
            assert_eq!(shuffled[index], "C");
        }
    }

    #[test]
    fn test_correct_index_tracks_duplicate_options() {
        let options: Vec<String> = ["x", "x", "y"].iter().map(|s| s.to_string()).collect();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let (shuffled, index) = shuffle_options(&mut rng, options.clone(), 2);
            assert_eq!(shuffled[index], "y");
        }
    }

    #[test]
    #[should_panic(expected = "correct_index out of range")]
    fn test_out_of_range_index_panics() {
        let mut rng = StdRng::seed_from_u64(0);
        shuffle_options(&mut rng, vec!["a".to_string(), "b".to_string()], 2);
    }
}
