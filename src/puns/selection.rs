use rand::seq::SliceRandom;
use rand::Rng;

/// Draw `k` items independently and uniformly; the same item may come back
/// more than once, so `k` can exceed `items.len()`.
pub fn sample_with_replacement<'a, T, R: Rng + ?Sized>(
    items: &'a [T],
    k: usize,
    rng: &mut R,
) -> Vec<&'a T> {
    if items.is_empty() {
        return Vec::new();
    }
    (0..k).filter_map(|_| items.choose(rng)).collect()
}

/// Draw up to `k` distinct positions from `items`.
pub fn sample_without_replacement<'a, T, R: Rng + ?Sized>(
    items: &'a [T],
    k: usize,
    rng: &mut R,
) -> Vec<&'a T> {
    items.choose_multiple(rng, k).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_with_replacement_can_exceed_population() {
        let items = ["a", "b"];
        let picked = sample_with_replacement(&items, 10, &mut rng());

        assert_eq!(picked.len(), 10);
        assert!(picked.iter().all(|p| items.contains(p)));
    }

    #[test]
    fn test_with_replacement_repeats_from_single_item() {
        let items = ["only"];
        let picked = sample_with_replacement(&items, 3, &mut rng());

        assert_eq!(picked, vec![&"only", &"only", &"only"]);
    }

    #[test]
    fn test_with_replacement_empty_population() {
        let items: [&str; 0] = [];

        assert!(sample_with_replacement(&items, 5, &mut rng()).is_empty());
    }

    #[test]
    fn test_with_replacement_zero_draws() {
        assert!(sample_with_replacement(&[1, 2, 3], 0, &mut rng()).is_empty());
    }

    #[test]
    fn test_without_replacement_is_distinct() {
        let items: Vec<u32> = (0..20).collect();

        for k in 0..=20 {
            let picked = sample_without_replacement(&items, k, &mut rng());
            let unique: HashSet<_> = picked.iter().collect();
            assert_eq!(picked.len(), k);
            assert_eq!(unique.len(), k);
        }
    }

    #[test]
    fn test_without_replacement_caps_at_population() {
        let items = [1, 2, 3];

        assert_eq!(sample_without_replacement(&items, 10, &mut rng()).len(), 3);
    }

    #[test]
    fn test_same_seed_same_draws() {
        let items: Vec<u32> = (0..100).collect();
        let a = sample_with_replacement(&items, 8, &mut rng());
        let b = sample_with_replacement(&items, 8, &mut rng());

        assert_eq!(a, b);
    }
}
