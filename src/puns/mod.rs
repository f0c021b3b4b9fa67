pub mod core;
pub mod selection;

// Re-export the main types for convenience
pub use self::core::{parse_record, parse_records, PunRecord, PunSource, ANONYMOUS};
pub use self::selection::{sample_with_replacement, sample_without_replacement};

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sampled_bundled_puns_render_with_attribution() {
        let puns = PunSource::Bundled.load();
        let mut rng = StdRng::seed_from_u64(42);

        let rendered: Vec<String> = sample_with_replacement(&puns, 50, &mut rng)
            .into_iter()
            .map(|p| p.to_string())
            .collect();

        assert_eq!(rendered.len(), 50);
        assert!(rendered.iter().all(|line| line.starts_with('@')));
        assert!(rendered.iter().all(|line| line.contains(": ")));
    }
}
