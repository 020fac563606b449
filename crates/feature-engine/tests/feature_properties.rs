use data_validator::ValidationError;
use feature_engine::{
    energy_feature, extract_feature, harmonic_feature, score, StructuralConfig,
};
use proptest::prelude::*;

fn arb_sequence(max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e3f64..1.0e3, 0..max_len)
}

fn arb_config() -> impl Strategy<Value = StructuralConfig> {
    (1usize..40, prop_oneof![Just(1e-12), 1e-9f64..1.0])
        .prop_map(|(window, eps)| StructuralConfig::new(window, eps).unwrap())
}

// ── Degenerate sequences ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn short_sequences_give_empty_feature(seq in arb_sequence(2), config in arb_config()) {
        prop_assert!(extract_feature(&seq, config).unwrap().is_empty());
        prop_assert_eq!(score(&seq, config).unwrap(), 0.0);
    }
}

// ── Bounds ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn features_and_score_within_unit_range(seq in arb_sequence(120), config in arb_config()) {
        let features = extract_feature(&seq, config).unwrap();
        prop_assert_eq!(features.len(), seq.len().saturating_sub(1));
        for f in &features {
            prop_assert!((0.0..=1.0).contains(f));
        }

        let value = score(&seq, config).unwrap();
        prop_assert!((0.0..=1.0).contains(&value));
    }
}

proptest! {
    #[test]
    fn huge_finite_samples_never_escape_unit_range(
        seq in prop::collection::vec(prop::num::f64::NORMAL | prop::num::f64::ZERO, 0..40),
        window in 1usize..8,
    ) {
        let config = StructuralConfig::with_window(window).unwrap();
        match extract_feature(&seq, config) {
            Ok(features) => {
                for f in &features {
                    prop_assert!((0.0..=1.0).contains(f));
                }
            }
            Err(err) => prop_assert!(matches!(err, ValidationError::Overflow { .. }), "unexpected error: {:?}", err),
        }
    }
}

// ── Sign invariance ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn score_invariant_under_negation(seq in arb_sequence(120), config in arb_config()) {
        let negated: Vec<f64> = seq.iter().map(|v| -v).collect();
        prop_assert_eq!(score(&seq, config).unwrap(), score(&negated, config).unwrap());
    }
}

// ── Secondary features ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn harmonic_starts_at_first_sample(seq in arb_sequence(64)) {
        let out = harmonic_feature(&seq);
        prop_assert_eq!(out.len(), seq.len());
        if let Some(&first) = seq.first() {
            prop_assert_eq!(out[0], first);
        }
    }

    #[test]
    fn energy_non_negative_and_monotone(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6) {
        let out = energy_feature(&[a, b]);
        prop_assert!(out.iter().all(|&e| e >= 0.0));
        if a.abs() < b.abs() {
            prop_assert!(out[0] <= out[1]);
        }
    }
}
