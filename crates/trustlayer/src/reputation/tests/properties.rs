use crate::reputation::{compute_score, resolve_terms, WalletMetrics};
use proptest::prelude::*;

prop_compose! {
    fn valid_metrics()(
        account_age in 0u32..5_000,
        active_months in 0u32..200,
        tx_count in 0u32..100_000,
        volume in 0.0f64..1.0e9,
        unique_counterparties in 0u32..10_000,
        contract_interactions in 0u32..10_000,
        failed_ratio in 0.0f64..=1.0,
        avg_counterparty_score in 0.0f64..=100.0,
        protocols_used in 0u32..500,
    ) -> WalletMetrics {
        WalletMetrics {
            account_age,
            active_months,
            tx_count,
            volume,
            unique_counterparties,
            contract_interactions,
            failed_tx: (f64::from(tx_count) * failed_ratio).floor() as u32,
            avg_counterparty_score,
            protocols_used,
        }
    }
}

proptest! {
    #[test]
    fn components_stay_within_their_caps(metrics in valid_metrics()) {
        let breakdown = compute_score(&metrics);

        prop_assert!((0..=250).contains(&breakdown.maturity));
        prop_assert!((0..=300).contains(&breakdown.patterns));
        prop_assert!((0..=250).contains(&breakdown.behavior));
        prop_assert!((0..=200).contains(&breakdown.network));
        prop_assert!(breakdown.total <= 1000);
    }

    #[test]
    fn total_is_the_capped_rounded_component_sum(metrics in valid_metrics()) {
        let breakdown = compute_score(&metrics);
        let expected = (breakdown.component_sum().min(1000.0) + 0.5).floor() as u16;

        prop_assert_eq!(breakdown.total, expected);
        prop_assert_eq!(breakdown, compute_score(&metrics));
    }

    #[test]
    fn better_scores_never_worsen_terms(low in 0u16..=1000, delta in 0u16..=1000) {
        let high = low.saturating_add(delta).min(1000);
        let (low_terms, high_terms) = (resolve_terms(low), resolve_terms(high));

        prop_assert!(high_terms.annual_rate_bps <= low_terms.annual_rate_bps);
        prop_assert!(high_terms.leverage_tenths >= low_terms.leverage_tenths);
        prop_assert!(high_terms.badge.tier >= low_terms.badge.tier);
    }
}
