use trustlayer::catalog::{WalletCatalog, WalletProfile};
use trustlayer::reputation::{
    compute_score, resolve_terms, BadgeTier, ImprovementTip, ReputationEngine, RiskFlag,
    WalletMetrics,
};

fn persona(catalog: &WalletCatalog, name: &str) -> WalletProfile {
    catalog
        .find(name)
        .unwrap_or_else(|| panic!("{name} present in demo catalog"))
        .clone()
}

#[test]
fn alice_reaches_the_top_of_the_scale() {
    let catalog = WalletCatalog::demo();
    let alice = persona(&catalog, "alice");

    let breakdown = compute_score(&alice.metrics);
    assert_eq!(
        (
            breakdown.maturity,
            breakdown.patterns,
            breakdown.behavior,
            breakdown.network
        ),
        (250, 300, 250, 200)
    );
    assert_eq!(breakdown.total, 1000);

    let terms = resolve_terms(breakdown.total);
    assert_eq!(terms.badge.label, "Elite");
    assert_eq!(terms.interest_rate, "3.00%");
    assert_eq!(terms.max_leverage, "10x");
}

#[test]
fn bob_is_flagged_for_age_and_diversity_but_not_failures() {
    let catalog = WalletCatalog::demo();
    let bob = persona(&catalog, "bob");

    let assessment = ReputationEngine::default().assess(&bob.metrics);

    assert!(assessment.breakdown.total < 400);
    assert_eq!(assessment.breakdown.total, 211);
    assert_eq!(assessment.terms.badge.tier, BadgeTier::Emerging);
    assert_eq!(assessment.terms.interest_rate, "12.00%");
    assert_eq!(
        assessment.risk_flags,
        vec![RiskFlag::NewAccount, RiskFlag::LimitedInteractionDiversity]
    );
    assert!((bob.metrics.failure_rate() - 0.08).abs() < 1e-12);
}

#[test]
fn demo_personas_span_the_score_bands() {
    let catalog = WalletCatalog::demo();
    let engine = ReputationEngine::default();

    let summary: Vec<(String, u16, String, String)> = catalog
        .iter()
        .map(|wallet| {
            let assessment = engine.assess(&wallet.metrics);
            (
                wallet.short_name().to_string(),
                assessment.breakdown.total,
                assessment.terms.interest_rate,
                assessment.terms.max_leverage,
            )
        })
        .collect();

    let expected = [
        ("Alice", 1000, "3.00%", "10x"),
        ("Bob", 211, "12.00%", "1.5x"),
        ("Carol", 758, "6.00%", "5x"),
        ("Dave", 441, "9.00%", "2x"),
        ("Eve", 1000, "3.00%", "10x"),
    ];
    assert_eq!(summary.len(), expected.len());
    for ((name, total, rate, leverage), (exp_name, exp_total, exp_rate, exp_leverage)) in
        summary.iter().zip(expected)
    {
        assert_eq!(name, exp_name);
        assert_eq!(*total, exp_total, "total for {name}");
        assert_eq!(rate, exp_rate, "rate for {name}");
        assert_eq!(leverage, exp_leverage, "leverage for {name}");
    }
}

#[test]
fn dave_keeps_failure_history_visible_in_tips_not_flags() {
    let catalog = WalletCatalog::demo();
    let dave = persona(&catalog, "dave");

    let assessment = ReputationEngine::default().assess(&dave.metrics);

    assert_eq!(assessment.breakdown.total, 441);
    assert!(assessment.risk_flags.is_empty(), "flags only below 400");
    assert_eq!(
        assessment.tips.last(),
        Some(&ImprovementTip::MaintainTrackRecord)
    );
}

#[test]
fn zero_transaction_wallet_scores_without_faulting() {
    let metrics = WalletMetrics {
        account_age: 200,
        active_months: 3,
        contract_interactions: 5,
        avg_counterparty_score: 60.0,
        protocols_used: 1,
        ..WalletMetrics::default()
    };

    let assessment = ReputationEngine::default().assess(&metrics);

    assert_eq!(assessment.breakdown.behavior, 100);
    assert!(assessment.breakdown.component_sum().is_finite());
    assert!(!assessment.risk_flags.contains(&RiskFlag::HighFailureRate));
}

#[test]
fn metrics_json_uses_camel_case_names() {
    let json = r#"{
        "accountAge": 730, "activeMonths": 24, "txCount": 2500, "volume": 5000000,
        "uniqueCounterparties": 150, "contractInteractions": 45, "failedTx": 25,
        "avgCounterpartyScore": 95, "protocolsUsed": 12
    }"#;

    let metrics: WalletMetrics = serde_json::from_str(json).expect("metrics parse");

    assert_eq!(metrics, persona(&WalletCatalog::demo(), "1").metrics);
}
