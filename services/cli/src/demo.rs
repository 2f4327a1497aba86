use crate::render::{
    render_assessment, render_comparison, render_picker, render_wallet_card, ScoredWallet,
    Selection,
};
use clap::Args;
use serde_json::json;
use std::io::Write;
use std::path::PathBuf;
use trustlayer::catalog::WalletCatalog;
use trustlayer::error::AppError;
use trustlayer::reputation::ReputationEngine;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Wallet to inspect, by id or first name. Defaults to the first wallet.
    #[arg(long)]
    pub(crate) select: Option<String>,
    /// Optional CSV export replacing the built-in demo personas
    #[arg(long)]
    pub(crate) wallets: Option<PathBuf>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CompareArgs {
    /// Optional CSV export replacing the built-in demo personas
    #[arg(long)]
    pub(crate) wallets: Option<PathBuf>,
    /// Emit the comparison as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_demo(args: DemoArgs, engine: &ReputationEngine) -> Result<(), AppError> {
    let catalog = load_catalog(args.wallets)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_demo(&mut out, &catalog, args.select.as_deref(), engine)
}

pub(crate) fn run_compare(args: CompareArgs, engine: &ReputationEngine) -> Result<(), AppError> {
    let catalog = load_catalog(args.wallets)?;
    let scored = score_catalog(&catalog, engine);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.json {
        let rows: Vec<_> = scored
            .iter()
            .map(|entry| {
                json!({
                    "id": entry.wallet.id,
                    "name": entry.wallet.name,
                    "score": entry.assessment.breakdown.total,
                    "interestRate": entry.assessment.terms.interest_rate,
                    "maxLeverage": entry.assessment.terms.max_leverage,
                })
            })
            .collect();
        serde_json::to_writer_pretty(&mut out, &rows)?;
        writeln!(out)?;
        return Ok(());
    }

    render_comparison(&mut out, &scored)?;
    Ok(())
}

pub(crate) fn load_catalog(path: Option<PathBuf>) -> Result<WalletCatalog, AppError> {
    match path {
        Some(path) => {
            let catalog = WalletCatalog::from_path(&path)?;
            tracing::info!(path = %path.display(), wallets = catalog.len(), "loaded wallet export");
            Ok(catalog)
        }
        None => Ok(WalletCatalog::demo()),
    }
}

fn score_catalog<'a>(
    catalog: &'a WalletCatalog,
    engine: &ReputationEngine,
) -> Vec<ScoredWallet<'a>> {
    catalog
        .iter()
        .map(|wallet| ScoredWallet {
            wallet,
            assessment: engine.assess(&wallet.metrics),
        })
        .collect()
}

fn resolve_selection<'a>(
    catalog: &'a WalletCatalog,
    key: Option<&str>,
) -> Result<Selection<'a>, AppError> {
    let wallet = match key {
        Some(key) => catalog.find(key),
        None => catalog.first(),
    };

    wallet
        .map(|wallet| Selection { wallet })
        .ok_or_else(|| AppError::UnknownWallet(key.unwrap_or_default().to_string()))
}

fn write_demo<W: Write>(
    out: &mut W,
    catalog: &WalletCatalog,
    select: Option<&str>,
    engine: &ReputationEngine,
) -> Result<(), AppError> {
    let selection = resolve_selection(catalog, select)?;
    let scored = score_catalog(catalog, engine);
    let assessment = engine.assess(&selection.wallet.metrics);

    writeln!(out, "TrustLayer: decentralized reputation demo (simulated data)\n")?;
    render_picker(out, &scored, selection)?;
    writeln!(out)?;
    render_wallet_card(out, selection, &assessment)?;
    render_assessment(out, &selection.wallet.metrics, &assessment, engine.policy())?;
    writeln!(out)?;
    render_comparison(out, &scored)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use trustlayer::reputation::RiskPolicy;

    fn demo_output(select: Option<&str>) -> String {
        demo_output_with(select, &ReputationEngine::default())
    }

    fn demo_output_with(select: Option<&str>, engine: &ReputationEngine) -> String {
        let mut buffer = Vec::new();
        write_demo(&mut buffer, &WalletCatalog::demo(), select, engine).expect("demo renders");
        String::from_utf8(buffer).expect("utf8 output")
    }

    #[test]
    fn default_selection_is_the_first_wallet() {
        let output = demo_output(None);

        assert!(output.contains("[*] Alice"));
        assert!(output.contains("[Elite] Reputation score 1000"));
        assert!(!output.contains("Risk signals"));
    }

    #[test]
    fn low_scoring_selection_shows_risk_signals() {
        let output = demo_output(Some("bob"));

        assert!(output.contains("[*] Bob"));
        assert!(output.contains("Risk signals"));
        assert!(output.contains("New account (<90 days)"));
        assert!(output.contains("Limited interaction diversity (<20 counterparties)"));
        assert!(!output.contains("High failure rate"));
        assert!(output.contains("Stay Active"));
    }

    #[test]
    fn risk_signals_name_the_configured_thresholds() {
        let engine = ReputationEngine::new(RiskPolicy {
            new_account_days: 30,
            min_counterparties: 10,
            max_failure_rate: 0.05,
            ..RiskPolicy::default()
        });
        let output = demo_output_with(Some("bob"), &engine);

        assert!(output.contains("New account (<30 days)"));
        assert!(output.contains("Limited interaction diversity (<10 counterparties)"));
        assert!(output.contains("High failure rate (>5%)"));
        assert!(!output.contains("<90 days"));
    }

    #[test]
    fn comparison_lists_every_wallet() {
        let output = demo_output(Some("4"));

        for name in ["Alice", "Bob", "Carol", "Dave", "Eve"] {
            assert!(output.contains(name), "{name} missing from output");
        }
        assert!(output.contains("Dave (Suspicious)  0x5e9a...1c4d"));
        assert!(output.contains("Quick comparison"));
    }

    #[test]
    fn unknown_selection_is_an_error() {
        let catalog = WalletCatalog::demo();
        match resolve_selection(&catalog, Some("mallory")) {
            Err(AppError::UnknownWallet(key)) => assert_eq!(key, "mallory"),
            other => panic!("expected unknown wallet, got {other:?}"),
        }
    }
}
