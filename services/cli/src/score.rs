use crate::render::render_assessment;
use clap::Args;
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use trustlayer::error::AppError;
use trustlayer::reputation::{ReputationEngine, WalletAssessment, WalletMetrics};

#[derive(Args, Debug, Default)]
pub(crate) struct ScoreArgs {
    /// JSON file holding one metrics record (camelCase field names)
    #[arg(long, conflicts_with = "MetricFlags")]
    pub(crate) metrics: Option<PathBuf>,
    #[command(flatten)]
    pub(crate) fields: MetricFlags,
    /// Emit the assessment as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

/// Individual metrics; anything omitted counts as zero.
#[derive(Args, Debug, Default)]
pub(crate) struct MetricFlags {
    /// Days since first activity
    #[arg(long)]
    account_age: Option<u32>,
    #[arg(long)]
    active_months: Option<u32>,
    #[arg(long)]
    tx_count: Option<u32>,
    /// Cumulative transaction value
    #[arg(long)]
    volume: Option<f64>,
    #[arg(long)]
    unique_counterparties: Option<u32>,
    #[arg(long)]
    contract_interactions: Option<u32>,
    #[arg(long)]
    failed_tx: Option<u32>,
    /// Mean counterparty reputation (0-100)
    #[arg(long)]
    avg_counterparty_score: Option<f64>,
    #[arg(long)]
    protocols_used: Option<u32>,
}

impl MetricFlags {
    fn to_metrics(&self) -> WalletMetrics {
        WalletMetrics {
            account_age: self.account_age.unwrap_or_default(),
            active_months: self.active_months.unwrap_or_default(),
            tx_count: self.tx_count.unwrap_or_default(),
            volume: self.volume.unwrap_or_default(),
            unique_counterparties: self.unique_counterparties.unwrap_or_default(),
            contract_interactions: self.contract_interactions.unwrap_or_default(),
            failed_tx: self.failed_tx.unwrap_or_default(),
            avg_counterparty_score: self.avg_counterparty_score.unwrap_or_default(),
            protocols_used: self.protocols_used.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ScoreReport<'a> {
    metrics: &'a WalletMetrics,
    #[serde(flatten)]
    assessment: &'a WalletAssessment,
}

pub(crate) fn run_score(args: ScoreArgs, engine: &ReputationEngine) -> Result<(), AppError> {
    let metrics = match &args.metrics {
        Some(path) => serde_json::from_reader(std::fs::File::open(path)?)?,
        None => args.fields.to_metrics(),
    };

    if let Err(err) = metrics.validate() {
        tracing::warn!(%err, "scoring metrics that violate documented preconditions");
    }

    let assessment = engine.assess(&metrics);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_score(&mut out, &metrics, &assessment, engine, args.json)
}

fn write_score<W: Write>(
    out: &mut W,
    metrics: &WalletMetrics,
    assessment: &WalletAssessment,
    engine: &ReputationEngine,
    json: bool,
) -> Result<(), AppError> {
    if json {
        let report = ScoreReport {
            metrics,
            assessment,
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        return Ok(());
    }

    render_assessment(out, metrics, assessment, engine.policy())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_flags_default_to_zero() {
        let flags = MetricFlags {
            tx_count: Some(40),
            failed_tx: Some(2),
            ..MetricFlags::default()
        };

        let metrics = flags.to_metrics();

        assert_eq!(metrics.tx_count, 40);
        assert_eq!(metrics.failed_tx, 2);
        assert_eq!(metrics.account_age, 0);
        assert_eq!(metrics.volume, 0.0);
    }

    #[test]
    fn json_report_includes_metrics_and_terms() {
        let engine = ReputationEngine::default();
        let metrics = WalletMetrics {
            account_age: 365,
            active_months: 12,
            tx_count: 100,
            unique_counterparties: 30,
            avg_counterparty_score: 60.0,
            ..WalletMetrics::default()
        };
        let assessment = engine.assess(&metrics);
        let mut buffer = Vec::new();

        write_score(&mut buffer, &metrics, &assessment, &engine, true).expect("report writes");

        let value: serde_json::Value = serde_json::from_slice(&buffer).expect("valid json");
        assert_eq!(value["metrics"]["accountAge"], 365);
        assert_eq!(value["breakdown"]["total"], assessment.breakdown.total);
        assert_eq!(value["terms"]["interestRate"], assessment.terms.interest_rate);
        assert_eq!(value["terms"]["maxLeverage"], assessment.terms.max_leverage);
        assert!(value["riskFlags"].is_array());
        assert!(value.get("risk_flags").is_none());
    }
}
