use std::io::{self, Write};
use trustlayer::catalog::WalletProfile;
use trustlayer::reputation::{BadgeTier, RiskPolicy, WalletAssessment, WalletMetrics};

const BAR_WIDTH: usize = 20;

/// Wallet chosen for the detail view; held by the caller, never global.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Selection<'a> {
    pub(crate) wallet: &'a WalletProfile,
}

pub(crate) struct ScoredWallet<'a> {
    pub(crate) wallet: &'a WalletProfile,
    pub(crate) assessment: WalletAssessment,
}

pub(crate) fn render_picker<W: Write>(
    out: &mut W,
    wallets: &[ScoredWallet<'_>],
    selection: Selection<'_>,
) -> io::Result<()> {
    writeln!(out, "Select demo wallet")?;
    for scored in wallets {
        let marker = if scored.wallet.id == selection.wallet.id {
            '*'
        } else {
            ' '
        };
        writeln!(
            out,
            "  [{marker}] {:<8} {:>4}  {}",
            scored.wallet.short_name(),
            scored.assessment.breakdown.total,
            tier_tag(scored.assessment.terms.badge.tier)
        )?;
    }
    Ok(())
}

pub(crate) fn render_wallet_card<W: Write>(
    out: &mut W,
    selection: Selection<'_>,
    assessment: &WalletAssessment,
) -> io::Result<()> {
    let wallet = selection.wallet;
    writeln!(out, "{}  {}", wallet.name, wallet.address)?;
    if !wallet.story.is_empty() {
        writeln!(out, "  {}", wallet.story)?;
    }
    writeln!(
        out,
        "  [{}] Reputation score {} (out of 1000)",
        assessment.terms.badge.label, assessment.breakdown.total
    )
}

/// Breakdown, metrics, lending terms, tips and risk signals for one record.
pub(crate) fn render_assessment<W: Write>(
    out: &mut W,
    metrics: &WalletMetrics,
    assessment: &WalletAssessment,
    policy: &RiskPolicy,
) -> io::Result<()> {
    writeln!(out, "\nScore breakdown")?;
    for (component, value, max) in assessment.breakdown.components() {
        writeln!(
            out,
            "  {:<22} {:>4}/{:<4} {}",
            component.label(),
            value,
            max,
            bar(value, max)
        )?;
    }
    writeln!(
        out,
        "  {:<22} {:>4}/1000",
        "Total", assessment.breakdown.total
    )?;

    writeln!(out, "\nOn-chain metrics")?;
    writeln!(
        out,
        "  Account age {}d | Transactions {} | Connections {}",
        metrics.account_age, metrics.tx_count, metrics.unique_counterparties
    )?;

    writeln!(out, "\nLending benefits")?;
    writeln!(
        out,
        "  Interest rate {:<8} APR on borrowing",
        assessment.terms.interest_rate
    )?;
    writeln!(
        out,
        "  Max leverage  {:<8} borrowing power",
        assessment.terms.max_leverage
    )?;

    writeln!(out, "\nHow to improve")?;
    for tip in &assessment.tips {
        writeln!(out, "  - {}: {}", tip.title(), tip.detail())?;
    }

    if assessment.breakdown.total < policy.score_ceiling {
        writeln!(out, "\nRisk signals")?;
        if assessment.risk_flags.is_empty() {
            writeln!(out, "  none raised")?;
        }
        for flag in &assessment.risk_flags {
            writeln!(out, "  ! {}", policy.describe(*flag))?;
        }
    }

    Ok(())
}

pub(crate) fn render_comparison<W: Write>(
    out: &mut W,
    wallets: &[ScoredWallet<'_>],
) -> io::Result<()> {
    writeln!(out, "Quick comparison")?;
    writeln!(
        out,
        "  {:<8} {:>5}  {:<13} {}",
        "User", "Score", "Interest Rate", "Max Leverage"
    )?;
    for scored in wallets {
        writeln!(
            out,
            "  {:<8} {:>5}  {:<13} {}",
            scored.wallet.short_name(),
            scored.assessment.breakdown.total,
            scored.assessment.terms.interest_rate,
            scored.assessment.terms.max_leverage
        )?;
    }
    Ok(())
}

fn tier_tag(tier: BadgeTier) -> &'static str {
    match tier {
        BadgeTier::Elite => "elite",
        BadgeTier::Trusted => "trusted",
        BadgeTier::Established => "established",
        BadgeTier::Emerging => "emerging",
        BadgeTier::Untrusted => "untrusted",
    }
}

fn bar(value: i32, max: u16) -> String {
    let max = i32::from(max.max(1));
    let filled = (value.clamp(0, max) as usize * BAR_WIDTH) / max as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}
