use super::domain::WalletMetrics;
use serde::{Deserialize, Serialize};

/// Thresholds used to raise risk flags on low-scoring wallets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskPolicy {
    /// Flags are only evaluated for totals strictly below this score.
    pub score_ceiling: u16,
    pub new_account_days: u32,
    pub min_counterparties: u32,
    /// Failure rates strictly above this share are flagged.
    pub max_failure_rate: f64,
}

impl Default for RiskPolicy {
    fn default() -> Self {
        Self {
            score_ceiling: 400,
            new_account_days: 90,
            min_counterparties: 20,
            max_failure_rate: 0.1,
        }
    }
}

impl RiskPolicy {
    pub fn flags(&self, total: u16, metrics: &WalletMetrics) -> Vec<RiskFlag> {
        let mut flags = Vec::new();
        if total >= self.score_ceiling {
            return flags;
        }

        if metrics.account_age < self.new_account_days {
            flags.push(RiskFlag::NewAccount);
        }
        if metrics.unique_counterparties < self.min_counterparties {
            flags.push(RiskFlag::LimitedInteractionDiversity);
        }
        if metrics.tx_count > 0 && metrics.failure_rate() > self.max_failure_rate {
            flags.push(RiskFlag::HighFailureRate);
        }

        flags
    }

    /// Flag text with the thresholds this policy actually applies.
    pub fn describe(&self, flag: RiskFlag) -> String {
        match flag {
            RiskFlag::NewAccount => {
                format!("{} (<{} days)", flag.description(), self.new_account_days)
            }
            RiskFlag::LimitedInteractionDiversity => format!(
                "{} (<{} counterparties)",
                flag.description(),
                self.min_counterparties
            ),
            RiskFlag::HighFailureRate => format!(
                "{} (>{}%)",
                flag.description(),
                percent(self.max_failure_rate)
            ),
        }
    }
}

fn percent(share: f64) -> String {
    let formatted = format!("{:.2}", share * 100.0);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFlag {
    NewAccount,
    LimitedInteractionDiversity,
    HighFailureRate,
}

impl RiskFlag {
    /// Threshold-free label; [`RiskPolicy::describe`] adds the applied limit.
    pub fn description(&self) -> &'static str {
        match self {
            RiskFlag::NewAccount => "New account",
            RiskFlag::LimitedInteractionDiversity => "Limited interaction diversity",
            RiskFlag::HighFailureRate => "High failure rate",
        }
    }
}

/// Informational advice on how a wallet can raise its score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImprovementTip {
    StayActive,
    DiversifyInteractions,
    BuildLongTermHistory,
    MaintainTrackRecord,
}

impl ImprovementTip {
    pub fn title(&self) -> &'static str {
        match self {
            ImprovementTip::StayActive => "Stay Active",
            ImprovementTip::DiversifyInteractions => "Diversify Interactions",
            ImprovementTip::BuildLongTermHistory => "Build Long-term History",
            ImprovementTip::MaintainTrackRecord => "Maintain Good Track Record",
        }
    }

    pub fn detail(&self) -> &'static str {
        match self {
            ImprovementTip::StayActive => "Regular transactions improve consistency",
            ImprovementTip::DiversifyInteractions => {
                "Use more protocols and interact with more addresses"
            }
            ImprovementTip::BuildLongTermHistory => "Time and consistent activity matter",
            ImprovementTip::MaintainTrackRecord => "Minimize failed transactions",
        }
    }
}

/// Tips for a score, most urgent first. The track-record tip is always present.
pub fn improvement_tips(total: u16) -> Vec<ImprovementTip> {
    let mut tips = Vec::with_capacity(4);
    if total < 400 {
        tips.push(ImprovementTip::StayActive);
    }
    if total < 600 {
        tips.push(ImprovementTip::DiversifyInteractions);
    }
    if total < 800 {
        tips.push(ImprovementTip::BuildLongTermHistory);
    }
    tips.push(ImprovementTip::MaintainTrackRecord);
    tips
}
