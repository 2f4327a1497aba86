//! Reputation scoring and lending-term resolution.
//!
//! Both halves are pure functions over caller-supplied values. [`ReputationEngine`]
//! bundles them with a [`RiskPolicy`] for callers that want the whole assessment.

mod domain;
mod scoring;
mod signals;
mod terms;

#[cfg(test)]
mod tests;

pub use domain::{MetricsError, ScoreBreakdown, ScoreComponent, WalletMetrics};
pub use scoring::{compute_score, MAX_TOTAL};
pub use signals::{improvement_tips, ImprovementTip, RiskFlag, RiskPolicy};
pub use terms::{resolve_terms, tier_for, Badge, BadgeTier, LendingTerms};

use serde::Serialize;
use tracing::debug;

/// Stateless evaluator that applies a risk policy on top of scoring and terms.
#[derive(Debug, Clone, Default)]
pub struct ReputationEngine {
    policy: RiskPolicy,
}

impl ReputationEngine {
    pub fn new(policy: RiskPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &RiskPolicy {
        &self.policy
    }

    pub fn assess(&self, metrics: &WalletMetrics) -> WalletAssessment {
        let breakdown = compute_score(metrics);
        let terms = resolve_terms(breakdown.total);
        let risk_flags = self.policy.flags(breakdown.total, metrics);
        let tips = improvement_tips(breakdown.total);

        debug!(
            total = breakdown.total,
            tier = ?terms.badge.tier,
            flags = risk_flags.len(),
            "wallet assessed"
        );

        WalletAssessment {
            breakdown,
            terms,
            risk_flags,
            tips,
        }
    }
}

/// Everything the presentation layer needs to render one wallet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletAssessment {
    pub breakdown: ScoreBreakdown,
    pub terms: LendingTerms,
    pub risk_flags: Vec<RiskFlag>,
    pub tips: Vec<ImprovementTip>,
}
