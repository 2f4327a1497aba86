use serde::{Deserialize, Serialize};

/// Activity metrics observed for a single wallet.
///
/// Field names serialize in camelCase so exported JSON matches the metric names
/// used by existing demo data.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletMetrics {
    /// Days since first observed activity.
    pub account_age: u32,
    pub active_months: u32,
    pub tx_count: u32,
    /// Cumulative transaction value in abstract currency units.
    pub volume: f64,
    pub unique_counterparties: u32,
    pub contract_interactions: u32,
    /// Expected to be at most `tx_count`; scoring does not enforce this.
    pub failed_tx: u32,
    /// Mean counterparty reputation, expected within `0..=100`.
    pub avg_counterparty_score: f64,
    pub protocols_used: u32,
}

impl WalletMetrics {
    /// Share of transactions that failed, or `0.0` when there is no history.
    pub fn failure_rate(&self) -> f64 {
        if self.tx_count == 0 {
            0.0
        } else {
            f64::from(self.failed_tx) / f64::from(self.tx_count)
        }
    }

    /// Checks the preconditions scoring silently trusts.
    pub fn validate(&self) -> Result<(), MetricsError> {
        if self.failed_tx > self.tx_count {
            return Err(MetricsError::FailedExceedsTotal {
                failed: self.failed_tx,
                total: self.tx_count,
            });
        }

        if !self.volume.is_finite() || self.volume < 0.0 {
            return Err(MetricsError::InvalidVolume(self.volume));
        }

        if !(0.0..=100.0).contains(&self.avg_counterparty_score) {
            return Err(MetricsError::CounterpartyScoreOutOfRange(
                self.avg_counterparty_score,
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MetricsError {
    #[error("failed transactions ({failed}) exceed total transactions ({total})")]
    FailedExceedsTotal { failed: u32, total: u32 },
    #[error("average counterparty score {0} is outside 0..=100")]
    CounterpartyScoreOutOfRange(f64),
    #[error("volume {0} must be a finite, non-negative amount")]
    InvalidVolume(f64),
}

/// The four weighted parts of a reputation score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreComponent {
    Maturity,
    Patterns,
    Behavior,
    Network,
}

impl ScoreComponent {
    pub const ALL: [ScoreComponent; 4] = [
        ScoreComponent::Maturity,
        ScoreComponent::Patterns,
        ScoreComponent::Behavior,
        ScoreComponent::Network,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ScoreComponent::Maturity => "Account Maturity",
            ScoreComponent::Patterns => "Transaction Patterns",
            ScoreComponent::Behavior => "Behavioral Trust",
            ScoreComponent::Network => "Network Effects",
        }
    }

    /// Cap applied to the component before it joins the total.
    pub fn max(&self) -> f64 {
        match self {
            ScoreComponent::Maturity => 250.0,
            ScoreComponent::Patterns => 300.0,
            ScoreComponent::Behavior => 250.0,
            ScoreComponent::Network => 200.0,
        }
    }
}

/// Derived score for one evaluation.
///
/// The integer component fields are display values. `total` is computed from the
/// unrounded components, so it can differ from the sum of the displayed values by a
/// point or two. Only the display values serialize; a breakdown is always
/// recomputed from metrics, never read back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub maturity: i32,
    pub patterns: i32,
    pub behavior: i32,
    pub network: i32,
    pub total: u16,
    #[serde(skip)]
    pub(crate) raw: RawComponents,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct RawComponents {
    pub maturity: f64,
    pub patterns: f64,
    pub behavior: f64,
    pub network: f64,
}

impl RawComponents {
    pub(crate) fn sum(&self) -> f64 {
        self.maturity + self.patterns + self.behavior + self.network
    }
}

impl ScoreBreakdown {
    /// Unrounded sum of the four capped components, before the total is clamped.
    pub fn component_sum(&self) -> f64 {
        self.raw.sum()
    }

    /// Unrounded value of a single component.
    pub fn unrounded(&self, component: ScoreComponent) -> f64 {
        match component {
            ScoreComponent::Maturity => self.raw.maturity,
            ScoreComponent::Patterns => self.raw.patterns,
            ScoreComponent::Behavior => self.raw.behavior,
            ScoreComponent::Network => self.raw.network,
        }
    }

    /// Rounded display value of a single component.
    pub fn value(&self, component: ScoreComponent) -> i32 {
        match component {
            ScoreComponent::Maturity => self.maturity,
            ScoreComponent::Patterns => self.patterns,
            ScoreComponent::Behavior => self.behavior,
            ScoreComponent::Network => self.network,
        }
    }

    /// `(component, display value, cap)` for each part, in display order.
    pub fn components(&self) -> impl Iterator<Item = (ScoreComponent, i32, u16)> + '_ {
        ScoreComponent::ALL
            .into_iter()
            .map(move |component| (component, self.value(component), component.max() as u16))
    }
}
