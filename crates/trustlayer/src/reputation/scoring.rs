use super::domain::{RawComponents, ScoreBreakdown, ScoreComponent, WalletMetrics};

/// Upper bound of the composite score.
pub const MAX_TOTAL: f64 = 1000.0;

const DAYS_PER_YEAR: f64 = 365.0;
const MONTHS_PER_YEAR: f64 = 12.0;
const VOLUME_UNIT: f64 = 100_000.0;
const SUCCESS_BASELINE: f64 = 80.0;

/// Scores a wallet from its activity metrics.
///
/// Each component is capped at its own maximum before summing; none borrows
/// headroom from another. The behavior component has no floor, so a wallet whose
/// `failed_tx` exceeds `tx_count` can report a negative behavior value. Only the
/// total is clamped to `0..=1000`. An empty transaction history contributes a
/// failure rate of zero.
///
/// A NaN input (e.g. `volume`) propagates through its component and the sum, so
/// that component displays as `0` and the total resolves to `0` rather than a
/// capped maximum.
pub fn compute_score(metrics: &WalletMetrics) -> ScoreBreakdown {
    let raw = RawComponents {
        maturity: maturity(metrics),
        patterns: patterns(metrics),
        behavior: behavior(metrics),
        network: network(metrics),
    };

    let total = round_half_up(raw.sum().clamp(0.0, MAX_TOTAL)) as u16;

    ScoreBreakdown {
        maturity: round_half_up(raw.maturity) as i32,
        patterns: round_half_up(raw.patterns) as i32,
        behavior: round_half_up(raw.behavior) as i32,
        network: round_half_up(raw.network) as i32,
        total,
        raw,
    }
}

fn maturity(metrics: &WalletMetrics) -> f64 {
    let age = f64::from(metrics.account_age) / DAYS_PER_YEAR * 100.0;
    let activity = f64::from(metrics.active_months) / MONTHS_PER_YEAR * 100.0;
    cap(age + activity, ScoreComponent::Maturity)
}

fn patterns(metrics: &WalletMetrics) -> f64 {
    let frequency = f64::from(metrics.tx_count) / 10.0;
    let volume = metrics.volume / VOLUME_UNIT * 50.0;
    let diversity = f64::from(metrics.unique_counterparties) * 2.0;
    cap(frequency + volume + diversity, ScoreComponent::Patterns)
}

fn behavior(metrics: &WalletMetrics) -> f64 {
    let contracts = f64::from(metrics.contract_interactions) * 4.0;
    let reliability = SUCCESS_BASELINE - metrics.failure_rate() * SUCCESS_BASELINE;
    cap(contracts + reliability, ScoreComponent::Behavior)
}

fn network(metrics: &WalletMetrics) -> f64 {
    let protocols = f64::from(metrics.protocols_used) * 10.0;
    cap(metrics.avg_counterparty_score + protocols, ScoreComponent::Network)
}

// `f64::min` would discard NaN and report the cap.
fn cap(value: f64, component: ScoreComponent) -> f64 {
    if value.is_nan() {
        value
    } else {
        value.min(component.max())
    }
}

/// Rounds halves toward positive infinity, so `-2.5` becomes `-2`.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
