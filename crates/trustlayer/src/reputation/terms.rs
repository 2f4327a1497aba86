use serde::{Deserialize, Serialize};

/// Reputation tier shown alongside the badge label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTier {
    Untrusted,
    Emerging,
    Established,
    Trusted,
    Elite,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub label: String,
    pub tier: BadgeTier,
}

/// Lending terms offered for a given reputation score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LendingTerms {
    /// Borrowing APR as displayed, e.g. `"6.00%"`.
    pub interest_rate: String,
    /// Borrowing power as displayed, e.g. `"5x"`.
    pub max_leverage: String,
    pub badge: Badge,
    pub annual_rate_bps: u16,
    /// Leverage multiplier in tenths, so `1.5x` is `15`.
    pub leverage_tenths: u16,
}

struct LendingBand {
    annual_rate_bps: u16,
    leverage_tenths: u16,
    leverage_label: &'static str,
    badge_label: &'static str,
    tier: BadgeTier,
}

/// Bands ordered by descending lower bound; the first bound the total reaches wins.
const LENDING_BANDS: &[(u16, LendingBand)] = &[
    (
        800,
        LendingBand {
            annual_rate_bps: 300,
            leverage_tenths: 100,
            leverage_label: "10x",
            badge_label: "Elite",
            tier: BadgeTier::Elite,
        },
    ),
    (
        600,
        LendingBand {
            annual_rate_bps: 600,
            leverage_tenths: 50,
            leverage_label: "5x",
            badge_label: "Trusted",
            tier: BadgeTier::Trusted,
        },
    ),
    (
        400,
        LendingBand {
            annual_rate_bps: 900,
            leverage_tenths: 20,
            leverage_label: "2x",
            badge_label: "Established",
            tier: BadgeTier::Established,
        },
    ),
    (
        200,
        LendingBand {
            annual_rate_bps: 1200,
            leverage_tenths: 15,
            leverage_label: "1.5x",
            badge_label: "Emerging",
            tier: BadgeTier::Emerging,
        },
    ),
    (
        0,
        LendingBand {
            annual_rate_bps: 1500,
            leverage_tenths: 10,
            leverage_label: "1x (fully collateralized)",
            badge_label: "New/Untrusted",
            tier: BadgeTier::Untrusted,
        },
    ),
];

/// Resolves the lending terms for a composite score.
///
/// ```
/// use trustlayer::reputation::resolve_terms;
///
/// let terms = resolve_terms(800);
/// assert_eq!(terms.badge.label, "Elite");
/// assert_eq!(terms.interest_rate, "3.00%");
/// assert_eq!(resolve_terms(799).max_leverage, "5x");
/// ```
pub fn resolve_terms(total: u16) -> LendingTerms {
    let band = band_for(total);

    LendingTerms {
        interest_rate: format_rate(band.annual_rate_bps),
        max_leverage: band.leverage_label.to_string(),
        badge: Badge {
            label: band.badge_label.to_string(),
            tier: band.tier,
        },
        annual_rate_bps: band.annual_rate_bps,
        leverage_tenths: band.leverage_tenths,
    }
}

/// Tier for a score without building the full terms.
pub fn tier_for(total: u16) -> BadgeTier {
    band_for(total).tier
}

fn band_for(total: u16) -> &'static LendingBand {
    let (_, fallback) = &LENDING_BANDS[LENDING_BANDS.len() - 1];
    LENDING_BANDS
        .iter()
        .find(|(lower_bound, _)| total >= *lower_bound)
        .map(|(_, band)| band)
        .unwrap_or(fallback)
}

fn format_rate(bps: u16) -> String {
    format!("{}.{:02}%", bps / 100, bps % 100)
}
