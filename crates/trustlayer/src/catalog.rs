//! Demo wallet personas and CSV-backed wallet catalogs.

use crate::reputation::{MetricsError, WalletMetrics};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

/// A named wallet shown by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletProfile {
    pub id: u32,
    pub name: String,
    pub address: String,
    pub story: String,
    pub metrics: WalletMetrics,
}

impl WalletProfile {
    /// First word of the display name, e.g. `"Alice"` for `"Alice (Elite Trader)"`.
    pub fn short_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Csv(csv::Error),
    InvalidMetrics { wallet: u32, source: MetricsError },
    DuplicateWallet(u32),
    Empty,
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "failed to read wallet export: {}", err),
            CatalogError::Csv(err) => write!(f, "invalid wallet CSV data: {}", err),
            CatalogError::InvalidMetrics { wallet, source } => {
                write!(f, "wallet {} has invalid metrics: {}", wallet, source)
            }
            CatalogError::DuplicateWallet(id) => {
                write!(f, "wallet id {} appears more than once", id)
            }
            CatalogError::Empty => write!(f, "wallet export contains no wallets"),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(err) => Some(err),
            CatalogError::Csv(err) => Some(err),
            CatalogError::InvalidMetrics { source, .. } => Some(source),
            CatalogError::DuplicateWallet(_) | CatalogError::Empty => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for CatalogError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Ordered set of wallets a caller can pick from.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletCatalog {
    wallets: Vec<WalletProfile>,
}

impl WalletCatalog {
    /// The five sample personas, one per reputation story.
    pub fn demo() -> Self {
        let wallets = vec![
            persona(
                1,
                "Alice (Elite Trader)",
                "0x7a8f...9b2c",
                "Active DeFi user for 2+ years, consistent trading history",
                WalletMetrics {
                    account_age: 730,
                    active_months: 24,
                    tx_count: 2500,
                    volume: 5_000_000.0,
                    unique_counterparties: 150,
                    contract_interactions: 45,
                    failed_tx: 25,
                    avg_counterparty_score: 95.0,
                    protocols_used: 12,
                },
            ),
            persona(
                2,
                "Bob (New User)",
                "0x3f1d...4e8a",
                "Just started 2 weeks ago, exploring the ecosystem",
                WalletMetrics {
                    account_age: 14,
                    active_months: 1,
                    tx_count: 25,
                    volume: 50_000.0,
                    unique_counterparties: 8,
                    contract_interactions: 3,
                    failed_tx: 2,
                    avg_counterparty_score: 50.0,
                    protocols_used: 2,
                },
            ),
            persona(
                3,
                "Carol (Steady Holder)",
                "0x9c2b...7d3f",
                "1 year active, prefers holding over trading",
                WalletMetrics {
                    account_age: 365,
                    active_months: 12,
                    tx_count: 180,
                    volume: 800_000.0,
                    unique_counterparties: 35,
                    contract_interactions: 15,
                    failed_tx: 5,
                    avg_counterparty_score: 70.0,
                    protocols_used: 5,
                },
            ),
            persona(
                4,
                "Dave (Suspicious)",
                "0x5e9a...1c4d",
                "High volume but repetitive patterns, many failed txs",
                WalletMetrics {
                    account_age: 45,
                    active_months: 2,
                    tx_count: 500,
                    volume: 2_000_000.0,
                    unique_counterparties: 5,
                    contract_interactions: 2,
                    failed_tx: 100,
                    avg_counterparty_score: 30.0,
                    protocols_used: 1,
                },
            ),
            persona(
                5,
                "Eve (Protocol Builder)",
                "0x2d7f...8b9e",
                "Developer with deep ecosystem engagement",
                WalletMetrics {
                    account_age: 540,
                    active_months: 18,
                    tx_count: 1200,
                    volume: 1_500_000.0,
                    unique_counterparties: 200,
                    contract_interactions: 80,
                    failed_tx: 30,
                    avg_counterparty_score: 85.0,
                    protocols_used: 20,
                },
            ),
        ];

        Self { wallets }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Loads wallets from a CSV export, validating each row's metrics.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut wallets = Vec::new();
        let mut seen = HashSet::new();

        for record in csv_reader.deserialize::<WalletRow>() {
            let row = record?;
            if !seen.insert(row.id) {
                return Err(CatalogError::DuplicateWallet(row.id));
            }

            let profile = row.into_profile();
            profile
                .metrics
                .validate()
                .map_err(|source| CatalogError::InvalidMetrics {
                    wallet: profile.id,
                    source,
                })?;
            wallets.push(profile);
        }

        if wallets.is_empty() {
            return Err(CatalogError::Empty);
        }

        tracing::debug!(wallets = wallets.len(), "wallet catalog imported");
        Ok(Self { wallets })
    }

    pub fn iter(&self) -> impl Iterator<Item = &WalletProfile> {
        self.wallets.iter()
    }

    pub fn len(&self) -> usize {
        self.wallets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wallets.is_empty()
    }

    /// Default selection when the caller has not picked a wallet.
    pub fn first(&self) -> Option<&WalletProfile> {
        self.wallets.first()
    }

    /// Looks a wallet up by numeric id or by case-insensitive first name.
    pub fn find(&self, key: &str) -> Option<&WalletProfile> {
        let key = key.trim();
        if let Ok(id) = key.parse::<u32>() {
            return self.wallets.iter().find(|wallet| wallet.id == id);
        }

        self.wallets
            .iter()
            .find(|wallet| wallet.short_name().eq_ignore_ascii_case(key))
    }
}

fn persona(
    id: u32,
    name: &str,
    address: &str,
    story: &str,
    metrics: WalletMetrics,
) -> WalletProfile {
    WalletProfile {
        id,
        name: name.to_string(),
        address: address.to_string(),
        story: story.to_string(),
        metrics,
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WalletRow {
    id: u32,
    name: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    story: String,
    account_age: u32,
    active_months: u32,
    tx_count: u32,
    volume: f64,
    unique_counterparties: u32,
    contract_interactions: u32,
    failed_tx: u32,
    avg_counterparty_score: f64,
    protocols_used: u32,
}

impl WalletRow {
    fn into_profile(self) -> WalletProfile {
        WalletProfile {
            id: self.id,
            name: self.name,
            address: self.address,
            story: self.story,
            metrics: WalletMetrics {
                account_age: self.account_age,
                active_months: self.active_months,
                tx_count: self.tx_count,
                volume: self.volume,
                unique_counterparties: self.unique_counterparties,
                contract_interactions: self.contract_interactions,
                failed_tx: self.failed_tx,
                avg_counterparty_score: self.avg_counterparty_score,
                protocols_used: self.protocols_used,
            },
        }
    }
}
