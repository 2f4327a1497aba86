use crate::reputation::WalletMetrics;

pub(super) fn alice() -> WalletMetrics {
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
    }
}

pub(super) fn bob() -> WalletMetrics {
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
    }
}

pub(super) fn dave() -> WalletMetrics {
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
    }
}

pub(super) fn dormant() -> WalletMetrics {
    WalletMetrics {
        account_age: 10,
        contract_interactions: 2,
        avg_counterparty_score: 40.0,
        ..WalletMetrics::default()
    }
}
