//! Wallet reputation scoring for the TrustLayer demo.
//!
//! [`reputation::compute_score`] turns a [`reputation::WalletMetrics`] record into a
//! four-part [`reputation::ScoreBreakdown`], and [`reputation::resolve_terms`] maps the
//! resulting total onto lending terms. Everything else in the crate (catalog, config,
//! telemetry) supports the presentation layer that drives those two calls.

pub mod catalog;
pub mod config;
pub mod error;
pub mod reputation;
pub mod telemetry;
