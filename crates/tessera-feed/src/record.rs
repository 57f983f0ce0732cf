//! Raw holding records as delivered by the remote service.

use crate::error::FeedResult;
use serde::{Deserialize, Serialize};

/// One holding record from the remote holdings feed.
///
/// Field names follow the service's JSON contract. Everything except
/// ticker and market value is optional; absence means unknown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawHolding {
    /// Ticker symbol.
    pub ticker: String,

    /// Market value in the reporting currency (already converted
    /// upstream).
    pub market_value: f64,

    /// Sector label, possibly blank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,

    /// Intraday change, percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_change_percent: Option<f64>,

    /// Five-session price change, percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub five_day_change_percent: Option<f64>,

    /// Twenty-one-session price change, percent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twenty_one_day_change_percent: Option<f64>,

    /// Weekly relative-momentum score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub momentum_weekly: Option<f64>,

    /// Monthly relative-momentum score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub momentum_monthly: Option<f64>,

    /// Asset category as reported by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// True for static (non-traded) assets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_asset: Option<bool>,
}

/// Parses a holdings payload (a JSON array of records).
///
/// # Errors
///
/// Returns an error if the payload is not valid JSON for the contract.
pub fn parse_records(json: &str) -> FeedResult<Vec<RawHolding>> {
    Ok(serde_json::from_str(json)?)
}
