//! WebAssembly bindings for the Tessera heatmap engine.
//!
//! This crate is the boundary the dashboard shell talks to: JSON
//! holdings in, render tree out. All layout semantics live in
//! `tessera-heatmap`; all input scrubbing lives in `tessera-feed`.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use tessera_feed::parse_records;
use tessera_heatmap::{
    render_view, visible_summary, LayoutConfig, MetricId, ViewState,
};

// ============================================================================
// Initialization
// ============================================================================

/// Initialize the WASM module (sets up panic hook for better error messages).
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

// ============================================================================
// Input/Output Types
// ============================================================================

/// One entry of the metric dropdown.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricInfo {
    /// Wire key, e.g. `"dailyChange"`.
    pub key: String,
    /// Display name, e.g. `"Daily Change"`.
    pub name: String,
    /// Short code, e.g. `"1D"`.
    pub code: String,
    /// True for momentum-style metrics.
    pub momentum: bool,
}

// ============================================================================
// Helper Functions
// ============================================================================

fn parse_metric(key: &str) -> Result<MetricId, JsValue> {
    MetricId::parse_key(key).ok_or_else(|| {
        let valid: Vec<&str> = MetricId::ALL.iter().map(|m| m.as_key()).collect();
        JsValue::from_str(&format!(
            "Unknown metric '{}'. Expected one of: {}",
            key,
            valid.join(", ")
        ))
    })
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

// ============================================================================
// Exported API
// ============================================================================

/// Builds the full heatmap view for a holdings payload.
///
/// `holdings_json` is the service's JSON array of holdings; `metric` is
/// a wire key such as `"dailyChange"`; `zoomed_sector` is the drilled
/// sector or `null` for the overview. Returns the render tree plus the
/// visible-scope summary.
#[wasm_bindgen]
pub fn build_heatmap(
    holdings_json: &str,
    metric: &str,
    zoomed_sector: Option<String>,
) -> Result<JsValue, JsValue> {
    let metric = parse_metric(metric)?;
    let records = parse_records(holdings_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let holdings = tessera_feed::normalize(&records);

    let mut view = ViewState::new();
    view.select_metric(metric);
    if let Some(sector) = zoomed_sector {
        view.click_sector(&sector);
    }

    let config = LayoutConfig::default();
    let rendered = render_view(&holdings, &view, &config);
    to_js(&rendered)
}

/// Computes only the visible-scope summary (the strip above the map).
#[wasm_bindgen]
pub fn heatmap_summary(
    holdings_json: &str,
    metric: &str,
    zoomed_sector: Option<String>,
) -> Result<JsValue, JsValue> {
    let metric = parse_metric(metric)?;
    let records = parse_records(holdings_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let holdings = tessera_feed::normalize(&records);

    let config = LayoutConfig::default();
    let summary = visible_summary(&holdings, metric, zoomed_sector.as_deref(), &config);
    to_js(&summary)
}

/// Lists the selectable metrics for the dashboard's dropdown.
#[wasm_bindgen]
pub fn list_metrics() -> Result<JsValue, JsValue> {
    let metrics: Vec<MetricInfo> = MetricId::ALL
        .iter()
        .map(|m| MetricInfo {
            key: m.as_key().to_string(),
            name: m.name().to_string(),
            code: m.code().to_string(),
            momentum: m.is_momentum(),
        })
        .collect();
    to_js(&metrics)
}

// ============================================================================
// Tests
// ============================================================================
