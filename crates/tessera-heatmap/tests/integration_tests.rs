//! Integration tests for tessera-heatmap.
//!
//! These tests exercise the full pipeline end-to-end with realistic
//! portfolios: aggregation, sizing, coloring, tree assembly, zoom, and
//! the visible-scope summary.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tessera_heatmap::prelude::*;
use tessera_heatmap::tile_size;

// =============================================================================
// TEST FIXTURES
// =============================================================================

fn holding(
    ticker: &str,
    mv: Decimal,
    sector: Option<&str>,
    daily: Option<f64>,
) -> Holding {
    let mut builder = Holding::builder().ticker(ticker).market_value(mv);
    if let Some(s) = sector {
        builder = builder.sector(s);
    }
    if let Some(pct) = daily {
        builder = builder.metrics(MetricValues::new().with_daily_change(pct));
    }
    builder.build().unwrap()
}

/// A realistic equity book with ~10 names across four sectors.
fn create_equity_portfolio() -> Vec<Holding> {
    vec![
        holding("AAPL", dec!(310_000), Some("Tech"), Some(1.8)),
        holding("MSFT", dec!(280_000), Some("Tech"), Some(0.6)),
        holding("NVDA", dec!(190_000), Some("Tech"), Some(4.2)),
        holding("JPM", dec!(150_000), Some("Financials"), Some(-0.4)),
        holding("GS", dec!(90_000), Some("Financials"), Some(-1.1)),
        holding("XOM", dec!(120_000), Some("Energy"), Some(2.3)),
        holding("CVX", dec!(80_000), Some("Energy"), Some(1.9)),
        holding("JNJ", dec!(110_000), Some("Healthcare"), Some(-0.2)),
        holding("PFE", dec!(60_000), Some("Healthcare"), None),
        holding("GLD", dec!(45_000), None, Some(0.1)),
    ]
}

// =============================================================================
// SIZING SCENARIOS
// =============================================================================

#[test]
fn downside_tile_strictly_smaller_than_equal_upside() {
    let config = LayoutConfig::default();
    assert!(config.direction_bias < 0.0);

    let holdings = vec![
        holding("AAA", dec!(100), Some("Tech"), Some(3.0)),
        holding("BBB", dec!(100), Some("Tech"), Some(-3.0)),
    ];

    let tree = build_treemap(&holdings, MetricId::DailyChange, None, &config);
    let tech = tree.sector("Tech").unwrap();

    let size_of = |ticker: &str| {
        tech.tiles
            .iter()
            .find(|t| t.ticker == ticker)
            .unwrap()
            .visual_size
    };

    // Equal capital, equal move magnitude: the loser renders smaller.
    assert!(size_of("BBB") < size_of("AAA"));
}

#[test]
fn unknown_metric_keeps_capital_visible_at_unit_multiplier() {
    let config = LayoutConfig::default();
    let holdings = vec![
        holding("KNOWN", dec!(10_000), Some("Tech"), Some(5.0)),
        holding("UNKNOWN", dec!(10_000), Some("Tech"), None),
    ];

    let tree = build_treemap(&holdings, MetricId::DailyChange, None, &config);
    let tech = tree.sector("Tech").unwrap();
    assert_eq!(tech.tiles.len(), 2);

    let unknown = tech.tiles.iter().find(|t| t.ticker == "UNKNOWN").unwrap();
    // sqrt(10_000) with no move bias
    assert!((unknown.visual_size - 100.0).abs() < 1e-9);
    assert_eq!(unknown.metric_value, None);
    assert_eq!(unknown.label, "n/a");
}

#[test]
fn mega_cap_does_not_erase_small_holdings() {
    let config = LayoutConfig::default();
    let holdings = vec![
        holding("MEGA", dec!(1_000_000_000), Some("Tech"), None),
        holding("SMALL", dec!(10_000), Some("Tech"), None),
    ];

    let tree = build_treemap(&holdings, MetricId::DailyChange, None, &config);
    let tech = tree.sector("Tech").unwrap();
    let mega = tech.tiles.iter().find(|t| t.ticker == "MEGA").unwrap();
    let small = tech.tiles.iter().find(|t| t.ticker == "SMALL").unwrap();

    // 100,000x the capital buys ~316x the area, not 100,000x.
    let ratio = mega.visual_size / small.visual_size;
    assert!(ratio < 1_000.0, "area ratio {ratio} should be compressed");
}

// =============================================================================
// GROUPING SCENARIOS
// =============================================================================

#[test]
fn blank_sector_grouped_under_other() {
    let holdings = vec![
        holding("LABELED", dec!(100), Some("Tech"), None),
        holding("BLANK", dec!(100), Some(""), None),
        holding("MISSING", dec!(100), None, None),
    ];

    let tree = build_treemap(
        &holdings,
        MetricId::DailyChange,
        None,
        &LayoutConfig::default(),
    );

    let other = tree.sector(OTHER_SECTOR).unwrap();
    assert_eq!(other.tiles.len(), 2);
    assert!(tree.sector("Tech").is_some());
    assert_eq!(tree.sectors.len(), 2);
}

#[test]
fn weighted_average_boundaries() {
    let config = LayoutConfig::default();

    // A sector whose single holding has an unknown value
    let unknown_only = vec![holding("AAA", dec!(100), Some("Tech"), None)];
    let groups = aggregate_by_sector(&unknown_only, MetricId::DailyChange, &config);
    assert_eq!(groups[0].weighted_metric, None);

    // Two equal holdings at +2 and -2 average to zero
    let balanced = vec![
        holding("AAA", dec!(100), Some("Tech"), Some(2.0)),
        holding("BBB", dec!(100), Some("Tech"), Some(-2.0)),
    ];
    let groups = aggregate_by_sector(&balanced, MetricId::DailyChange, &config);
    assert!((groups[0].weighted_metric.unwrap()).abs() < 1e-12);
}

// =============================================================================
// TREE SHAPE AND ORDERING
// =============================================================================

#[test]
fn overview_sectors_descend_by_visual_size() {
    let tree = build_treemap(
        &create_equity_portfolio(),
        MetricId::DailyChange,
        None,
        &LayoutConfig::default(),
    );

    let sizes: Vec<f64> = tree
        .sectors
        .iter()
        .map(TreemapSector::total_visual_size)
        .collect();

    for pair in sizes.windows(2) {
        assert!(pair[0] >= pair[1], "sectors must be largest-first: {sizes:?}");
    }
    assert_eq!(tree.sectors[0].header.sector, "Tech");
}

#[test]
fn header_is_first_among_siblings() {
    let tree = build_treemap(
        &create_equity_portfolio(),
        MetricId::DailyChange,
        None,
        &LayoutConfig::default(),
    );

    for sector in &tree.sectors {
        let nodes = sector.nodes();
        assert!(nodes[0].is_header());
        assert!(nodes[1..].iter().all(|n| !n.is_header()));
    }
}

#[test]
fn conservation_of_visual_size() {
    let config = LayoutConfig::default();
    let holdings = create_equity_portfolio();
    let tree = build_treemap(&holdings, MetricId::DailyChange, None, &config);

    // Per sector: tiles + header == total
    for sector in &tree.sectors {
        let tile_sum: f64 = sector.tiles.iter().map(|t| t.visual_size).sum();
        let total = sector.total_visual_size();
        assert!((total - (tile_sum + sector.header.visual_size)).abs() < 1e-9);
    }

    // Whole overview: every eligible holding's tile plus every header
    let descriptor = MetricDescriptor::for_metric(MetricId::DailyChange);
    let expected_tiles: f64 = holdings
        .iter()
        .map(|h| {
            tile_size(
                h.market_value,
                h.metric_value(MetricId::DailyChange),
                &descriptor,
                &config,
            )
        })
        .sum();
    let headers: f64 = tree.sectors.iter().map(|s| s.header.visual_size).sum();
    assert!((tree.total_visual_size() - (expected_tiles + headers)).abs() < 1e-6);
}

// =============================================================================
// ZOOM
// =============================================================================

#[test]
fn zoom_round_trip_reproduces_overview_exactly() {
    let holdings = create_equity_portfolio();
    let config = LayoutConfig::default();
    let mut view = ViewState::new();

    let before = render_view(&holdings, &view, &config);

    view.click_sector("Tech");
    let drilled = render_view(&holdings, &view, &config);
    assert_eq!(drilled.treemap.sectors.len(), 1);

    view.click_sector("Tech");
    let after = render_view(&holdings, &view, &config);

    // Byte-identical, not merely structurally equal
    assert_eq!(
        serde_json::to_string(&before).unwrap(),
        serde_json::to_string(&after).unwrap()
    );
}

#[test]
fn drill_into_vanished_sector_falls_back_to_overview() {
    let holdings = create_equity_portfolio();
    let config = LayoutConfig::default();
    let mut view = ViewState::new();
    view.click_sector("Tech");

    // The Tech names are sold between recomputes
    let remaining: Vec<Holding> = holdings
        .iter()
        .filter(|h| h.sector.as_deref() != Some("Tech"))
        .cloned()
        .collect();

    let rendered = render_view(&remaining, &view, &config);
    assert!(rendered.treemap.sectors.len() > 1);
    assert_eq!(rendered.summary.scope, None);
}

// =============================================================================
// METRIC SWITCHING
// =============================================================================

#[test]
fn metric_switch_rekeys_labels_and_values() {
    let holdings = vec![Holding::builder()
        .ticker("AAPL")
        .market_value(dec!(100_000))
        .sector("Tech")
        .metrics(
            MetricValues::new()
                .with_daily_change(2.0)
                .with_momentum_weekly(-1.2),
        )
        .build()
        .unwrap()];

    let config = LayoutConfig::default();
    let mut view = ViewState::new();

    let daily = render_view(&holdings, &view, &config);
    let tile = &daily.treemap.sectors[0].tiles[0];
    assert_eq!(tile.label, "+2.00%");

    view.select_metric(MetricId::PortfolioMomentum5d);
    let momentum = render_view(&holdings, &view, &config);
    let tile = &momentum.treemap.sectors[0].tiles[0];
    assert_eq!(tile.label, "-1.2");
    assert_eq!(tile.metric_value, Some(-1.2));

    // Different stop sets produce different colors for the same book
    assert_ne!(
        daily.treemap.sectors[0].header.color,
        momentum.treemap.sectors[0].header.color
    );
}

// =============================================================================
// DEGRADED INPUT
// =============================================================================

#[test]
fn empty_holdings_is_a_renderable_state() {
    let view = ViewState::new();
    let rendered = render_view(&[], &view, &LayoutConfig::default());

    assert!(rendered.treemap.is_empty());
    assert_eq!(rendered.summary.holding_count, 0);
    assert_eq!(rendered.summary.weighted_change, None);
}

#[test]
fn summary_matches_aggregation() {
    let holdings = create_equity_portfolio();
    let config = LayoutConfig::default();

    let groups = aggregate_by_sector(&holdings, MetricId::DailyChange, &config);
    let summary = visible_summary(&holdings, MetricId::DailyChange, None, &config);

    let group_total: Decimal = groups.iter().map(|g| g.total_market_value).sum();
    assert_eq!(summary.total_market_value, group_total);
    assert_eq!(
        summary.holding_count,
        groups.iter().map(SectorGroup::member_count).sum::<usize>()
    );
}
