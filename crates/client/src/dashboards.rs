//! Built-in dashboard definitions.
//!
//! The publisher ships exactly one dashboard: the Istio gateway metrics
//! view, a single time-series panel charting request rate from the
//! Prometheus metrics emitted by the OpenTelemetry Collector.

use crate::models::{
    Agg, AggParams, AxisLabels, AxisStyle, CategoryAxis, ControlGroupInput, DashboardAttributes,
    DashboardDocument, DashboardOptions, DateHistogramParams, EmbeddableConfig, ExtendedBounds,
    GridData, GridLineStyle, GridStyle, Panel, RefreshInterval, SavedVis, Scale, Series,
    SeriesMetric, ValueAxis, VisParams,
};

/// Saved-object identifier the dashboard is published under. Constant
/// across runs, so repeated publishes target the same object.
pub const DASHBOARD_ID: &str = "istio-gateway-metrics-dashboard";

/// Schema version stamped on the panel and the migration tags.
const OBJECT_VERSION: &str = "8.0.0";

/// Build the Istio gateway metrics dashboard document.
///
/// The document is assembled fresh on every call with a current
/// `updated_at` timestamp; nothing is cached or persisted locally.
pub fn istio_gateway_metrics() -> DashboardDocument {
    let attributes = DashboardAttributes {
        title: "Istio Gateway Metrics Dashboard".to_string(),
        description:
            "Comprehensive dashboard for Istio Gateway Prometheus metrics from OpenTelemetry Collector"
                .to_string(),
        version: "1.0.0".to_string(),
        panels: vec![request_rate_panel()],
        options: DashboardOptions {
            dark_theme: false,
            use_margins: true,
            sync_colors: false,
            hide_panel_titles: false,
        },
        time_restore: true,
        time_to: "now".to_string(),
        time_from: "now-1h".to_string(),
        refresh_interval: RefreshInterval {
            pause: false,
            value: 30000,
        },
        control_group_input: ControlGroupInput {
            control_style: "oneLine".to_string(),
            chaining_system: "HIERARCHICAL".to_string(),
            panels: vec![],
        },
    };

    DashboardDocument::new(attributes, OBJECT_VERSION)
}

/// The single request-rate time-series panel, 24 columns wide and 15 rows
/// tall at the grid origin.
fn request_rate_panel() -> Panel {
    Panel {
        version: OBJECT_VERSION.to_string(),
        grid_data: GridData {
            x: 0,
            y: 0,
            w: 24,
            h: 15,
            i: "1".to_string(),
        },
        panel_index: "1".to_string(),
        embeddable_config: EmbeddableConfig {
            title: "Request Rate".to_string(),
            saved_vis: SavedVis {
                title: "Request Rate".to_string(),
                vis_type: "timeseries".to_string(),
                params: request_rate_params(),
                aggs: request_rate_aggs(),
            },
        },
        title: "Request Rate".to_string(),
        id: "1".to_string(),
    }
}

fn request_rate_params() -> VisParams {
    VisParams {
        axis_formatter: "number".to_string(),
        axis_position: "left".to_string(),
        id: "1".to_string(),
        series: vec![Series {
            id: "1".to_string(),
            split_mode: "everything".to_string(),
            metrics: vec![SeriesMetric {
                id: "1".to_string(),
                metric_type: "count".to_string(),
            }],
            label: "Requests/sec".to_string(),
            value_template: "{{value}}".to_string(),
            formatter: "number".to_string(),
            chart_type: "line".to_string(),
            line_width: 2,
            point_size: 1,
            fill: 0.5,
            stacked: "none".to_string(),
        }],
        grid: GridStyle {
            category_lines: false,
            style: GridLineStyle {
                color: "#eee".to_string(),
            },
        },
        category_axes: vec![CategoryAxis {
            id: "CategoryAxis-1".to_string(),
            axis_type: "category".to_string(),
            position: "bottom".to_string(),
            show: true,
            style: AxisStyle {},
            scale: Scale {
                scale_type: "linear".to_string(),
                mode: None,
            },
            labels: AxisLabels {
                show: true,
                rotate: None,
                filter: None,
                truncate: 100,
            },
        }],
        value_axes: vec![ValueAxis {
            id: "ValueAxis-1".to_string(),
            name: "LeftAxis-1".to_string(),
            axis_type: "value".to_string(),
            position: "left".to_string(),
            show: true,
            style: AxisStyle {},
            scale: Scale {
                scale_type: "linear".to_string(),
                mode: Some("normal".to_string()),
            },
            labels: AxisLabels {
                show: true,
                rotate: Some(0),
                filter: Some(false),
                truncate: 100,
            },
        }],
        add_tooltip: true,
        add_legend: true,
        legend_position: "right".to_string(),
        times: vec![],
        add_time_marker: false,
    }
}

/// Count metric bucketed by a date histogram on `@timestamp` with
/// automatic interval sizing.
fn request_rate_aggs() -> Vec<Agg> {
    vec![
        Agg {
            id: "1".to_string(),
            enabled: true,
            agg_type: "count".to_string(),
            schema: "metric".to_string(),
            params: AggParams::Empty {},
        },
        Agg {
            id: "2".to_string(),
            enabled: true,
            agg_type: "date_histogram".to_string(),
            schema: "segment".to_string(),
            params: AggParams::DateHistogram(DateHistogramParams {
                field: "@timestamp".to_string(),
                interval: "auto".to_string(),
                custom_interval: "2h".to_string(),
                min_doc_count: 1,
                extended_bounds: ExtendedBounds {},
            }),
        },
    ]
}
