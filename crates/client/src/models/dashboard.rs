//! Dashboard saved-object document model.
//!
//! Responsibilities:
//! - Define the typed shape of a dashboard saved object as submitted to
//!   `POST /api/saved_objects/dashboard/{id}`.
//! - Preserve the platform's wire contract, including the JSON-string
//!   encoding of `panelsJSON`, `optionsJSON`, and
//!   `controlGroupInput.panelsJSON`.
//!
//! Does NOT handle:
//! - HTTP submission (see `crate::endpoints`).
//! - Concrete dashboard content (see `crate::dashboards`).
//!
//! Invariants:
//! - Nested JSON-string fields round-trip losslessly through serde.
//! - `updated_at` is a fresh UTC timestamp in ISO-8601 with a trailing `Z`,
//!   generated when the document is constructed; it is never reused across
//!   invocations.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::serde_helpers::json_string;

/// A complete dashboard saved-object document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardDocument {
    pub attributes: DashboardAttributes,
    pub references: Vec<Reference>,
    #[serde(rename = "migrationVersion")]
    pub migration_version: MigrationVersion,
    #[serde(rename = "coreMigrationVersion")]
    pub core_migration_version: String,
    #[serde(rename = "type")]
    pub object_type: String,
    pub updated_at: String,
}

impl DashboardDocument {
    /// Wrap attributes in the saved-object envelope for the given
    /// migration version, stamping a fresh UTC timestamp.
    pub fn new(attributes: DashboardAttributes, migration_version: &str) -> Self {
        Self {
            attributes,
            references: Vec::new(),
            migration_version: MigrationVersion {
                dashboard: migration_version.to_string(),
            },
            core_migration_version: migration_version.to_string(),
            object_type: "dashboard".to_string(),
            updated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
        }
    }
}

/// A reference from a saved object to another saved object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reference {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub object_type: String,
}

/// Migration version tags keyed by object type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MigrationVersion {
    pub dashboard: String,
}

/// The `attributes` block of a dashboard saved object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardAttributes {
    pub title: String,
    pub description: String,
    pub version: String,
    /// Panel layout, JSON-encoded as a string on the wire.
    #[serde(rename = "panelsJSON", with = "json_string")]
    pub panels: Vec<Panel>,
    /// Display options, JSON-encoded as a string on the wire.
    #[serde(rename = "optionsJSON", with = "json_string")]
    pub options: DashboardOptions,
    #[serde(rename = "timeRestore")]
    pub time_restore: bool,
    #[serde(rename = "timeTo")]
    pub time_to: String,
    #[serde(rename = "timeFrom")]
    pub time_from: String,
    #[serde(rename = "refreshInterval")]
    pub refresh_interval: RefreshInterval,
    #[serde(rename = "controlGroupInput")]
    pub control_group_input: ControlGroupInput,
}

/// Dashboard display options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardOptions {
    #[serde(rename = "darkTheme")]
    pub dark_theme: bool,
    #[serde(rename = "useMargins")]
    pub use_margins: bool,
    #[serde(rename = "syncColors")]
    pub sync_colors: bool,
    #[serde(rename = "hidePanelTitles")]
    pub hide_panel_titles: bool,
}

/// Auto-refresh configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshInterval {
    pub pause: bool,
    /// Interval in milliseconds.
    pub value: u64,
}

/// Control group configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlGroupInput {
    #[serde(rename = "controlStyle")]
    pub control_style: String,
    #[serde(rename = "chainingSystem")]
    pub chaining_system: String,
    /// Control panels, JSON-encoded as a string on the wire (empty list here).
    #[serde(rename = "panelsJSON", with = "json_string")]
    pub panels: Vec<serde_json::Value>,
}

/// One visualization tile placed on the dashboard grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Panel {
    pub version: String,
    #[serde(rename = "gridData")]
    pub grid_data: GridData,
    #[serde(rename = "panelIndex")]
    pub panel_index: String,
    #[serde(rename = "embeddableConfig")]
    pub embeddable_config: EmbeddableConfig,
    pub title: String,
    pub id: String,
}

/// Grid placement of a panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridData {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    pub i: String,
}

/// Embedded visualization configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbeddableConfig {
    pub title: String,
    #[serde(rename = "savedVis")]
    pub saved_vis: SavedVis,
}

/// An inline visualization definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedVis {
    pub title: String,
    #[serde(rename = "type")]
    pub vis_type: String,
    pub params: VisParams,
    pub aggs: Vec<Agg>,
}

/// Visualization parameters for a time-series panel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisParams {
    pub axis_formatter: String,
    pub axis_position: String,
    pub id: String,
    pub series: Vec<Series>,
    pub grid: GridStyle,
    #[serde(rename = "categoryAxes")]
    pub category_axes: Vec<CategoryAxis>,
    #[serde(rename = "valueAxes")]
    pub value_axes: Vec<ValueAxis>,
    #[serde(rename = "addTooltip")]
    pub add_tooltip: bool,
    #[serde(rename = "addLegend")]
    pub add_legend: bool,
    #[serde(rename = "legendPosition")]
    pub legend_position: String,
    pub times: Vec<serde_json::Value>,
    #[serde(rename = "addTimeMarker")]
    pub add_time_marker: bool,
}

/// One plotted series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Series {
    pub id: String,
    pub split_mode: String,
    pub metrics: Vec<SeriesMetric>,
    pub label: String,
    pub value_template: String,
    pub formatter: String,
    pub chart_type: String,
    pub line_width: u32,
    pub point_size: u32,
    pub fill: f64,
    pub stacked: String,
}

/// Metric backing a series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesMetric {
    pub id: String,
    #[serde(rename = "type")]
    pub metric_type: String,
}

/// Chart grid styling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridStyle {
    #[serde(rename = "categoryLines")]
    pub category_lines: bool,
    pub style: GridLineStyle,
}

/// Grid line color.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridLineStyle {
    pub color: String,
}

/// Category (bottom) axis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryAxis {
    pub id: String,
    #[serde(rename = "type")]
    pub axis_type: String,
    pub position: String,
    pub show: bool,
    pub style: AxisStyle,
    pub scale: Scale,
    pub labels: AxisLabels,
}

/// Value (left) axis configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueAxis {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub axis_type: String,
    pub position: String,
    pub show: bool,
    pub style: AxisStyle,
    pub scale: Scale,
    pub labels: AxisLabels,
}

/// Axis styling; the platform accepts an empty object here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AxisStyle {}

/// Axis scale. `mode` is only present on value axes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scale {
    #[serde(rename = "type")]
    pub scale_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
}

/// Axis label display rules. `rotate` and `filter` are only present on
/// value axes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxisLabels {
    pub show: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<bool>,
    pub truncate: u32,
}

/// An aggregation definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agg {
    pub id: String,
    pub enabled: bool,
    #[serde(rename = "type")]
    pub agg_type: String,
    pub schema: String,
    pub params: AggParams,
}

/// Aggregation parameters. The count metric carries an empty object;
/// the date histogram carries bucketing fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AggParams {
    DateHistogram(DateHistogramParams),
    Empty {},
}

/// Date histogram bucketing on a timestamp field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateHistogramParams {
    pub field: String,
    pub interval: String,
    #[serde(rename = "customInterval")]
    pub custom_interval: String,
    pub min_doc_count: u32,
    pub extended_bounds: ExtendedBounds,
}

/// Extended bounds for the histogram; the platform accepts an empty object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtendedBounds {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn minimal_panel() -> Panel {
        Panel {
            version: "8.0.0".to_string(),
            grid_data: GridData {
                x: 0,
                y: 0,
                w: 24,
                h: 15,
                i: "1".to_string(),
            },
            panel_index: "1".to_string(),
            embeddable_config: EmbeddableConfig {
                title: "Test".to_string(),
                saved_vis: SavedVis {
                    title: "Test".to_string(),
                    vis_type: "timeseries".to_string(),
                    params: VisParams {
                        axis_formatter: "number".to_string(),
                        axis_position: "left".to_string(),
                        id: "1".to_string(),
                        series: vec![],
                        grid: GridStyle {
                            category_lines: false,
                            style: GridLineStyle {
                                color: "#eee".to_string(),
                            },
                        },
                        category_axes: vec![],
                        value_axes: vec![],
                        add_tooltip: true,
                        add_legend: true,
                        legend_position: "right".to_string(),
                        times: vec![],
                        add_time_marker: false,
                    },
                    aggs: vec![],
                },
            },
            title: "Test".to_string(),
            id: "1".to_string(),
        }
    }

    fn minimal_attributes() -> DashboardAttributes {
        DashboardAttributes {
            title: "Test".to_string(),
            description: "Test dashboard".to_string(),
            version: "1.0.0".to_string(),
            panels: vec![minimal_panel()],
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
        }
    }

    #[test]
    fn test_panels_serialize_as_json_string() {
        let json = serde_json::to_value(minimal_attributes()).unwrap();

        let panels_field = json["panelsJSON"]
            .as_str()
            .expect("panelsJSON must be a string");
        let panels: Vec<Panel> = serde_json::from_str(panels_field).unwrap();
        assert_eq!(panels.len(), 1);

        let options_field = json["optionsJSON"]
            .as_str()
            .expect("optionsJSON must be a string");
        let _: DashboardOptions = serde_json::from_str(options_field).unwrap();

        assert_eq!(json["controlGroupInput"]["panelsJSON"], "[]");
    }

    #[test]
    fn test_document_round_trips() {
        let doc = DashboardDocument::new(minimal_attributes(), "8.0.0");
        let json = serde_json::to_string(&doc).unwrap();
        let back: DashboardDocument = serde_json::from_str(&json).unwrap();

        assert_eq!(back.attributes.panels.len(), 1);
        assert_eq!(back.attributes.panels[0].grid_data.w, 24);
        assert_eq!(back.attributes.panels[0].grid_data.h, 15);
        assert_eq!(back.attributes.refresh_interval.value, 30000);
        assert_eq!(back.attributes.time_from, "now-1h");
        assert_eq!(back.object_type, "dashboard");
        assert_eq!(back.migration_version.dashboard, "8.0.0");
    }

    #[test]
    fn test_updated_at_is_rfc3339_utc_with_z_suffix() {
        let doc = DashboardDocument::new(minimal_attributes(), "8.0.0");
        assert!(doc.updated_at.ends_with('Z'), "got {}", doc.updated_at);
        assert!(DateTime::parse_from_rfc3339(&doc.updated_at).is_ok());
    }

    #[test]
    fn test_scale_mode_omitted_when_absent() {
        let scale = Scale {
            scale_type: "linear".to_string(),
            mode: None,
        };
        let json = serde_json::to_value(&scale).unwrap();
        assert_eq!(json, serde_json::json!({"type": "linear"}));
    }

    #[test]
    fn test_agg_params_untagged_round_trip() {
        let count = Agg {
            id: "1".to_string(),
            enabled: true,
            agg_type: "count".to_string(),
            schema: "metric".to_string(),
            params: AggParams::Empty {},
        };
        let json = serde_json::to_value(&count).unwrap();
        assert_eq!(json["params"], serde_json::json!({}));

        let histogram = Agg {
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
        };
        let json = serde_json::to_string(&histogram).unwrap();
        let back: Agg = serde_json::from_str(&json).unwrap();
        match back.params {
            AggParams::DateHistogram(params) => {
                assert_eq!(params.field, "@timestamp");
                assert_eq!(params.interval, "auto");
            }
            AggParams::Empty {} => panic!("expected date histogram params"),
        }
    }
}
