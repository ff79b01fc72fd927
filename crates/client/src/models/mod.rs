//! Data models for the Saved Objects API.

mod dashboard;
mod saved_object;

pub use dashboard::{
    Agg, AggParams, AxisLabels, AxisStyle, CategoryAxis, ControlGroupInput, DashboardAttributes,
    DashboardDocument, DashboardOptions, DateHistogramParams, EmbeddableConfig, ExtendedBounds,
    GridData, GridLineStyle, GridStyle, MigrationVersion, Panel, Reference, RefreshInterval,
    SavedVis, Scale, Series, SeriesMetric, ValueAxis, VisParams,
};
pub use saved_object::{ApiErrorBody, SavedObject};
