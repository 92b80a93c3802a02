// Record shapes of the dashboard schema.
//
// Field names, optionality and enum literals are the wire format. Keep them
// in step with the schema: do not rename keys or add schema defaults here.

#![allow(clippy::large_enum_variant)]

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $lit:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $lit)]
                $variant,
            )+
        }
        impl $name {
            /// Every literal accepted on the wire, in schema order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $lit,)+
                }
            }
        }
        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
        impl std::str::FromStr for $name {
            type Err = &'static str;
            fn from_str(value: &str) -> Result<Self, &'static str> {
                match value {
                    $($lit => Ok(Self::$variant),)+
                    _ => Err("invalid value"),
                }
            }
        }
        impl std::convert::TryFrom<&str> for $name {
            type Error = &'static str;
            fn try_from(value: &str) -> Result<Self, &'static str> {
                value.parse()
            }
        }
        impl std::convert::TryFrom<&String> for $name {
            type Error = &'static str;
            fn try_from(value: &String) -> Result<Self, &'static str> {
                value.parse()
            }
        }
        impl std::convert::TryFrom<String> for $name {
            type Error = &'static str;
            fn try_from(value: String) -> Result<Self, &'static str> {
                value.parse()
            }
        }
    };
}

macro_rules! int_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }
        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub fn value(&self) -> i64 {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }
        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.value()
            }
        }
        impl std::convert::TryFrom<i64> for $name {
            type Error = &'static str;
            fn try_from(value: i64) -> Result<Self, &'static str> {
                match value {
                    $($value => Ok(Self::$variant),)+
                    _ => Err("invalid value"),
                }
            }
        }
        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.value())
            }
        }
        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_i64(self.value())
            }
        }
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                Self::try_from(i64::deserialize(deserializer)?)
                    .map_err(|e| <D::Error as serde::de::Error>::custom(e.to_string()))
            }
        }
    };
}

int_enum! {
    /// Tooltip and crosshair sharing between the panels of a dashboard.
    GraphTooltip {
        Default = 0,
        SharedCrosshair = 1,
        SharedTooltip = 2,
    }
}

int_enum! {
    /// 0 for no shared crosshair or tooltip (default).
    /// 1 for shared crosshair.
    /// 2 for shared crosshair AND shared tooltip.
    DashboardCursorSync {
        Off = 0,
        Crosshair = 1,
        Tooltip = 2,
    }
}

string_enum! {
    /// Theme of dashboard.
    Style {
        Dark => "dark",
        Light => "light",
    }
}

string_enum! {
    /// Timezone of dashboard. The empty literal means the viewer's default.
    Timezone {
        Browser => "browser",
        Empty => "",
        Utc => "utc",
    }
}

string_enum! {
    DashboardLinkType {
        Dashboards => "dashboards",
        Link => "link",
    }
}

string_enum! {
    FieldColorModeId {
        ContinuousGrYlRd => "continuous-GrYlRd",
        Fixed => "fixed",
        PaletteClassic => "palette-classic",
        PaletteSaturated => "palette-saturated",
        Thresholds => "thresholds",
    }
}

string_enum! {
    FieldColorSeriesByMode {
        Last => "last",
        Max => "max",
        Min => "min",
    }
}

string_enum! {
    /// Support for legacy graph and heatmap panels.
    GraphPanelType {
        Graph => "graph",
    }
}

string_enum! {
    HeatmapPanelType {
        Heatmap => "heatmap",
    }
}

string_enum! {
    MappingType {
        Range => "range",
        Regex => "regex",
        Special => "special",
        Value => "value",
    }
}

string_enum! {
    /// Direction to repeat in if 'repeat' is set.
    /// "h" for horizontal, "v" for vertical.
    PanelRepeatDirection {
        H => "h",
        V => "v",
    }
}

string_enum! {
    RangeMapType {
        Range => "range",
    }
}

string_enum! {
    RegexMapType {
        Regex => "regex",
    }
}

string_enum! {
    RowPanelType {
        Row => "row",
    }
}

string_enum! {
    SpecialValueMapOptionsMatch {
        False => "false",
        True => "true",
    }
}

string_enum! {
    SpecialValueMapType {
        Special => "special",
    }
}

string_enum! {
    SpecialValueMatch {
        Empty => "empty",
        False => "false",
        Nan => "nan",
        Null => "null",
        NullNan => "null+nan",
        True => "true",
    }
}

string_enum! {
    ThresholdsMode {
        Absolute => "absolute",
        Percentage => "percentage",
    }
}

pub type ThresholdsConfigMode = ThresholdsMode;

string_enum! {
    ValueMapType {
        Value => "value",
    }
}

string_enum! {
    VariableType {
        Adhoc => "adhoc",
        Constant => "constant",
        Custom => "custom",
        Datasource => "datasource",
        Interval => "interval",
        Query => "query",
        System => "system",
        Textbox => "textbox",
    }
}

pub type VariableModelType = VariableType;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Dashboard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<AnnotationContainer>,
    /// Description of dashboard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether a dashboard is editable or not.
    pub editable: bool,
    #[serde(
        rename = "fiscalYearStartMonth",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub fiscal_year_start_month: Option<i64>,
    #[serde(rename = "gnetId", default, skip_serializing_if = "Option::is_none")]
    pub gnet_id: Option<String>,
    #[serde(rename = "graphTooltip")]
    pub graph_tooltip: GraphTooltip,
    /// Unique numeric identifier for the dashboard, local to one instance.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<DashboardLink>>,
    #[serde(rename = "liveNow", default, skip_serializing_if = "Option::is_none")]
    pub live_now: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panels: Option<Vec<PanelKind>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<Refresh>,
    /// Version of the JSON schema, incremented each time an update brings
    /// changes to said schema.
    #[serde(rename = "schemaVersion")]
    pub schema_version: i64,
    pub style: Style,
    /// Tags associated with dashboard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templating: Option<TemplatingContainer>,
    /// Time range for dashboard, e.g. last 6 hours, last 7 days, etc
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<TimeRange>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timepicker: Option<TimePicker>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<Timezone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Unique dashboard identifier that can be generated by anyone. string (8-40)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Version of the dashboard, incremented each time the dashboard is updated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    #[serde(rename = "weekStart", default, skip_serializing_if = "Option::is_none")]
    pub week_start: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AnnotationContainer {
    pub list: Vec<AnnotationQuery>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TemplatingContainer {
    pub list: Vec<VariableModel>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TimeRange {
    pub from: String,
    pub to: String,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct TimePicker {
    /// Whether timepicker is collapsed or not.
    pub collapse: bool,
    /// Whether timepicker is enabled or not.
    pub enable: bool,
    /// Whether timepicker is visible or not.
    pub hidden: bool,
    /// Selectable intervals for auto-refresh.
    pub refresh_intervals: Vec<String>,
    pub time_options: Vec<String>,
}

/// Auto-refresh setting: an interval such as `"5s"`, or `false` when disabled.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Refresh {
    Flag(bool),
    Interval(String),
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AnnotationQuery {
    #[serde(rename = "builtIn")]
    pub built_in: i64,
    /// Datasource to use for annotation.
    pub datasource: DataSourceRef,
    /// Whether annotation is enabled.
    pub enable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide: Option<bool>,
    #[serde(rename = "iconColor", default, skip_serializing_if = "Option::is_none")]
    pub icon_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Query for annotation data.
    #[serde(rename = "rawQuery", default, skip_serializing_if = "Option::is_none")]
    pub raw_query: Option<String>,
    #[serde(rename = "showIn")]
    pub show_in: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<AnnotationTarget>,
    #[serde(rename = "type")]
    pub type_: String,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AnnotationTarget {
    pub limit: i64,
    #[serde(rename = "matchAny")]
    pub match_any: bool,
    pub tags: Vec<String>,
    #[serde(rename = "type")]
    pub type_: String,
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct DataSourceRef {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct DashboardLink {
    #[serde(rename = "asDropdown")]
    pub as_dropdown: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(rename = "includeVars")]
    pub include_vars: bool,
    #[serde(rename = "keepTime")]
    pub keep_time: bool,
    pub tags: Vec<String>,
    #[serde(rename = "targetBlank")]
    pub target_blank: bool,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(rename = "type")]
    pub type_: DashboardLinkType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct DynamicConfigValue {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FieldColor {
    /// Stores the fixed color value if mode is fixed
    #[serde(rename = "fixedColor", default, skip_serializing_if = "Option::is_none")]
    pub fixed_color: Option<String>,
    /// The main color scheme mode
    pub mode: FieldColorMode,
    #[serde(rename = "seriesBy", default, skip_serializing_if = "Option::is_none")]
    pub series_by: Option<FieldColorSeriesByMode>,
}

/// Color scheme mode: one of the known ids, or a plugin-provided scheme name.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldColorMode {
    Known(FieldColorModeId),
    Other(String),
}

impl FieldColorMode {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(id) => id.as_str(),
            Self::Other(name) => name,
        }
    }
}

impl From<FieldColorModeId> for FieldColorMode {
    fn from(value: FieldColorModeId) -> Self {
        Self::Known(value)
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct FieldConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<FieldColor>,
    /// custom is specified by the PanelFieldConfig field
    /// in panel plugin schemas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<Map<String, Value>>,
    /// Significant digits (for display)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<f64>,
    /// Human readable field metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The display value for this field. This supports template variables; blank is auto.
    #[serde(rename = "displayName", default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Used by data sources that return an explicit naming structure for values and labels.
    /// When set, this value is used rather than the default naming strategy.
    #[serde(
        rename = "displayNameFromDS",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub display_name_from_ds: Option<String>,
    /// True if data source field supports ad-hoc filters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filterable: Option<bool>,
    /// The behavior when clicking on a result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Value>>,
    /// Convert input values into a display string
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mappings: Option<Vec<ValueMapping>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Alternative to empty string
    #[serde(rename = "noValue", default, skip_serializing_if = "Option::is_none")]
    pub no_value: Option<String>,
    /// An explicit path to the field in the datasource. When the frame meta
    /// includes a path, this defaults to `${frame.meta.path}/${field.name}`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<ThresholdsConfig>,
    /// Numeric Options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// True if data source can write a value to the path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub writeable: Option<bool>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FieldConfigSource {
    pub defaults: FieldConfig,
    pub overrides: Vec<FieldOverride>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct FieldOverride {
    pub matcher: MatcherConfig,
    pub properties: Vec<DynamicConfigValue>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MatcherConfig {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct GridPos {
    /// Panel height
    pub h: i64,
    /// true if fixed
    #[serde(rename = "static", default, skip_serializing_if = "Option::is_none")]
    pub static_: Option<bool>,
    /// Panel width
    pub w: i64,
    /// Panel x
    pub x: i64,
    /// Panel y
    pub y: i64,
}

/// Dashboard panels. Panels are defined inline because they share a version
/// timeline with the dashboard schema.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Panel {
    /// The datasource used in all targets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datasource: Option<DataSourceRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "fieldConfig")]
    pub field_config: FieldConfigSource,
    #[serde(rename = "gridPos", default, skip_serializing_if = "Option::is_none")]
    pub grid_pos: Option<GridPos>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<String>,
    /// Panel links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<DashboardLink>>,
    #[serde(rename = "maxDataPoints", default, skip_serializing_if = "Option::is_none")]
    pub max_data_points: Option<f64>,
    /// options is specified by the PanelOptions field in panel
    /// plugin schemas.
    pub options: Map<String, Value>,
    #[serde(rename = "pluginVersion", default, skip_serializing_if = "Option::is_none")]
    pub plugin_version: Option<String>,
    /// Name of template variable to repeat for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat: Option<String>,
    #[serde(rename = "repeatDirection")]
    pub repeat_direction: PanelRepeatDirection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<Target>>,
    /// Legacy per-panel alert thresholds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<Vec<Value>>,
    #[serde(rename = "timeFrom", default, skip_serializing_if = "Option::is_none")]
    pub time_from: Option<String>,
    #[serde(rename = "timeRegions", default, skip_serializing_if = "Option::is_none")]
    pub time_regions: Option<Vec<Value>>,
    #[serde(rename = "timeShift", default, skip_serializing_if = "Option::is_none")]
    pub time_shift: Option<String>,
    /// Panel title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub transformations: Vec<Transformation>,
    /// Whether to display the panel without a background.
    pub transparent: bool,
    /// The panel plugin type id. May not be empty.
    #[serde(rename = "type")]
    pub type_: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RowPanel {
    pub collapsed: bool,
    /// Name of default datasource.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datasource: Option<DataSourceRef>,
    #[serde(rename = "gridPos", default, skip_serializing_if = "Option::is_none")]
    pub grid_pos: Option<GridPos>,
    pub id: i64,
    pub panels: Vec<PanelKind>,
    /// Name of template variable to repeat for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub type_: RowPanelType,
}

/// Legacy graph panel. Keys outside the schema are kept in `extra`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct GraphPanel {
    #[serde(rename = "type")]
    pub type_: GraphPanelType,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Legacy heatmap panel. Keys outside the schema are kept in `extra`.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct HeatmapPanel {
    #[serde(rename = "type")]
    pub type_: HeatmapPanelType,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An entry of a dashboard's (or a row's) panel list.
///
/// Decoding reads `type` first. `row` is a [`RowPanel`]; `graph` and `heatmap`
/// decode as a full [`Panel`] when they have its shape and fall back to the
/// legacy record otherwise; every other type must be a full [`Panel`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PanelKind {
    Row(RowPanel),
    Panel(Panel),
    Graph(GraphPanel),
    Heatmap(HeatmapPanel),
}

impl PanelKind {
    /// The plugin type id as written on the wire.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Row(row) => row.type_.as_str(),
            Self::Panel(panel) => &panel.type_,
            Self::Graph(graph) => graph.type_.as_str(),
            Self::Heatmap(heatmap) => heatmap.type_.as_str(),
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Self::Row(row) => row.title.as_deref(),
            Self::Panel(panel) => panel.title.as_deref(),
            Self::Graph(graph) => graph.extra.get("title").and_then(Value::as_str),
            Self::Heatmap(heatmap) => heatmap.extra.get("title").and_then(Value::as_str),
        }
    }
}

impl<'de> Deserialize<'de> for PanelKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        let value = Value::deserialize(deserializer)?;
        let kind = match type_literal(&value).map_err(D::Error::custom)? {
            "row" => RowPanel::deserialize(&value).map(Self::Row),
            "graph" => Panel::deserialize(&value)
                .map(Self::Panel)
                .or_else(|_| GraphPanel::deserialize(&value).map(Self::Graph)),
            "heatmap" => Panel::deserialize(&value)
                .map(Self::Panel)
                .or_else(|_| HeatmapPanel::deserialize(&value).map(Self::Heatmap)),
            _ => Panel::deserialize(&value).map(Self::Panel),
        };
        kind.map_err(D::Error::custom)
    }
}

fn type_literal(value: &Value) -> Result<&str, &'static str> {
    let object = value.as_object().ok_or("expected an object")?;
    match object.get("type") {
        Some(Value::String(literal)) => Ok(literal.as_str()),
        Some(_) => Err("invalid type for field `type`, expected a string"),
        None => Err("missing field `type`"),
    }
}

/// Schema for panel targets is specified by datasource plugins, so it stays open here.
pub type Target = Map<String, Value>;

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Threshold {
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Outer `None`: key absent. `Some(None)`: written as `null`, which stands
    /// for -Infinity on the base step.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_or_null"
    )]
    pub value: Option<Option<f64>>,
}

impl Threshold {
    /// Lower bound of the step; -Infinity when unset or `null`.
    pub fn lower_bound(&self) -> f64 {
        self.value.flatten().unwrap_or(f64::NEG_INFINITY)
    }
}

// Only called when the key is present, so `null` stays distinguishable from absent
fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<f64>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<f64>::deserialize(deserializer).map(Some)
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ThresholdsConfig {
    pub mode: ThresholdsConfigMode,
    /// Must be sorted by 'value', first value is always -Infinity
    pub steps: Vec<Threshold>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Transformation {
    pub id: String,
    pub options: Map<String, Value>,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ValueMap {
    pub options: Map<String, Value>,
    #[serde(rename = "type")]
    pub type_: ValueMapType,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RangeMap {
    pub options: RangeMapOptions,
    #[serde(rename = "type")]
    pub type_: RangeMapType,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RangeMapOptions {
    pub from: f64,
    pub result: ValueMappingResult,
    pub to: f64,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RegexMap {
    pub options: RegexMapOptions,
    #[serde(rename = "type")]
    pub type_: RegexMapType,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct RegexMapOptions {
    pub pattern: String,
    pub result: ValueMappingResult,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SpecialValueMap {
    pub options: SpecialValueMapOptions,
    #[serde(rename = "type")]
    pub type_: SpecialValueMapType,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct SpecialValueMapOptions {
    #[serde(rename = "match")]
    pub match_: SpecialValueMapOptionsMatch,
    pub pattern: String,
    pub result: ValueMappingResult,
}

/// One entry of a field's value mappings, selected by its `type` literal.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ValueMapping {
    Value(ValueMap),
    Range(RangeMap),
    Regex(RegexMap),
    Special(SpecialValueMap),
}

impl<'de> Deserialize<'de> for ValueMapping {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        const VARIANTS: &[&str] = &["value", "range", "regex", "special"];

        let value = Value::deserialize(deserializer)?;
        let literal = type_literal(&value).map_err(D::Error::custom)?;
        let mapping_type: MappingType = literal
            .parse()
            .map_err(|_| D::Error::unknown_variant(literal, VARIANTS))?;
        let mapping = match mapping_type {
            MappingType::Value => ValueMap::deserialize(&value).map(Self::Value),
            MappingType::Range => RangeMap::deserialize(&value).map(Self::Range),
            MappingType::Regex => RegexMap::deserialize(&value).map(Self::Regex),
            MappingType::Special => SpecialValueMap::deserialize(&value).map(Self::Special),
        };
        mapping.map_err(D::Error::custom)
    }
}

impl ValueMapping {
    pub fn mapping_type(&self) -> MappingType {
        match self {
            Self::Value(_) => MappingType::Value,
            Self::Range(_) => MappingType::Range,
            Self::Regex(_) => MappingType::Regex,
            Self::Special(_) => MappingType::Special,
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct ValueMappingResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct VariableModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub type_: VariableModelType,
}
