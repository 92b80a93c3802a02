#![allow(dead_code)]
// Each integration test binary uses a different subset of these payloads

pub const VALID_PAYLOAD_1: &str = r##"
{
  "annotations": {
    "list": [
      {
        "builtIn": 1,
        "datasource": {"type": "grafana", "uid": "-- Grafana --"},
        "enable": true,
        "hide": true,
        "iconColor": "rgba(0, 211, 255, 1)",
        "name": "Annotations & Alerts",
        "showIn": 0,
        "target": {"limit": 100, "matchAny": false, "tags": [], "type": "dashboard"},
        "type": "dashboard"
      }
    ]
  },
  "description": "Edge node overview",
  "editable": true,
  "fiscalYearStartMonth": 0,
  "gnetId": "1860",
  "graphTooltip": 1,
  "id": 42,
  "links": [
    {
      "asDropdown": true,
      "icon": "external link",
      "includeVars": false,
      "keepTime": true,
      "tags": ["edge"],
      "targetBlank": false,
      "title": "Related",
      "type": "dashboards"
    }
  ],
  "liveNow": false,
  "panels": [
    {
      "collapsed": false,
      "gridPos": {"h": 1, "w": 24, "x": 0, "y": 0},
      "id": 10,
      "panels": [],
      "title": "Power",
      "type": "row"
    },
    {
      "datasource": {"type": "prometheus", "uid": "PBFA97CFB590B2093"},
      "description": "Total active power",
      "fieldConfig": {
        "defaults": {
          "color": {"mode": "thresholds"},
          "custom": {"lineWidth": 1, "fillOpacity": 10, "spanNulls": false},
          "decimals": 2,
          "displayName": "${__field.labels.site}",
          "filterable": false,
          "links": [{"title": "Details", "url": "/d/abc"}],
          "mappings": [
            {"type": "value", "options": {"0": {"text": "Off", "color": "red", "index": 0}}},
            {"type": "range", "options": {"from": 0.5, "to": 100, "result": {"text": "Low", "index": 1}}},
            {"type": "regex", "options": {"pattern": "^err(.*)", "result": {"text": "Error $1", "index": 2}}},
            {"type": "special", "options": {"match": "true", "pattern": "", "result": {"icon": "check", "index": 3}}}
          ],
          "max": 25000,
          "min": 0,
          "noValue": "n/a",
          "thresholds": {
            "mode": "absolute",
            "steps": [
              {"color": "green", "value": null},
              {"color": "#EAB839", "value": 18000.5},
              {"color": "red", "state": "critical", "value": 22000}
            ]
          },
          "unit": "watt"
        },
        "overrides": [
          {
            "matcher": {"id": "byName", "options": "P_L1"},
            "properties": [
              {"id": "color", "value": {"fixedColor": "blue", "mode": "fixed"}},
              {"id": "custom.hideFrom", "value": {"legend": false, "tooltip": false, "viz": false}}
            ]
          }
        ]
      },
      "gridPos": {"h": 8, "w": 12, "x": 0, "y": 1, "static": true},
      "id": 2,
      "interval": "30s",
      "maxDataPoints": 500,
      "options": {
        "legend": {"calcs": ["mean", "max"], "displayMode": "table", "placement": "bottom"},
        "tooltip": {"mode": "multi", "sort": "none"}
      },
      "pluginVersion": "9.1.0",
      "repeat": "site",
      "repeatDirection": "v",
      "tags": ["power"],
      "targets": [
        {
          "datasource": {"type": "prometheus", "uid": "PBFA97CFB590B2093"},
          "expr": "sum by (site) (active_power_watts)",
          "legendFormat": "{{site}}",
          "refId": "A"
        }
      ],
      "timeFrom": "24h",
      "timeShift": "1d",
      "title": "Active power",
      "transformations": [
        {"id": "organize", "options": {"excludeByName": {"Time": false}, "renameByName": {}}}
      ],
      "transparent": false,
      "type": "timeseries"
    },
    {
      "collapsed": true,
      "gridPos": {"h": 1, "w": 24, "x": 0, "y": 9},
      "id": 11,
      "panels": [
        {
          "aliasColors": {},
          "bars": false,
          "datasource": "Prometheus",
          "id": 12,
          "lines": true,
          "seriesOverrides": [],
          "title": "Legacy battery graph",
          "type": "graph",
          "yaxes": [{"format": "percent", "max": null, "min": 0}]
        }
      ],
      "repeat": "battery",
      "title": "Storage",
      "type": "row"
    },
    {
      "cards": {"cardPadding": null, "cardRound": null},
      "dataFormat": "timeseries",
      "id": 13,
      "title": "Latency heatmap",
      "type": "heatmap"
    }
  ],
  "refresh": "5s",
  "schemaVersion": 36,
  "style": "dark",
  "tags": ["edge", "power"],
  "templating": {
    "list": [
      {"label": "Site", "name": "site", "type": "query"},
      {"name": "battery", "type": "custom"},
      {"name": "ds", "type": "datasource"}
    ]
  },
  "time": {"from": "now-6h", "to": "now"},
  "timepicker": {
    "collapse": false,
    "enable": true,
    "hidden": false,
    "refresh_intervals": ["5s", "10s", "1m", "5m"],
    "time_options": ["5m", "1h", "6h", "24h"]
  },
  "timezone": "browser",
  "title": "Edge overview",
  "uid": "edge-overview",
  "version": 7,
  "weekStart": "monday"
}
"##;

pub const VALID_MINIMAL: &str = r#"
{
  "editable": false,
  "graphTooltip": 0,
  "schemaVersion": 36,
  "style": "light"
}
"#;

pub const INVALID_ENUM_PAYLOAD: &str = r#"
{
  "editable": true,
  "graphTooltip": 0,
  "schemaVersion": 36,
  "style": "dark",
  "templating": {
    "list": [{"name": "site", "type": "NOT VALID"}]
  }
}
"#;

pub const INVALID_GRAPH_TOOLTIP: &str = r#"
{
  "editable": true,
  "graphTooltip": 5,
  "schemaVersion": 36,
  "style": "dark"
}
"#;

pub const MISSING_REQUIRED_PAYLOAD: &str = r#"
{
  "graphTooltip": 0,
  "schemaVersion": 36,
  "style": "dark"
}
"#;

pub const LOSSY_PAYLOAD: &str = r#"
{
  "editable": true,
  "graphTooltip": 0,
  "schemaVersion": 36,
  "style": "dark",
  "title": null,
  "unknownKey": "dropped"
}
"#;

pub const INVALID_JSON: &str = "blah";

pub const THRESHOLD_WITHOUT_VALUE: &str = r#"
{
  "editable": true,
  "graphTooltip": 0,
  "panels": [
    {
      "fieldConfig": {
        "defaults": {
          "thresholds": {
            "mode": "percentage",
            "steps": [
              {"color": "red", "state": "x"},
              {"color": "green", "value": null},
              {"color": "orange", "value": 75}
            ]
          }
        },
        "overrides": []
      },
      "options": {},
      "repeatDirection": "h",
      "transformations": [],
      "transparent": false,
      "type": "gauge"
    }
  ],
  "schemaVersion": 36,
  "style": "dark"
}
"#;
