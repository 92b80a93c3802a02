//! Round-trip fidelity checks
//!
//! Decodes a document into [`Dashboard`], encodes it again and compares the
//! result with the original JSON. Differences are reported by JSON pointer.

use std::fmt;

use serde_json::Value;

use crate::kinds::dashboard::{self, Dashboard, DashboardError};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DifferenceKind {
    /// Present in the original, absent after re-encoding.
    Missing,
    /// Absent in the original, present after re-encoding.
    Added,
    Changed,
}

impl fmt::Display for DifferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Missing => "missing",
            Self::Added => "added",
            Self::Changed => "changed",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Difference {
    pub path: String,
    pub kind: DifferenceKind,
}

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() { "/" } else { &self.path };
        write!(f, "{} {}", self.kind, path)
    }
}

#[derive(Debug)]
pub struct RoundTrip {
    pub dashboard: Dashboard,
    pub differences: Vec<Difference>,
}

impl RoundTrip {
    pub fn is_faithful(&self) -> bool {
        self.differences.is_empty()
    }
}

pub fn check(raw: &str) -> Result<RoundTrip, DashboardError> {
    let original: Value = serde_json::from_str(raw).map_err(DashboardError::ParseJson)?;
    let dashboard = dashboard::from_str(raw)?;
    let reencoded = dashboard::to_value(&dashboard)?;
    let differences = diff(&original, &reencoded);
    log::debug!("Round trip found {} difference(s)", differences.len());
    Ok(RoundTrip {
        dashboard,
        differences,
    })
}

/// Structural comparison of two JSON documents.
///
/// Numbers are compared by value, so `1` and `1.0` are equal.
pub fn diff(expected: &Value, actual: &Value) -> Vec<Difference> {
    let mut differences = Vec::new();
    diff_at(&mut String::new(), expected, actual, &mut differences);
    differences
}

fn diff_at(path: &mut String, expected: &Value, actual: &Value, out: &mut Vec<Difference>) {
    match (expected, actual) {
        (Value::Object(exp), Value::Object(act)) => {
            for (key, exp_value) in exp {
                let len = path.len();
                push_segment(path, key);
                match act.get(key) {
                    Some(act_value) => diff_at(path, exp_value, act_value, out),
                    None => out.push(Difference {
                        path: path.clone(),
                        kind: DifferenceKind::Missing,
                    }),
                }
                path.truncate(len);
            }
            for key in act.keys().filter(|k| !exp.contains_key(*k)) {
                let len = path.len();
                push_segment(path, key);
                out.push(Difference {
                    path: path.clone(),
                    kind: DifferenceKind::Added,
                });
                path.truncate(len);
            }
        }
        (Value::Array(exp), Value::Array(act)) => {
            for (idx, exp_value) in exp.iter().enumerate() {
                let len = path.len();
                push_segment(path, &idx.to_string());
                match act.get(idx) {
                    Some(act_value) => diff_at(path, exp_value, act_value, out),
                    None => out.push(Difference {
                        path: path.clone(),
                        kind: DifferenceKind::Missing,
                    }),
                }
                path.truncate(len);
            }
            for idx in exp.len()..act.len() {
                let len = path.len();
                push_segment(path, &idx.to_string());
                out.push(Difference {
                    path: path.clone(),
                    kind: DifferenceKind::Added,
                });
                path.truncate(len);
            }
        }
        (Value::Number(exp), Value::Number(act)) => {
            if exp != act && exp.as_f64() != act.as_f64() {
                out.push(Difference {
                    path: path.clone(),
                    kind: DifferenceKind::Changed,
                });
            }
        }
        (exp, act) => {
            if exp != act {
                out.push(Difference {
                    path: path.clone(),
                    kind: DifferenceKind::Changed,
                });
            }
        }
    }
}

// RFC 6901 escaping
fn push_segment(path: &mut String, segment: &str) {
    path.push('/');
    path.push_str(&segment.replace('~', "~0").replace('/', "~1"));
}
