//! Schema tree construction from sample JSON

use super::lattice;
use super::merge::collapse;
use super::types::Node;
use crate::error::{Error, Result};
use crate::types::TypeTag;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

/// Go-style duration literal: "1h30m", "250ms", "-1.5s"
static DURATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?(?:(?:\d+(?:\.\d*)?|\.\d+)(?:ns|us|µs|μs|ms|s|m|h))+$")
        .expect("Invalid regex")
});

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const TIME_FORMATS: [&str; 2] = ["%H:%M:%S%.f", "%H:%M"];

/// Builds a [`Node`] tree from a sample value
#[derive(Debug, Clone, Default)]
pub struct SchemaInferrer {
    /// Refine scalar strings into date, time, date-time and duration tags
    detect_string_subtypes: bool,
}

impl SchemaInferrer {
    /// Create an inferrer with string subtype detection off
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable/disable string subtype detection
    #[must_use]
    pub fn with_string_subtypes(mut self, enabled: bool) -> Self {
        self.detect_string_subtypes = enabled;
        self
    }

    /// Infer the schema tree of a sample document
    ///
    /// The root must be an object or an array; the returned root node has an
    /// empty key until the formatter assigns the root class name.
    pub fn infer(&self, value: &Value) -> Result<Node> {
        match value {
            Value::Object(_) | Value::Array(_) => {}
            other => {
                return Err(Error::UnsupportedRoot {
                    kind: lattice::type_of(other).to_string(),
                })
            }
        }

        let shape = collapse(value);
        Ok(self.build(String::new(), &[value], &shape))
    }

    /// Classify one value, honouring string subtype detection
    pub fn type_of(&self, value: &Value) -> TypeTag {
        match value {
            Value::String(s) if self.detect_string_subtypes => {
                detect_subtype(s).unwrap_or(TypeTag::String)
            }
            other => lattice::type_of(other),
        }
    }

    /// Build one node
    ///
    /// `samples` are the raw values found at this position (one per object
    /// that defines the key); `shape` is their merged form. The tag is voted
    /// on the raw samples, the children come from the merged shape.
    fn build(&self, key: String, samples: &[&Value], shape: &Value) -> Node {
        let tag = self.tag_of(samples);
        let children = match shape {
            Value::Object(map) => self.build_children(map, samples),
            Value::Array(elements) if tag == TypeTag::ArrayObject => {
                representative_object(elements)
                    .map(|map| self.build_children(map, samples))
                    .unwrap_or_default()
            }
            _ => Vec::new(),
        };
        Node::new(key, tag, children)
    }

    fn build_children(&self, map: &Map<String, Value>, samples: &[&Value]) -> Vec<Node> {
        let mut objects = Vec::new();
        for sample in samples {
            collect_objects(sample, &mut objects);
        }

        map.iter()
            .map(|(key, shape)| {
                let child_samples: Vec<&Value> =
                    objects.iter().filter_map(|object| object.get(key)).collect();
                self.build(key.clone(), &child_samples, shape)
            })
            .collect()
    }

    /// The first non-null sample decides, except that sibling arrays vote
    /// together over all of their elements
    fn tag_of(&self, samples: &[&Value]) -> TypeTag {
        let present: Vec<&Value> = samples.iter().copied().filter(|v| !v.is_null()).collect();
        match present.first() {
            None => TypeTag::Null,
            Some(_) if present.iter().all(|v| v.is_array()) => lattice::type_of_elements(
                present.iter().filter_map(|v| v.as_array()).flatten(),
            ),
            Some(first) => self.type_of(first),
        }
    }
}

/// Infer a tree with default settings (convenience function)
pub fn infer_schema(value: &Value) -> Result<Node> {
    SchemaInferrer::new().infer(value)
}

/// The merged object of a collapsed array, searching nested arrays
fn representative_object(elements: &[Value]) -> Option<&Map<String, Value>> {
    elements.iter().rev().find_map(|element| match element {
        Value::Object(map) => Some(map),
        Value::Array(inner) => representative_object(inner),
        _ => None,
    })
}

/// Every object in a raw value: the value itself, or the objects of an
/// array at any nesting depth
fn collect_objects<'a>(value: &'a Value, out: &mut Vec<&'a Map<String, Value>>) {
    match value {
        Value::Object(map) => out.push(map),
        Value::Array(elements) => {
            for element in elements {
                collect_objects(element, out);
            }
        }
        _ => {}
    }
}

// Subtype detection helpers

fn detect_subtype(s: &str) -> Option<TypeTag> {
    if s.is_empty() {
        return None;
    }
    if DURATION_REGEX.is_match(s) {
        return Some(TypeTag::Duration);
    }
    if NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok() {
        return Some(TypeTag::Date);
    }
    if let Some(dt) = parse_datetime(s) {
        return Some(if dt.time() == NaiveTime::default() {
            TypeTag::Date
        } else {
            TypeTag::DateTime
        });
    }
    if TIME_FORMATS
        .iter()
        .any(|f| NaiveTime::parse_from_str(s, f).is_ok())
    {
        return Some(TypeTag::Time);
    }
    None
}

fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.naive_local());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
}
