//! Merge engine
//!
//! Collapses sibling JSON values (usually the elements of one array) into a
//! single representative value describing their union shape.
//!
//! Rules:
//! - the first non-null scalar wins, a later `null` never replaces it
//! - objects merge key by key, recursively, new keys appended in first-seen order
//! - an array of objects meeting an object merges into it
//! - arrays are reduced to their distinct non-object elements followed by one
//!   merged object holding every key seen in any object element

use serde_json::{Map, Value};

/// Merge a list of values into one representative value
///
/// For an array of objects this yields a single object with the union of
/// all keys. For scalars it yields the first non-null value.
pub fn merge(values: &[Value]) -> Value {
    values.iter().fold(Value::Null, merge_pair)
}

/// Fold `next` into the accumulated representative `acc`
pub fn merge_pair(acc: Value, next: &Value) -> Value {
    match (acc, next) {
        (acc, Value::Null) => acc,
        (Value::Null, next) => collapse(next),
        (Value::Object(mut a), Value::Object(b)) => {
            merge_into(&mut a, b);
            Value::Object(a)
        }
        (Value::Array(mut a), Value::Array(b)) => {
            a.extend(b.iter().cloned());
            Value::Array(merge_elements(&a))
        }
        // an array holding only objects folds into an object, either way round
        (Value::Object(mut a), Value::Array(b)) => {
            if let [Value::Object(b)] = merge_elements(b).as_slice() {
                merge_into(&mut a, b);
            }
            Value::Object(a)
        }
        (Value::Array(mut a), Value::Object(b)) => {
            if let [Value::Object(existing)] = a.as_mut_slice() {
                merge_into(existing, b);
            }
            Value::Array(a)
        }
        (acc, _) => acc,
    }
}

/// Rewrite a value so that every nested array is in representative form
pub fn collapse(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(collapse_map(map)),
        Value::Array(elements) => Value::Array(merge_elements(elements)),
        other => other.clone(),
    }
}

/// Reduce array elements to their representative form
///
/// Distinct non-object elements keep first-seen order; all object elements
/// (including those of nested arrays that hold nothing but one object) are
/// merged into a single object placed last.
pub fn merge_elements(elements: &[Value]) -> Vec<Value> {
    let mut others: Vec<Value> = Vec::new();
    let mut object: Option<Map<String, Value>> = None;

    for element in elements {
        match element {
            Value::Object(map) => fold_object(&mut object, map),
            Value::Array(inner) => {
                let inner = merge_elements(inner);
                match inner.as_slice() {
                    [Value::Object(map)] => fold_object(&mut object, map),
                    _ => push_distinct(&mut others, Value::Array(inner)),
                }
            }
            scalar => push_distinct(&mut others, scalar.clone()),
        }
    }

    if let Some(object) = object {
        others.push(Value::Object(object));
    }
    others
}

fn collapse_map(map: &Map<String, Value>) -> Map<String, Value> {
    map.iter().map(|(k, v)| (k.clone(), collapse(v))).collect()
}

fn merge_into(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (key, value) in source {
        match target.get_mut(key) {
            Some(slot) => {
                let current = std::mem::take(slot);
                *slot = merge_pair(current, value);
            }
            None => {
                target.insert(key.clone(), collapse(value));
            }
        }
    }
}

fn fold_object(acc: &mut Option<Map<String, Value>>, map: &Map<String, Value>) {
    match acc {
        Some(existing) => merge_into(existing, map),
        None => *acc = Some(collapse_map(map)),
    }
}

fn push_distinct(values: &mut Vec<Value>, value: Value) {
    if !values.contains(&value) {
        values.push(value);
    }
}
