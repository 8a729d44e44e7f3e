//! Type lattice
//!
//! Maps a JSON value to its [`TypeTag`]. Scalars map directly; arrays are
//! classified by counting what their elements look like and picking the
//! dominant element type.

use crate::types::TypeTag;
use serde_json::{Number, Value};

/// Classify a single value
pub fn type_of(value: &Value) -> TypeTag {
    match value {
        Value::Null => TypeTag::Null,
        Value::Bool(_) => TypeTag::Bool,
        Value::Number(n) if is_integral(n) => TypeTag::Int,
        Value::Number(_) => TypeTag::Float,
        Value::String(_) => TypeTag::String,
        Value::Object(_) => TypeTag::Object,
        Value::Array(elements) => type_of_array(elements),
    }
}

/// Classify an array by the dominant type of its elements
///
/// Strings that parse as numbers or booleans vote as such. Any `null`,
/// untyped nested array, or string seen after a non-string vote makes the
/// array mixed (`Array`). Ties go to Object, then Bool, Float, Int, String.
pub fn type_of_array(elements: &[Value]) -> TypeTag {
    type_of_elements(elements)
}

/// Classify a sequence of array elements, possibly drawn from several arrays
pub fn type_of_elements<'a>(elements: impl IntoIterator<Item = &'a Value>) -> TypeTag {
    let mut tally = Tally::default();
    for element in elements {
        tally.observe(element);
    }
    tally.resolve()
}

/// Whole numbers (including `1.0`) are integers
pub(crate) fn is_integral(n: &Number) -> bool {
    n.is_i64() || n.is_u64() || n.as_f64().is_some_and(|f| f.is_finite() && f.fract() == 0.0)
}

#[derive(Debug, Default)]
struct Tally {
    bools: usize,
    floats: usize,
    ints: usize,
    strings: usize,
    objects: usize,
    mixed: usize,
}

/// What a string element looks like once parsed
enum Lexeme {
    Int,
    Float,
    Bool,
    Text,
}

impl Tally {
    fn observe(&mut self, value: &Value) {
        match value {
            Value::Null => self.mixed += 1,
            Value::Bool(_) => self.push_bool(),
            Value::Number(n) if is_integral(n) => self.push_int(),
            Value::Number(_) => self.push_float(),
            Value::String(s) => match lex(s) {
                Lexeme::Int => self.push_int(),
                Lexeme::Float => self.push_float(),
                Lexeme::Bool => self.push_bool(),
                Lexeme::Text => self.push_text(),
            },
            Value::Object(_) => self.objects += 1,
            Value::Array(inner) => match type_of_array(inner) {
                TypeTag::ArrayObject => self.objects += 1,
                TypeTag::ArrayBool => self.push_bool(),
                TypeTag::ArrayInt => self.push_int(),
                TypeTag::ArrayFloat => self.push_float(),
                TypeTag::ArrayString => self.push_text(),
                _ => self.mixed += 1,
            },
        }
    }

    // A bool absorbs every numeric vote seen so far.
    fn push_bool(&mut self) {
        self.ints = 0;
        self.floats = 0;
        self.bools += 1;
    }

    fn push_float(&mut self) {
        self.ints = 0;
        self.floats += 1;
    }

    fn push_int(&mut self) {
        if self.bools > 0 {
            self.bools += 1;
        } else if self.floats > 0 {
            self.floats += 1;
        } else {
            self.ints += 1;
        }
    }

    fn push_text(&mut self) {
        if self.ints > 0 || self.floats > 0 || self.bools > 0 || self.objects > 0 {
            self.mixed += 1;
        } else {
            self.strings += 1;
        }
    }

    fn resolve(&self) -> TypeTag {
        if self.mixed > 0 {
            return TypeTag::Array;
        }

        let ranked = [
            (self.objects, TypeTag::ArrayObject),
            (self.bools, TypeTag::ArrayBool),
            (self.floats, TypeTag::ArrayFloat),
            (self.ints, TypeTag::ArrayInt),
            (self.strings, TypeTag::ArrayString),
        ];

        let mut best: Option<(usize, TypeTag)> = None;
        for (count, tag) in ranked {
            if count > 0 && best.map_or(true, |(top, _)| count > top) {
                best = Some((count, tag));
            }
        }
        best.map_or(TypeTag::Array, |(_, tag)| tag)
    }
}

fn lex(s: &str) -> Lexeme {
    if let Ok(f) = s.parse::<f64>() {
        return if f.is_finite() && f.fract() == 0.0 && !s.contains(['.', 'e', 'E']) {
            Lexeme::Int
        } else {
            Lexeme::Float
        };
    }
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" | "0" | "f" | "F" | "FALSE" | "false"
        | "False" => Lexeme::Bool,
        _ => Lexeme::Text,
    }
}
