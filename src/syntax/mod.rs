//! Template macro language
//!
//! User templates are written with a small set of case-insensitive macros:
//!
//! | Macro | Meaning |
//! |-------|---------|
//! | `{{Name}}` | name of the current node |
//! | `{{Name.CamelCase}}` (and `PascalCase`, `SnakeCase`, `KebabCase`, `DotCase`) | name in that case |
//! | `{{Properties}}` ... `{{/Properties}}` | repeat the body for every child |
//! | `{{Type}}` / `{{Type.Doc}}` | target type / doc type of the current node |
//! | `{{Type.IsArray}}` ... `{{/Type.IsArray}}` | body only for array nodes |
//! | `{{Type.IsObject}}` ... `{{/Type.IsObject}}` | body only for object nodes |
//! | `{{SPLIT}}` ... `{{/SPLIT}}` | per-class section when splitting into files |
//!
//! [`validate`] checks block balance on the raw text, [`expand`] rewrites
//! the macros into engine syntax. Anything that is not a macro passes
//! through untouched, so templates may also use the engine directly.

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::LazyLock;

/// A macro recognised in user templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Macro {
    Name,
    NameCamelCase,
    NamePascalCase,
    NameSnakeCase,
    NameKebabCase,
    NameDotCase,
    Properties,
    PropertiesEnd,
    Type,
    TypeDoc,
    IsArray,
    IsArrayEnd,
    IsObject,
    IsObjectEnd,
    Split,
    SplitEnd,
}

impl Macro {
    pub const ALL: [Macro; 16] = [
        Macro::Name,
        Macro::NameCamelCase,
        Macro::NamePascalCase,
        Macro::NameSnakeCase,
        Macro::NameKebabCase,
        Macro::NameDotCase,
        Macro::Properties,
        Macro::PropertiesEnd,
        Macro::Type,
        Macro::TypeDoc,
        Macro::IsArray,
        Macro::IsArrayEnd,
        Macro::IsObject,
        Macro::IsObjectEnd,
        Macro::Split,
        Macro::SplitEnd,
    ];

    /// Canonical spelling, as used in error messages
    pub fn tag(self) -> &'static str {
        match self {
            Macro::Name => "{{Name}}",
            Macro::NameCamelCase => "{{Name.CamelCase}}",
            Macro::NamePascalCase => "{{Name.PascalCase}}",
            Macro::NameSnakeCase => "{{Name.SnakeCase}}",
            Macro::NameKebabCase => "{{Name.KebabCase}}",
            Macro::NameDotCase => "{{Name.DotCase}}",
            Macro::Properties => "{{Properties}}",
            Macro::PropertiesEnd => "{{/Properties}}",
            Macro::Type => "{{Type}}",
            Macro::TypeDoc => "{{Type.Doc}}",
            Macro::IsArray => "{{Type.IsArray}}",
            Macro::IsArrayEnd => "{{/Type.IsArray}}",
            Macro::IsObject => "{{Type.IsObject}}",
            Macro::IsObjectEnd => "{{/Type.IsObject}}",
            Macro::Split => "{{SPLIT}}",
            Macro::SplitEnd => "{{/SPLIT}}",
        }
    }

    /// Engine code the macro expands to (split markers are structural)
    pub fn expansion(self) -> Option<&'static str> {
        Some(match self {
            Macro::Name => "{{ node.name }}",
            Macro::NameCamelCase => "{{ node.name | camel_case }}",
            Macro::NamePascalCase => "{{ node.name | pascal_case }}",
            Macro::NameSnakeCase => "{{ node.name | snake_case }}",
            Macro::NameKebabCase => "{{ node.name | kebab_case }}",
            Macro::NameDotCase => "{{ node.name | dot_case }}",
            Macro::Properties => "{%- for node in node.properties %}",
            Macro::PropertiesEnd => "{%- endfor %}",
            Macro::Type => "{{ node.type }}",
            Macro::TypeDoc => "{{ node.doc_type }}",
            Macro::IsArray => "{%- if node.is_array %}",
            Macro::IsObject => "{%- if node.is_object %}",
            Macro::IsArrayEnd | Macro::IsObjectEnd => "{%- endif %}",
            Macro::Split | Macro::SplitEnd => return None,
        })
    }

    fn keyword(self) -> &'static str {
        match self {
            Macro::Name => r"Name",
            Macro::NameCamelCase => r"Name\.CamelCase",
            Macro::NamePascalCase => r"Name\.PascalCase",
            Macro::NameSnakeCase => r"Name\.SnakeCase",
            Macro::NameKebabCase => r"Name\.KebabCase",
            Macro::NameDotCase => r"Name\.DotCase",
            Macro::Properties => r"Properties",
            Macro::PropertiesEnd => r"/Properties",
            Macro::Type => r"Type",
            Macro::TypeDoc => r"Type\.Doc",
            Macro::IsArray => r"Type\.IsArray",
            Macro::IsArrayEnd => r"/Type\.IsArray",
            Macro::IsObject => r"Type\.IsObject",
            Macro::IsObjectEnd => r"/Type\.IsObject",
            Macro::Split => r"SPLIT",
            Macro::SplitEnd => r"/SPLIT",
        }
    }

    fn is_split(self) -> bool {
        matches!(self, Macro::Split | Macro::SplitEnd)
    }
}

/// Block macros as (open, close) pairs
pub const BLOCKS: [(Macro, Macro); 4] = [
    (Macro::Properties, Macro::PropertiesEnd),
    (Macro::IsArray, Macro::IsArrayEnd),
    (Macro::IsObject, Macro::IsObjectEnd),
    (Macro::Split, Macro::SplitEnd),
];

struct Rule {
    kind: Macro,
    pattern: Regex,
}

/// One compiled pattern per macro, in `Macro::ALL` order
static RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    Macro::ALL
        .iter()
        .map(|&kind| {
            // split markers swallow the line break that follows them
            let tail = if kind.is_split() { r"\n?" } else { "" };
            let source = format!(r"(?i)\{{\{{\s*{}\s*\}}\}}{tail}", kind.keyword());
            Rule {
                kind,
                pattern: Regex::new(&source).expect("Invalid macro regex"),
            }
        })
        .collect()
});

fn pattern(kind: Macro) -> &'static Regex {
    // Macro::ALL lists the variants in declaration order
    &RULES[kind as usize].pattern
}

/// Check that every block macro is balanced
///
/// Reports the first unbalanced block in [`BLOCKS`] order, pointing at the
/// last occurrence of the excess tag. More than one split section is also
/// rejected.
pub fn validate(text: &str) -> Result<()> {
    for (open, close) in BLOCKS {
        let opens: Vec<_> = pattern(open).find_iter(text).collect();
        let closes: Vec<_> = pattern(close).find_iter(text).collect();

        if opens.len() > closes.len() {
            let at = opens.last().map_or(0, |m| m.start());
            return Err(Error::syntax(
                format!("need close '{}'", close.tag()),
                open.tag(),
                at,
            ));
        }
        if closes.len() > opens.len() {
            let at = closes.last().map_or(0, |m| m.start());
            return Err(Error::syntax(
                format!("need open '{}'", open.tag()),
                close.tag(),
                at,
            ));
        }
    }

    for kind in [Macro::Split, Macro::SplitEnd] {
        if let Some(second) = pattern(kind).find_iter(text).nth(1) {
            return Err(Error::syntax(
                format!("have only one '{}'", kind.tag()),
                kind.tag(),
                second.start(),
            ));
        }
    }

    Ok(())
}

/// Rewrite every macro into engine syntax, leaving split markers in place
pub fn expand(text: &str) -> String {
    RULES.iter().fold(text.to_string(), |acc, rule| match rule.kind.expansion() {
        Some(replacement) => rule
            .pattern
            .replace_all(&acc, regex::NoExpand(replacement))
            .into_owned(),
        None => acc,
    })
}

/// Validate then expand
pub fn compile(text: &str) -> Result<String> {
    validate(text)?;
    Ok(expand(text))
}

/// Text between the split markers, if the template has a split section
pub fn extract_split(text: &str) -> Option<&str> {
    let open = pattern(Macro::Split).find(text)?;
    let close = pattern(Macro::SplitEnd).find_at(text, open.end())?;
    Some(&text[open.end()..close.start()])
}

/// Remove the split markers, keeping their content
pub fn strip_split(text: &str) -> String {
    let stripped = pattern(Macro::Split).replace_all(text, "");
    pattern(Macro::SplitEnd).replace_all(&stripped, "").into_owned()
}

#[cfg(test)]
mod tests;
