//! Identifier case conversion
//!
//! Splits a raw key into words and re-joins them in the requested style.
//! Word boundaries are any non-alphanumeric character, a lower-to-upper
//! transition ("userId"), and the end of an acronym ("HTTPServer").

/// Split an identifier into its words
pub fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            flush(&mut words, &mut current);
            continue;
        }

        if !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let starts_word = c.is_uppercase()
                && (prev.is_lowercase()
                    || prev.is_ascii_digit()
                    || (prev.is_uppercase() && next_is_lower));
            if starts_word {
                flush(&mut words, &mut current);
            }
        }
        current.push(c);
    }

    flush(&mut words, &mut current);
    words
}

fn flush(words: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// `user_id` -> `userId`
pub fn to_camel_case(input: &str) -> String {
    split_words(input)
        .iter()
        .enumerate()
        .map(|(i, w)| if i == 0 { w.to_lowercase() } else { capitalize(w) })
        .collect()
}

/// `user_id` -> `UserId`
pub fn to_pascal_case(input: &str) -> String {
    split_words(input).iter().map(|w| capitalize(w)).collect()
}

/// `userId` -> `user_id`
pub fn to_snake_case(input: &str) -> String {
    join_lower(input, "_")
}

/// `userId` -> `user-id`
pub fn to_kebab_case(input: &str) -> String {
    join_lower(input, "-")
}

/// `userId` -> `user.id`
pub fn to_dot_case(input: &str) -> String {
    join_lower(input, ".")
}

fn join_lower(input: &str, separator: &str) -> String {
    split_words(input)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(separator)
}
