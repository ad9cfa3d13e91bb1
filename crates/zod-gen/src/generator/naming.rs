//! Identifier derivation for emitted TypeScript declarations.

use std::sync::LazyLock;

use regex::Regex;

use crate::openapi::Method;

static NON_ALNUM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]+").unwrap());

/// Converts a schema or path segment name into a `PascalCase` identifier.
///
/// # Rules:
/// 1. Runs of non-alphanumeric characters collapse to a single word boundary.
/// 2. A lower-to-upper camel transition also starts a new word, so an input
///    that is already `PascalCase` maps to itself (the function is
///    idempotent).
/// 3. Each word's first character is upper-cased, the remainder lower-cased.
/// 4. A result starting with a digit is prefixed with `_` to stay a valid
///    identifier.
/// 5. An input with no alphanumeric characters at all becomes `Unnamed`.
pub(crate) fn to_pascal_identifier(name: &str) -> String {
  let mut ident = String::with_capacity(name.len());
  for word in NON_ALNUM_RE.split(name).filter(|word| !word.is_empty()) {
    capitalize_words(word, &mut ident);
  }

  if ident.is_empty() {
    return "Unnamed".to_string();
  }

  if ident.starts_with(|c: char| c.is_ascii_digit()) {
    ident.insert(0, '_');
  }

  ident
}

/// Capitalizes word starts within one separator-free run, treating camelCase
/// transitions as boundaries.
fn capitalize_words(word: &str, out: &mut String) {
  let chars: Vec<char> = word.chars().collect();
  let mut capitalize_next = true;
  let mut prev_was_lower = false;

  for (i, &c) in chars.iter().enumerate() {
    let is_upper = c.is_ascii_uppercase();
    let next_is_lower = chars.get(i + 1).is_some_and(char::is_ascii_lowercase);
    let starts_word = capitalize_next || (prev_was_lower && is_upper) || (is_upper && next_is_lower);

    if starts_word {
      out.extend(c.to_uppercase());
    } else {
      out.extend(c.to_lowercase());
    }

    prev_was_lower = c.is_ascii_lowercase();
    capitalize_next = false;
  }
}

/// Derives the client binding name for an operation: the lowercase HTTP
/// method followed by the Pascal-cased path with braces and separators
/// stripped. Sibling paths that differ only in separator position can
/// collide; the collision is surfaced as a warning, not resolved here.
pub(crate) fn binding_name(method: Method, path: &str) -> String {
  let cleaned = path.replace(['{', '}'], "");
  format!("{}{}", method.as_str(), to_pascal_identifier(&cleaned))
}

/// Derives an enumeration member name from a literal value: the upper-cased
/// text for strings, a positional `VALUE_<n>` for anything else.
pub(crate) fn enum_member_name(value: &serde_json::Value, index: usize) -> String {
  match value.as_str() {
    Some(text) => text.to_uppercase(),
    None => format!("VALUE_{index}"),
  }
}
