//! Token-safe instance labels.
//!
//! Labels become part of node identifiers (`{prefix}_{label}`), so characters
//! that are not legal in a prefixed name are replaced by `_name_` escape
//! sequences before any identifier is built.

use std::fmt;

/// Substitutions applied in order by [`escape`]; [`unescape`] applies them
/// in reverse.
const ESCAPES: &[(&str, &str)] = &[
    (" ", "_space_"),
    (":", "_colon_"),
    ("/", "_slash_"),
    ("æ", "_ae_"),
    ("ø", "_ao_"),
    ("å", "_aa_"),
    ("Æ", "_AE_"),
    ("Ø", "_AO_"),
    ("Å", "_AA_"),
];

/// Replaces spaces, colons, slashes and the Danish letters `æøåÆØÅ` with
/// their escape sequences.
#[must_use]
pub fn escape(value: &str) -> String {
    ESCAPES
        .iter()
        .fold(value.to_owned(), |acc, (from, to)| acc.replace(from, to))
}

/// Reverses [`escape`] for display. Not used for identity.
#[must_use]
pub fn unescape(value: &str) -> String {
    ESCAPES
        .iter()
        .rev()
        .fold(value.to_owned(), |acc, (from, to)| acc.replace(to, from))
}

/// A label that has been passed through [`escape`].
///
/// The only way to obtain one is [`EscapedLabel::new`], so identifiers built
/// from it never carry raw forbidden characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EscapedLabel(String);

impl EscapedLabel {
    /// Escapes `raw` and wraps the result.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(escape(raw))
    }

    /// The escaped text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The human-readable form, for logs.
    #[must_use]
    pub fn display(&self) -> String {
        unescape(&self.0)
    }
}

impl fmt::Display for EscapedLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
