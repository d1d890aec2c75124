//! Structured query and update requests.
//!
//! Requests are assembled from [`Pattern`]s over typed [`Term`]s and only
//! turned into text at the edge, by their `Display` impls. Literal values are
//! escaped during rendering, so a label can never close its own quotes.

use std::fmt;

/// One position of a triple pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// A prefixed name such as `gfb:Valve` or `n:_district_heat`, rendered as is.
    Name(String),
    /// A full IRI, rendered in angle brackets.
    Iri(String),
    /// A query variable, rendered with a leading `?`.
    Variable(String),
    /// A string literal, rendered quoted and escaped.
    Literal(String),
}

impl Term {
    /// Builds a [`Term::Name`].
    pub fn name(name: impl Into<String>) -> Self {
        Term::Name(name.into())
    }

    /// Builds a [`Term::Iri`].
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(iri.into())
    }

    /// Builds a [`Term::Variable`] from its name without the `?`.
    pub fn var(name: impl Into<String>) -> Self {
        Term::Variable(name.into())
    }

    /// Builds a [`Term::Literal`].
    pub fn literal(value: impl Into<String>) -> Self {
        Term::Literal(value.into())
    }

    /// Returns `true` for [`Term::Variable`].
    #[must_use]
    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Name(name) => f.write_str(name),
            Term::Iri(iri) => write!(f, "<{}>", iri),
            Term::Variable(name) => write!(f, "?{}", name),
            Term::Literal(value) => {
                f.write_str("\"")?;
                for c in value.chars() {
                    match c {
                        '\\' => f.write_str("\\\\")?,
                        '"' => f.write_str("\\\"")?,
                        '\n' => f.write_str("\\n")?,
                        '\r' => f.write_str("\\r")?,
                        c => write!(f, "{}", c)?,
                    }
                }
                f.write_str("\"")
            }
        }
    }
}

/// A `subject predicate object` triple pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    /// Subject position.
    pub subject: Term,
    /// Predicate position.
    pub predicate: Term,
    /// Object position.
    pub object: Term,
}

impl Pattern {
    /// Builds a pattern from its three positions.
    #[must_use]
    pub fn new(subject: Term, predicate: Term, object: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.subject, self.predicate, self.object)
    }
}

fn write_block(f: &mut fmt::Formatter<'_>, keyword: &str, patterns: &[Pattern]) -> fmt::Result {
    writeln!(f, "{} {{", keyword)?;
    for p in patterns {
        writeln!(f, "    {} .", p)?;
    }
    writeln!(f, "}}")
}

/// A `SELECT` over a basic graph pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectQuery {
    /// Projected variable names, without `?`.
    pub variables: Vec<String>,
    /// The `WHERE` patterns.
    pub patterns: Vec<Pattern>,
}

impl SelectQuery {
    /// Starts a query projecting `variable`.
    pub fn select(variable: impl Into<String>) -> Self {
        Self {
            variables: vec![variable.into()],
            patterns: Vec::new(),
        }
    }

    /// Adds a `WHERE` pattern.
    #[must_use]
    pub fn filter(mut self, pattern: Pattern) -> Self {
        self.patterns.push(pattern);
        self
    }
}

impl fmt::Display for SelectQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT")?;
        for v in &self.variables {
            write!(f, " ?{}", v)?;
        }
        f.write_str("\n")?;
        write_block(f, "WHERE", &self.patterns)
    }
}

/// An `INSERT` / `DELETE` / `WHERE` update.
///
/// Renders prologue lines, a blank separator line, then the `INSERT`,
/// `DELETE` and `WHERE` blocks in that order. `INSERT` and `DELETE` are
/// omitted when empty; `WHERE` is always present because the service
/// requires it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Update {
    /// `(alias, iri)` pairs rendered as `PREFIX alias: <iri>` lines.
    pub prefixes: Vec<(String, String)>,
    /// Triples to add.
    pub insert: Vec<Pattern>,
    /// Triples to remove.
    pub delete: Vec<Pattern>,
    /// Patterns binding the variables used by `delete`.
    pub filter: Vec<Pattern>,
}

impl Update {
    /// Starts an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a namespace prefix in the prologue.
    #[must_use]
    pub fn prefix(mut self, alias: impl Into<String>, iri: impl Into<String>) -> Self {
        self.prefixes.push((alias.into(), iri.into()));
        self
    }

    /// Adds an `INSERT` pattern.
    #[must_use]
    pub fn insert(mut self, pattern: Pattern) -> Self {
        self.insert.push(pattern);
        self
    }

    /// Adds a `DELETE` pattern.
    #[must_use]
    pub fn delete(mut self, pattern: Pattern) -> Self {
        self.delete.push(pattern);
        self
    }

    /// Adds a `WHERE` pattern.
    #[must_use]
    pub fn filter(mut self, pattern: Pattern) -> Self {
        self.filter.push(pattern);
        self
    }
}

impl fmt::Display for Update {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (alias, iri) in &self.prefixes {
            writeln!(f, "PREFIX {}: <{}>", alias, iri)?;
        }
        f.write_str("\n")?;
        if !self.insert.is_empty() {
            write_block(f, "INSERT", &self.insert)?;
        }
        if !self.delete.is_empty() {
            write_block(f, "DELETE", &self.delete)?;
        }
        write_block(f, "WHERE", &self.filter)
    }
}
