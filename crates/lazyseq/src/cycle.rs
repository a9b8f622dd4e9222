use std::fmt;

use crate::Producer;
use crate::error::{BuildError, CountError};
use crate::materialize;
use crate::value::{Value, ValueKind};

/// Unbounded repetition of a finite source, indexed by `i % len`.
///
/// The source must be text, a list, or a frozen list, and must be
/// non-empty; both are checked at construction, so a built `Cycle` can
/// always be indexed.
#[derive(Clone, Debug, PartialEq)]
pub struct Cycle {
    source: Source,
}

#[derive(Clone, Debug, PartialEq)]
enum Source {
    Text(Vec<char>),
    Items(Vec<Value>),
}

/// Finite view handed back by [`Cycle::take`], mirroring the source kind:
/// text sources come back as one joined text value, element sources as a
/// list of elements.
#[derive(Clone, Debug, PartialEq)]
pub enum Taken {
    Text(String),
    List(Vec<Value>),
}

impl Cycle {
    pub fn new(input: &Value) -> Result<Self, BuildError> {
        let source = match input {
            Value::Text(s) => Source::Text(s.chars().collect()),
            Value::List(items) => Source::Items(items.clone()),
            Value::Frozen(items) => Source::Items(items.to_vec()),
            other => {
                return Err(BuildError::UnsupportedKind { found: other.kind() });
            }
        };
        if source.len() == 0 {
            return Err(BuildError::EmptyInput);
        }
        Ok(Self { source })
    }

    /// Length of the repeated source, in elements (characters for text).
    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_text(&self) -> bool {
        matches!(self.source, Source::Text(_))
    }

    /// First `count` values of the cycle, in a container mirroring the
    /// source kind. This is the text-joining view; the element-wise
    /// [`Producer::take`] view is also available and yields one-character
    /// text values for text sources.
    pub fn take(&self, count: i64) -> Result<Taken, CountError> {
        match &self.source {
            Source::Text(chars) => {
                let taken = materialize::bounded(count, |i| chars[i % chars.len()])?;
                Ok(Taken::Text(taken.into_iter().collect()))
            }
            Source::Items(items) => {
                let taken = materialize::bounded(count, |i| items[i % items.len()].clone())?;
                Ok(Taken::List(taken))
            }
        }
    }
}

impl Source {
    fn len(&self) -> usize {
        match self {
            Self::Text(chars) => chars.len(),
            Self::Items(items) => items.len(),
        }
    }
}

impl Producer for Cycle {
    type Item = Value;

    fn value_at(&self, index: usize) -> Value {
        match &self.source {
            Source::Text(chars) => Value::Text(chars[index % chars.len()].to_string()),
            Source::Items(items) => items[index % items.len()].clone(),
        }
    }
}

impl Taken {
    /// Number of materialized values (characters for text).
    pub fn len(&self) -> usize {
        match self {
            Self::Text(s) => s.chars().count(),
            Self::List(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Text(_) => ValueKind::Text,
            Self::List(_) => ValueKind::List,
        }
    }
}

impl fmt::Display for Taken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => write!(f, "'{s}'"),
            Self::List(items) => {
                f.write_str("[")?;
                crate::value::write_joined(f, items)?;
                f.write_str("]")
            }
        }
    }
}
