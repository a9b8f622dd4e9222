use std::fmt;

use crate::error::BuildError;

/// A dynamically typed input value, covering the kinds a duck-typed caller
/// could hand to a producer constructor: scalars, text, ordered sequences,
/// and mappings. Kind checks happen against this closed set at the
/// construction boundary.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Value>),
    /// Immutable ordered sequence (the tuple analogue).
    Frozen(Box<[Value]>),
    Map(Vec<(String, Value)>),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    Int,
    Float,
    Text,
    List,
    Frozen,
    Map,
}

impl ValueKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Text => "text",
            Self::List => "list",
            Self::Frozen => "frozen list",
            Self::Map => "map",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::Text,
            Self::List(_) => ValueKind::List,
            Self::Frozen(_) => ValueKind::Frozen,
            Self::Map(_) => ValueKind::Map,
        }
    }

    /// Coerces this value to an integer, the way the arithmetic producer's
    /// constructor accepts its inputs: ints pass through, finite floats
    /// truncate toward zero, and text parses as a decimal integer after
    /// trimming surrounding whitespace. Everything else fails.
    pub fn coerce_int(&self) -> Result<i64, BuildError> {
        let not_coercible = || BuildError::NotCoercible { found: self.kind() };
        match self {
            Self::Int(v) => Ok(*v),
            Self::Float(v) if v.is_finite() => Ok(*v as i64),
            Self::Text(s) => s.trim().parse().map_err(|_| not_coercible()),
            _ => Err(not_coercible()),
        }
    }

    pub fn frozen(values: Vec<Value>) -> Self {
        Self::Frozen(values.into_boxed_slice())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Self::List(values)
    }
}

pub(crate) fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(s) => write!(f, "'{s}'"),
            Self::List(items) => {
                f.write_str("[")?;
                write_joined(f, items)?;
                f.write_str("]")
            }
            Self::Frozen(items) => {
                f.write_str("(")?;
                write_joined(f, items)?;
                f.write_str(")")
            }
            Self::Map(entries) => {
                f.write_str("{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "'{key}': {value}")?;
                }
                f.write_str("}")
            }
        }
    }
}
