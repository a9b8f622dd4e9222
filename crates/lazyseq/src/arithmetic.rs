use crate::Producer;
use crate::error::BuildError;
use crate::value::Value;

/// The progression `start, start + step, start + 2 * step, ...` without
/// end. `Arithmetic::new(2, 4)` produces `2, 6, 10, 14, ...`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Arithmetic {
    start: i64,
    step: i64,
}

impl Arithmetic {
    pub fn new(start: i64, step: i64) -> Self {
        Self { start, step }
    }

    /// Builds the progression from dynamically typed inputs, coercing both
    /// to integers at the boundary.
    pub fn from_values(start: &Value, step: &Value) -> Result<Self, BuildError> {
        Ok(Self::new(start.coerce_int()?, step.coerce_int()?))
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn step(&self) -> i64 {
        self.step
    }
}

impl Producer for Arithmetic {
    type Item = i64;

    fn value_at(&self, index: usize) -> i64 {
        self.start + (index as i64) * self.step
    }
}
