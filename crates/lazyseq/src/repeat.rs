use crate::Producer;

/// Unbounded repetition of a single value.
///
/// Unlike [`Cycle`](crate::Cycle), the value is one element, not a sequence
/// to traverse: there is no kind restriction on construction, and `take`
/// always yields whole-value repeats — a text value comes back as `n`
/// copies of the string, never joined into one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Repeat<T> {
    value: T,
}

impl<T: Clone> Repeat<T> {
    pub fn new(value: T) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T: Clone> Producer for Repeat<T> {
    type Item = T;

    fn value_at(&self, _index: usize) -> T {
        self.value.clone()
    }
}
