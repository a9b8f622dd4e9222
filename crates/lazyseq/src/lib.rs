mod arithmetic;
mod cycle;
mod error;
mod materialize;
mod repeat;
mod value;

pub use arithmetic::Arithmetic;
pub use cycle::{Cycle, Taken};
pub use error::{BuildError, CountError};
pub use repeat::Repeat;
pub use value::{Value, ValueKind};

/// A conceptually infinite sequence defined by a pure index rule.
///
/// - `value_at(i)` is total for every index and depends only on `i` and the
///   construction parameters; there is no hidden cursor.
/// - `take(count)` materializes the first `count` values in index order
///   into a fresh vector. Each call recomputes from index zero, so repeated
///   calls on one instance return equal results.
/// - `count < 0` fails with [`CountError::Negative`]; `count == 0` yields
///   an empty vector.
pub trait Producer {
    type Item;

    fn value_at(&self, index: usize) -> Self::Item;

    fn take(&self, count: i64) -> Result<Vec<Self::Item>, CountError>
    where
        Self: Sized,
    {
        materialize::bounded(count, |i| self.value_at(i))
    }

    /// Lazy view of the whole sequence. The iterator never ends; bound it
    /// with [`Iterator::take`] or similar before collecting.
    fn iter(&self) -> Iter<'_, Self>
    where
        Self: Sized,
    {
        Iter {
            producer: self,
            index: 0,
        }
    }
}

/// Infinite iterator over a [`Producer`], walking indices from zero.
#[derive(Clone, Debug)]
pub struct Iter<'a, P> {
    producer: &'a P,
    index: usize,
}

impl<P: Producer> Iterator for Iter<'_, P> {
    type Item = P::Item;

    fn next(&mut self) -> Option<P::Item> {
        let value = self.producer.value_at(self.index);
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
