use crate::error::CountError;

/// Applies an index rule to `0..count` in order and collects the results
/// into a fresh vector. Every producer's `take` funnels through here.
/// Nothing is cached; repeated calls recompute from index zero.
pub(crate) fn bounded<T>(
    count: i64,
    rule: impl FnMut(usize) -> T,
) -> Result<Vec<T>, CountError> {
    let n = usize::try_from(count).map_err(|_| CountError::Negative(count))?;
    Ok((0..n).map(rule).collect())
}
