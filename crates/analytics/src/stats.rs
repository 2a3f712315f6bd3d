//! Statistical helpers for dataset aggregations.

/// Calculate the mean of a sequence of values.
///
/// Returns `None` for an empty sequence.
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return None;
    }
    Some(sum / count as f64)
}

/// Fraction `hits / total`, or `None` when `total` is zero.
pub fn rate(hits: usize, total: usize) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some(hits as f64 / total as f64)
}
