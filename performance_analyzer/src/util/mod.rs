//!
//! Utility functions.
//!

pub mod json;

///
/// Computes the arithmetic mean of the values, or `0.0` if there are none.
///
pub fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    if count == 0 {
        0.0
    } else {
        sum / (count as f64)
    }
}

///
/// Computes `numerator / denominator`, or `0.0` if the denominator is zero.
///
pub fn ratio(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        (numerator as f64) / (denominator as f64)
    }
}
