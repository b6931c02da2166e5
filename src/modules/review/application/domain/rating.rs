/// Mean of `scores` rounded half-up, or `None` when there are none.
///
/// Integer arithmetic: `floor(sum / n + 1/2) == (2 * sum + n) div (2 * n)`.
pub fn mean_rating<I>(scores: I) -> Option<i16>
where
    I: IntoIterator<Item = i16>,
{
    let (sum, n) = scores
        .into_iter()
        .fold((0i64, 0i64), |(sum, n), s| (sum + s as i64, n + 1));
    if n == 0 {
        return None;
    }
    Some(((2 * sum + n) / (2 * n)) as i16)
}
