//! # Length Normalization

/// Force `items` to exactly `len` entries.
///
/// Longer inputs keep their prefix; whatever falls past `len` is dropped,
/// including a trailing end marker. Shorter inputs are right-padded with
/// clones of `pad`.
pub fn fit_to_length<S: Clone>(
    mut items: Vec<S>,
    len: usize,
    pad: &S,
) -> Vec<S> {
    if items.len() > len {
        items.truncate(len);
    } else {
        items.resize(len, pad.clone());
    }
    items
}
