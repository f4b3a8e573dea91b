use alloc::vec::Vec;

/// Drop every non-ASCII byte and fold `A`-`Z` to lowercase.
///
/// Retained bytes keep their order; the result is never longer than the input.
#[must_use]
pub fn normalize(raw: &[u8]) -> Vec<u8> {
    let mut bytes = raw.to_vec();
    normalize_in_place(&mut bytes);
    bytes
}

/// In-place variant of [`normalize`] for callers that already own the buffer.
pub fn normalize_in_place(bytes: &mut Vec<u8>) {
    bytes.retain_mut(|b| {
        if b.is_ascii() {
            b.make_ascii_lowercase();
            true
        } else {
            false
        }
    });
}
