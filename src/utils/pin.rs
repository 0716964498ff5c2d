use core::pin::Pin;

/// Returns a pinned mutable reference to the element at `index`, or `None`
/// if the index is out of bounds.
#[inline]
pub(crate) fn get_pin_mut_from_vec<T>(vec: Pin<&mut Vec<T>>, index: usize) -> Option<Pin<&mut T>> {
    // SAFETY: the vec is never resized while it is pinned, so its elements
    // never move. `get_mut` does not move elements either.
    unsafe {
        vec.get_unchecked_mut()
            .get_mut(index)
            .map(|x| Pin::new_unchecked(x))
    }
}

/// Iterate over pinned mutable references to every element of a pinned vec.
pub(crate) fn iter_pin_mut_vec<T>(vec: Pin<&mut Vec<T>>) -> impl Iterator<Item = Pin<&mut T>> {
    // SAFETY: same as `get_pin_mut_from_vec`; this is a field pin projection
    // carried through the vec's slice.
    unsafe { vec.get_unchecked_mut() }
        .iter_mut()
        .map(|t| unsafe { Pin::new_unchecked(t) })
}
