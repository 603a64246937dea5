/*!
Bounded copies into caller-supplied buffers.
*/
use std::cmp;
use crate::encoding::Unit;

/**
Copies as much of `src` as fits into `dst`, then writes a zero terminator.

At most `dst.len() - 1` units are copied, and the terminator is written immediately after them, so `dst` is always terminated and is never written past its end.  Returns the number of units copied, which is less than `src.len()` if the copy was truncated.

An empty `dst` has no room even for the terminator; nothing is written and `0` is returned.
*/
pub fn bounded_copy<U>(src: &[U], dst: &mut [U]) -> usize where U: Unit {
    if dst.is_empty() {
        return 0;
    }

    let copied = cmp::min(dst.len() - 1, src.len());
    dst[..copied].copy_from_slice(&src[..copied]);
    dst[copied] = U::zero();
    copied
}
