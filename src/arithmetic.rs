use log::trace;
use num_traits::{PrimInt, Unsigned};

/// Number of bits in the unsigned word `T`.
pub fn word_width<T: PrimInt + Unsigned>() -> u32 {
    T::zero().count_zeros()
}

/// Adds two words using only AND, XOR and shift.
///
/// The result wraps at the width of `T`, so it always equals `a.wrapping_add(b)`.
pub fn bitwise_add<T: PrimInt + Unsigned>(a: T, b: T) -> T {
    add_counting_rounds(a, b).0
}

/// Same as [`bitwise_add`], but also returns how many carry rounds were needed.
///
/// The round count is never larger than the width of `T`: after `k` rounds the
/// low `k` bits of the pending carry are zero.
pub fn add_counting_rounds<T: PrimInt + Unsigned>(a: T, b: T) -> (T, u32) {
    let mut sum = a;
    let mut pending = b;
    let mut rounds = 0;

    while pending != T::zero() {
        // The bit shifted past the top of the word is dropped here.
        let carry = (sum & pending) << 1;
        sum = sum ^ pending;
        pending = carry;
        rounds += 1;
    }

    trace!(
        "carry settled after {} of at most {} rounds",
        rounds,
        word_width::<T>()
    );
    (sum, rounds)
}
