use bit_vec::BitVec;
use num_traits::{PrimInt, Unsigned};

use crate::arithmetic::word_width;

/// Returns the bits of `n`, most significant first.
pub fn to_bits<T: PrimInt + Unsigned>(n: T) -> BitVec {
    let width = word_width::<T>() as usize;
    let mut bits = BitVec::from_elem(width, false);
    for i in 0..width {
        let shift = width - 1 - i;
        bits.set(i, ((n >> shift) & T::one()) == T::one());
    }
    bits
}

/// Renders `n` as a fixed-width string of '0' and '1', leading zeros included.
pub fn format_binary<T: PrimInt + Unsigned>(n: T) -> String {
    to_bits(n)
        .iter()
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}
