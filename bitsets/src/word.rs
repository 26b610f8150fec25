use core::{fmt::Debug, hash::Hash};

use bit_iter::BitIter;
use num_traits::{PrimInt, Unsigned};

/// The fixed-width unsigned integer a class stores its subsets in.
///
/// Bit `i` of a word stands for the `i`-th member of the domain, so a class
/// backed by `T` holds at most `T::NUM_BITS` members.
pub trait Word: PrimInt + Unsigned + Hash + Debug + Default + Send + Sync + 'static {
    const NUM_BITS: u32;
    type Indexes: Iterator<Item = usize> + Clone;

    /// Positions of the set bits, ascending.
    fn indexes(self) -> Self::Indexes;

    /// # Panics
    /// In debug builds, if `n >= Self::NUM_BITS`.
    fn singleton(n: u32) -> Self {
        debug_assert!(n < Self::NUM_BITS);
        Self::one() << n as usize
    }

    /// The word with the low `n` bits set.
    fn range_to(n: u32) -> Self {
        debug_assert!(n <= Self::NUM_BITS);
        if n == Self::NUM_BITS {
            Self::max_value()
        } else {
            Self::singleton(n) - Self::one()
        }
    }

    fn contains(self, n: usize) -> bool {
        !(self & (Self::one() << n)).is_zero()
    }
}

macro_rules! impl_word {
    ($($t:ty),* $(,)?) => {$(
        impl Word for $t {
            const NUM_BITS: u32 = <$t>::BITS;
            type Indexes = BitIter<$t>;

            fn indexes(self) -> Self::Indexes {
                BitIter::from(self)
            }
        }
    )*};
}

impl_word!(u8, u16, u32, u64, u128);
