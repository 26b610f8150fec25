//! Bit manipulation for set rank and unrank.
//!
//! The rank of an index set is the integer with exactly those bits set, which
//! orders index sets colexicographically.

use crate::word::Word;

/// Yield the indexes unranking `n` in colexicographical order.
pub fn indexes<T: Word>(n: T) -> T::Indexes {
    n.indexes()
}

/// Rank an index set. Repeated indexes collapse.
///
/// # Panics
/// In debug builds, if an index is at least `T::NUM_BITS`.
pub fn rank<T: Word>(indexes: impl IntoIterator<Item = usize>) -> T {
    indexes.into_iter().fold(T::zero(), |acc, i| {
        debug_assert!(i < T::NUM_BITS as usize, "index {i} does not fit in a {}-bit word", T::NUM_BITS);
        acc | (T::one() << i)
    })
}

/// Integer with the reversed and inverted bits of `n`, assuming bit length `r`.
///
/// Sorting the `k`-subsets of an `r`-element domain by this key lists them in
/// lexicographical order.
pub fn reinverted<T: Word>(mut n: T, r: u32) -> T {
    debug_assert!(r >= 1 && r <= T::NUM_BITS);
    debug_assert!(r == T::NUM_BITS || (n >> r as usize).is_zero());
    let mut result = T::zero();
    let mut bit = T::singleton(r - 1);
    while !n.is_zero() {
        if (n & T::one()).is_zero() {
            result = result | bit;
        }
        bit = bit >> 1;
        n = n >> 1;
    }
    if !bit.is_zero() {
        result = result | bit | (bit - T::one());
    }
    result
}

/// Unrank `n` from `sequence` in colexicographical order.
///
/// Indexes past the end of `sequence` are skipped.
pub fn unrank<T: Word, S>(n: T, sequence: &[S]) -> impl Iterator<Item = &S> + '_ {
    n.indexes().map_while(move |i| sequence.get(i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_eight_integers_unrank_in_colex_order() {
        let unranked = (0u8..8)
            .map(|i| indexes(i).collect::<Vec<_>>())
            .collect::<Vec<_>>();
        let expected: [&[usize]; 8] = [&[], &[0], &[1], &[0, 1], &[2], &[0, 2], &[1, 2], &[0, 1, 2]];
        assert_eq!(unranked, expected);
    }

    #[test]
    fn rank_inverts_indexes_for_every_byte() {
        for n in 0..=u8::MAX {
            assert_eq!(rank::<u8>(indexes(n)), n);
        }
        assert_eq!(rank::<u32>([]), 0);
        assert_eq!(rank::<u32>([3, 0, 3]), 0b1001);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "index 8 does not fit in a 8-bit word")]
    fn rank_rejects_indexes_past_the_word() {
        let _ = rank::<u8>([1, 8]);
    }

    #[test]
    fn reinverted_triples_of_six_match_lexicographical_ranks() {
        let ns = [7u64, 11, 13, 14, 19, 21, 22, 25, 26, 28];
        let reinverted = ns.map(|n| reinverted(n, 6));
        assert_eq!(reinverted, [7, 11, 19, 35, 13, 21, 37, 25, 41, 49]);
    }

    #[test]
    fn reinverted_handles_empty_and_full_width() {
        assert_eq!(reinverted(0u8, 8), u8::MAX);
        assert_eq!(reinverted(u8::MAX, 8), 0);
        assert_eq!(reinverted(0u8, 3), 0b111);
        assert_eq!(reinverted(0b001u8, 3), 0b011);
    }

    #[test]
    fn unrank_letters() {
        let letters = ('a'..='z').collect::<Vec<_>>();
        let words = (0u32..8)
            .map(|i| unrank(i, &letters).collect::<String>())
            .collect::<Vec<_>>();
        assert_eq!(words, ["", "a", "b", "ab", "c", "ac", "bc", "abc"]);
        let abfor = unrank(147491u32, &letters).collect::<String>();
        assert_eq!(abfor, "abfor");
    }
}
