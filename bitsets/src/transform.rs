//! Convert between wide words and chunks of narrower words or booleans.
//!
//! Chunks are little-endian: the first chunk holds the lowest bits.

use num_traits::NumCast;

use crate::{
    error::{Error, Result},
    word::Word,
};

/// Reverse the bit order within each chunk.
pub fn chunkreverse<C: Word>(chunks: impl IntoIterator<Item = C>) -> impl Iterator<Item = C> {
    chunks.into_iter().map(C::reverse_bits)
}

fn shr<W: Word>(n: W, r: u32) -> W {
    if r >= W::NUM_BITS {
        W::zero()
    } else {
        n >> r as usize
    }
}

/// Concatenate chunks of bit length `r > 0` into one word.
///
/// A chunk wider than `r` bits overlaps the next one and is added, not or-ed.
pub fn pack<C: Word, W: Word>(chunks: impl IntoIterator<Item = C>, r: u32) -> Result<W> {
    if r == 0 {
        return Err(Error::ZeroChunkWidth { op: "pack" });
    }
    let overflow = || Error::Overflow { bits: W::NUM_BITS };
    let mut n = W::zero();
    let mut shift = 0u32;
    for chunk in chunks {
        if !chunk.is_zero() {
            let chunk: W = NumCast::from(chunk).ok_or_else(overflow)?;
            if shift >= W::NUM_BITS || chunk.leading_zeros() < shift {
                return Err(overflow());
            }
            n = n.checked_add(&(chunk << shift as usize)).ok_or_else(overflow)?;
        }
        shift = shift.saturating_add(r);
    }
    Ok(n)
}

/// Split `n` into chunks of bit length `r > 0`, dropping the trailing zero chunks.
pub fn unpack<W: Word, C: Word>(n: W, r: u32) -> Result<impl Iterator<Item = C>> {
    if r == 0 {
        return Err(Error::ZeroChunkWidth { op: "unpack" });
    }
    if r > C::NUM_BITS {
        return Err(Error::ChunkTooWide { r, bits: C::NUM_BITS });
    }
    Ok(chunks(n, r))
}

/// [`unpack`] for an `r` already known to fit `C`.
pub(crate) fn chunks<W: Word, C: Word>(n: W, r: u32) -> impl Iterator<Item = C> {
    let mask = W::range_to(r.min(W::NUM_BITS));
    core::iter::successors(Some(n), move |&n| Some(shr(n, r)))
        .take_while(|n| !n.is_zero())
        .map_while(move |n| NumCast::from(n & mask))
}

/// Concatenate booleans into chunks, padding the last one with `false`.
pub fn packbools<C: Word>(bools: impl IntoIterator<Item = bool>) -> impl Iterator<Item = C> {
    let mut bools = bools.into_iter().peekable();
    core::iter::from_fn(move || {
        bools.peek()?;
        let chunk = bools
            .by_ref()
            .take(C::NUM_BITS as usize)
            .enumerate()
            .filter(|&(_, b)| b)
            .fold(C::zero(), |chunk, (i, _)| chunk | C::singleton(i as u32));
        Some(chunk)
    })
}

/// Every bit of every chunk as a boolean, lowest bit first.
pub fn unpackbools<C: Word>(chunks: impl IntoIterator<Item = C>) -> impl Iterator<Item = bool> {
    chunks
        .into_iter()
        .flat_map(|chunk| (0..C::NUM_BITS as usize).map(move |i| chunk.contains(i)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunkreverse_bytes_and_halfwords() {
        let bytes = chunkreverse([0b1000_0000u8, 0b1100_0000, 0b0000_0001]).collect::<Vec<_>>();
        assert_eq!(bytes, [1, 3, 128]);
        let halfwords = chunkreverse([0x8000u16, 0xC000, 0x0001]).collect::<Vec<_>>();
        assert_eq!(halfwords, [1, 3, 32768]);
    }

    #[test]
    fn pack_concatenates_little_endian() {
        assert_eq!(pack::<u8, u64>([0, 1, 0, 1, 0, 1], 1), Ok(42));
        assert_eq!(pack::<u8, u64>([0, 1], 8), Ok(256));
        assert_eq!(pack::<u32, u32>([], 32), Ok(0));
        assert_eq!(pack::<u64, u128>([1, 1], 64), Ok((1u128 << 64) + 1));
    }

    #[test]
    fn pack_rejects_a_zero_width() {
        let error = pack::<u8, u64>([0, 1], 0).unwrap_err();
        assert_eq!(error.to_string(), "pack needs r > 0");
    }

    #[test]
    fn pack_reports_overflow() {
        assert_eq!(pack::<u8, u8>([0, 1], 8), Err(Error::Overflow { bits: 8 }));
        assert_eq!(pack::<u16, u8>([256], 16), Err(Error::Overflow { bits: 8 }));
        assert_eq!(pack::<u8, u8>([255, 1], 1), Err(Error::Overflow { bits: 8 }));
        assert_eq!(pack::<u8, u8>([0, 0, 0], 8), Ok(0));
    }

    #[test]
    fn unpack_splits_into_chunks() {
        let bits = unpack::<u64, u8>(42, 1).unwrap().collect::<Vec<_>>();
        assert_eq!(bits, [0, 1, 0, 1, 0, 1]);
        let bytes = unpack::<u64, u8>(256, 8).unwrap().collect::<Vec<_>>();
        assert_eq!(bytes, [0, 1]);
        assert_eq!(unpack::<u64, u8>(0, 8).unwrap().count(), 0);
        let words = unpack::<u128, u64>(u128::MAX, 64).unwrap().collect::<Vec<_>>();
        assert_eq!(words, [u64::MAX, u64::MAX]);
    }

    #[test]
    fn unpack_rejects_bad_widths() {
        let error = unpack::<u64, u8>(2, 0).map(|_| ()).unwrap_err();
        assert_eq!(error.to_string(), "unpack needs r > 0");
        let error = unpack::<u64, u8>(2, 9).map(|_| ()).unwrap_err();
        assert_eq!(error, Error::ChunkTooWide { r: 9, bits: 8 });
    }

    #[test]
    fn packbools_pads_the_last_chunk() {
        let packed = packbools::<u8>([false, true, false, true, false, true]).collect::<Vec<_>>();
        assert_eq!(packed, [42]);
        let packed = packbools::<u8>((0..10).map(|i| i == 9)).collect::<Vec<_>>();
        assert_eq!(packed, [0, 2]);
        assert_eq!(packbools::<u32>([]).count(), 0);
    }

    #[test]
    fn unpackbools_yields_whole_chunks() {
        let bools = unpackbools([42u8]).collect::<Vec<_>>();
        assert_eq!(bools, [false, true, false, true, false, true, false, false]);
        assert_eq!(unpackbools([0u32, 0]).count(), 64);
    }
}
