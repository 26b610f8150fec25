use core::borrow::Borrow;

use crate::{
    domain::{Class, Member},
    error::{Error, Result},
    integers, transform,
    word::Word,
};

use super::{set::BitSet, MemberBits};

impl<M: Member, T: Word> Class<M, T> {
    fn within_bounds(&self, n: T) -> Result<T> {
        let supremum = self.supremum_word();
        (n <= supremum).then_some(n).ok_or_else(|| Error::OutOfRange {
            name: self.name().to_owned(),
            value: format!("{n:?}"),
            supremum: format!("{supremum:?}"),
        })
    }

    /// The subset of rank `n`.
    pub fn from_int(&self, n: T) -> Result<MemberBits<M, T>> {
        self.within_bounds(n).map(|n| self.wrap(n))
    }

    /// The subset of the members at `indexes`.
    pub fn from_indexes(&self, indexes: impl IntoIterator<Item = usize>) -> Result<MemberBits<M, T>> {
        let len = self.len();
        let mut out_of_range = None;
        let n: T = integers::rank(indexes.into_iter().filter(|&i| {
            let inside = i < len;
            if !inside {
                out_of_range.get_or_insert(i);
            }
            inside
        }));
        match out_of_range {
            None => Ok(self.wrap(n)),
            Some(i) => Err(Error::OutOfRange {
                name: self.name().to_owned(),
                value: format!("index {i}"),
                supremum: format!("index {}", len - 1),
            }),
        }
    }

    /// The subset of `members`. Repeated members collapse.
    pub fn from_members<I>(&self, members: I) -> Result<MemberBits<M, T>>
    where
        I: IntoIterator,
        I::Item: Borrow<M>,
    {
        members
            .into_iter()
            .try_fold(T::zero(), |n, member| {
                self.position(member.borrow())
                    .map(|i| n | T::singleton(i as u32))
            })
            .map(|n| self.wrap(n))
    }

    /// The subset of the members paired with a `true`.
    ///
    /// Pairs up as many booleans and members as the shorter side provides.
    pub fn from_bools(&self, bools: impl IntoIterator<Item = bool>) -> Result<MemberBits<M, T>> {
        let indexes = bools
            .into_iter()
            .take(self.len())
            .enumerate()
            .filter_map(|(i, b)| b.then_some(i));
        Ok(self.wrap(integers::rank(indexes)))
    }

    /// The subset of a binary string, least significant bit first.
    pub fn from_bits(&self, bits: &str) -> Result<MemberBits<M, T>> {
        if bits.chars().count() > self.len() {
            return Err(Error::TooManyBits {
                bits: bits.to_owned(),
                len: self.len(),
            });
        }
        bits.chars()
            .enumerate()
            .try_fold(T::zero(), |n, (i, digit)| match digit {
                '0' => Ok(n),
                '1' => Ok(n | T::singleton(i as u32)),
                digit => Err(Error::InvalidDigit {
                    bits: bits.to_owned(),
                    digit,
                }),
            })
            .map(|n| self.wrap(n))
    }

    /// The subset packed into little-endian `chunks`.
    pub fn from_chunks<C: Word>(&self, chunks: impl IntoIterator<Item = C>) -> Result<MemberBits<M, T>> {
        let n = transform::pack::<C, T>(chunks, C::NUM_BITS)?;
        self.from_int(n)
    }

    /// The container subset of `members`.
    pub fn set<I>(&self, members: I) -> Result<BitSet<M, T>>
    where
        I: IntoIterator,
        I::Item: Borrow<M>,
    {
        self.from_members(members).map(BitSet::from)
    }
}
