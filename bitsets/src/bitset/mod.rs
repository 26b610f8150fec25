//! Subsets of a class's domain, stored as the integer of their members' bits.

use std::collections::HashSet;

use crate::{
    combos::{self, Combinations},
    domain::{Class, Member},
    error::{Error, Result},
    transform,
    word::Word,
};

mod display;
mod from;
mod ops;
mod order;
pub mod set;

/// Subset of a predefined domain as its rank in colexicographical order.
///
/// Bit `i` of the rank is set iff the `i`-th member of the domain is present.
/// Values never change after construction; every operation returns a new one.
pub struct MemberBits<M, T = u64> {
    class: Class<M, T>,
    word: T,
}

impl<M, T: Copy> Clone for MemberBits<M, T> {
    fn clone(&self) -> Self {
        Self {
            class: self.class.clone(),
            word: self.word,
        }
    }
}

impl<M, T> MemberBits<M, T> {
    pub(crate) const fn new(class: Class<M, T>, word: T) -> Self {
        Self { class, word }
    }

    pub fn class(&self) -> &Class<M, T> {
        &self.class
    }
}

impl<M: Member, T: Word> MemberBits<M, T> {
    /// The rank of the subset.
    pub fn int(&self) -> T {
        self.word
    }

    /// Bit positions of the members, ascending.
    pub fn indexes(&self) -> T::Indexes {
        self.word.indexes()
    }

    pub(crate) fn member_refs(&self) -> Members<'_, M, T> {
        Members {
            indexes: self.indexes(),
            members: self.class.members(),
        }
    }

    /// The members, in domain order.
    pub fn members(&self) -> Vec<M> {
        self.member_refs().cloned().collect()
    }

    /// The members, unordered.
    pub fn member_set(&self) -> HashSet<M> {
        self.member_refs().cloned().collect()
    }

    /// Membership of every domain member, in domain order.
    pub fn bools(&self) -> Vec<bool> {
        (0..self.class.len()).map(|i| self.word.contains(i)).collect()
    }

    /// Binary string of the membership, least significant bit first.
    pub fn bits(&self) -> String {
        (0..self.class.len())
            .map(|i| if self.word.contains(i) { '1' } else { '0' })
            .collect()
    }

    /// Number of present members for `true`, of absent ones for `false`.
    pub fn count(&self, value: bool) -> usize {
        let present = self.word.count_ones() as usize;
        match value {
            true => present,
            false => self.class.len() - present,
        }
    }

    /// Whether every member is present.
    pub fn all(&self) -> bool {
        self.word == self.class.supremum_word()
    }

    /// Whether at least one member is present.
    pub fn any(&self) -> bool {
        !self.word.is_zero()
    }

    /// The singleton of every present member.
    pub fn atoms(&self, reverse: bool) -> impl Iterator<Item = Self> + '_ {
        self.singletons(reverse).filter(|a| !(a.word & self.word).is_zero())
    }

    /// The singleton of every absent member.
    pub fn inatoms(&self, reverse: bool) -> impl Iterator<Item = Self> + '_ {
        self.singletons(reverse).filter(|a| (a.word & self.word).is_zero())
    }

    fn singletons(&self, reverse: bool) -> impl Iterator<Item = Self> + '_ {
        let len = self.class.len();
        (0..len)
            .map(move |i| if reverse { len - 1 - i } else { i })
            .map(|i| self.class.wrap(T::singleton(i as u32)))
    }

    /// Walk the subsets between `start` and `self` in shortlex order.
    ///
    /// Without a `start` the walk begins at the empty set and lists the whole
    /// powerset of `self`.
    pub fn powerset(&self, start: Option<&Self>, exclude_start: bool) -> Result<Combinations<Self>> {
        let (start, other) = match start {
            None => (self.class.infimum(), self.atoms(false).collect::<Vec<_>>()),
            Some(start) => {
                self.class.check(start)?;
                if (self.word | start.word) != self.word {
                    return Err(Error::NotASubset {
                        start: format!("{start:?}"),
                        of: format!("{self:?}"),
                    });
                }
                let other = self.class.wrap(self.word & !start.word);
                let other = other.atoms(false).collect::<Vec<_>>();
                (start.clone(), other)
            }
        };
        Ok(combos::shortlex(start, other, exclude_start))
    }

    /// The rank split into little-endian chunks of `C`, without trailing zero chunks.
    pub fn to_chunks<C: Word>(&self) -> impl Iterator<Item = C> {
        transform::chunks::<T, C>(self.word, C::NUM_BITS)
    }

    pub fn into_set(self) -> set::BitSet<M, T> {
        set::BitSet::from(self)
    }
}

impl<M, T: PartialEq> PartialEq for MemberBits<M, T> {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word && self.class == other.class
    }
}

impl<M, T: Eq> Eq for MemberBits<M, T> {}

impl<M, T: core::hash::Hash> core::hash::Hash for MemberBits<M, T> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.word.hash(state);
    }
}

/// Members of a subset, in domain order.
pub struct Members<'a, M, T: Word> {
    indexes: T::Indexes,
    members: &'a [M],
}

impl<'a, M, T: Word> Iterator for Members<'a, M, T> {
    type Item = &'a M;

    fn next(&mut self) -> Option<&'a M> {
        self.indexes.next().and_then(|i| self.members.get(i))
    }
}
