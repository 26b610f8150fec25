//! Container-flavored subsets with set comparison and set algebra methods.

use core::{
    hash::BuildHasher,
    ops::{BitAnd, BitOr, BitXor, Deref, Not, Sub},
};
use std::collections::{BTreeSet, HashSet};

use crate::{
    domain::{Class, Member},
    error::Result,
    word::Word,
};

use super::{MemberBits, Members};

/// A subset that behaves like an immutable set of members.
///
/// Binary methods accept anything that names members of the same domain
/// (see [`Operand`]). The operators `& | ^ -` and `!` work on two sets of
/// the same class and panic otherwise, like those of [`MemberBits`].
pub struct BitSet<M, T = u64> {
    bits: MemberBits<M, T>,
}

impl<M, T: Copy> Clone for BitSet<M, T> {
    fn clone(&self) -> Self {
        Self {
            bits: self.bits.clone(),
        }
    }
}

impl<M, T> From<MemberBits<M, T>> for BitSet<M, T> {
    fn from(bits: MemberBits<M, T>) -> Self {
        Self { bits }
    }
}

impl<M, T> Deref for BitSet<M, T> {
    type Target = MemberBits<M, T>;

    fn deref(&self) -> &MemberBits<M, T> {
        &self.bits
    }
}

impl<M, T: PartialEq> PartialEq for BitSet<M, T> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<M, T: Eq> Eq for BitSet<M, T> {}

impl<M, T: core::hash::Hash> core::hash::Hash for BitSet<M, T> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

impl<M, T: Ord> PartialOrd for BitSet<M, T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<M, T: Ord> Ord for BitSet<M, T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.bits.cmp(&other.bits)
    }
}

/// Something that denotes a subset of a class's domain.
pub trait Operand<M, T> {
    /// The rank of the subset within `class`.
    fn word(self, class: &Class<M, T>) -> Result<T>;
}

impl<M: Member, T: Word> Operand<M, T> for &MemberBits<M, T> {
    fn word(self, class: &Class<M, T>) -> Result<T> {
        class.check(self).map(|()| self.int())
    }
}

impl<M: Member, T: Word> Operand<M, T> for MemberBits<M, T> {
    fn word(self, class: &Class<M, T>) -> Result<T> {
        (&self).word(class)
    }
}

impl<M: Member, T: Word> Operand<M, T> for &BitSet<M, T> {
    fn word(self, class: &Class<M, T>) -> Result<T> {
        (&self.bits).word(class)
    }
}

impl<M: Member, T: Word> Operand<M, T> for BitSet<M, T> {
    fn word(self, class: &Class<M, T>) -> Result<T> {
        (&self.bits).word(class)
    }
}

impl<M: Member, T: Word> Operand<M, T> for &[M] {
    fn word(self, class: &Class<M, T>) -> Result<T> {
        class.from_members(self).map(|b| b.int())
    }
}

impl<M: Member, T: Word, const K: usize> Operand<M, T> for &[M; K] {
    fn word(self, class: &Class<M, T>) -> Result<T> {
        self.as_slice().word(class)
    }
}

impl<M: Member, T: Word, const K: usize> Operand<M, T> for [M; K] {
    fn word(self, class: &Class<M, T>) -> Result<T> {
        self.as_slice().word(class)
    }
}

impl<M: Member, T: Word> Operand<M, T> for &Vec<M> {
    fn word(self, class: &Class<M, T>) -> Result<T> {
        self.as_slice().word(class)
    }
}

impl<M: Member, T: Word> Operand<M, T> for Vec<M> {
    fn word(self, class: &Class<M, T>) -> Result<T> {
        self.as_slice().word(class)
    }
}

impl<M: Member, T: Word, S: BuildHasher> Operand<M, T> for &HashSet<M, S> {
    fn word(self, class: &Class<M, T>) -> Result<T> {
        class.from_members(self).map(|b| b.int())
    }
}

impl<M: Member + Ord, T: Word> Operand<M, T> for &BTreeSet<M> {
    fn word(self, class: &Class<M, T>) -> Result<T> {
        class.from_members(self).map(|b| b.int())
    }
}

macro_rules! impl_set_op {
    ($op:ident, $f:ident) => {
        impl<M, T: Word> $op<&BitSet<M, T>> for &BitSet<M, T> {
            type Output = BitSet<M, T>;

            fn $f(self, rhs: &BitSet<M, T>) -> BitSet<M, T> {
                BitSet::from((&self.bits).$f(&rhs.bits))
            }
        }

        impl<M, T: Word> $op for BitSet<M, T> {
            type Output = BitSet<M, T>;

            fn $f(self, rhs: BitSet<M, T>) -> BitSet<M, T> {
                BitSet::from(self.bits.$f(&rhs.bits))
            }
        }
    };
}

impl_set_op!(BitAnd, bitand);
impl_set_op!(BitOr, bitor);
impl_set_op!(BitXor, bitxor);
impl_set_op!(Sub, sub);

impl<M: Member, T: Word> Not for &BitSet<M, T> {
    type Output = BitSet<M, T>;

    fn not(self) -> BitSet<M, T> {
        self.complement()
    }
}

impl<M: Member, T: Word> Not for BitSet<M, T> {
    type Output = BitSet<M, T>;

    fn not(self) -> BitSet<M, T> {
        self.complement()
    }
}

impl<M: Member, T: Word> BitSet<M, T> {
    pub fn into_member_bits(self) -> MemberBits<M, T> {
        self.bits
    }

    fn with(&self, word: T) -> Self {
        Self::from(self.bits.class.wrap(word))
    }

    /// Whether `member` is present. Fails for members outside the domain.
    pub fn contains(&self, member: &M) -> Result<bool> {
        self.class()
            .position(member)
            .map(|i| self.bits.word.contains(i))
    }

    pub fn len(&self) -> usize {
        self.count(true)
    }

    pub fn is_empty(&self) -> bool {
        !self.any()
    }

    /// The present members, in domain order.
    pub fn iter(&self) -> Members<'_, M, T> {
        self.member_refs()
    }

    pub fn issubset(&self, other: impl Operand<M, T>) -> Result<bool> {
        let other = other.word(self.class())?;
        Ok(self.bits.word & other == self.bits.word)
    }

    pub fn issuperset(&self, other: impl Operand<M, T>) -> Result<bool> {
        let other = other.word(self.class())?;
        Ok(self.bits.word | other == self.bits.word)
    }

    pub fn isdisjoint(&self, other: impl Operand<M, T>) -> Result<bool> {
        let other = other.word(self.class())?;
        Ok((self.bits.word & other).is_zero())
    }

    pub fn intersection(&self, other: impl Operand<M, T>) -> Result<Self> {
        let other = other.word(self.class())?;
        Ok(self.with(self.bits.word & other))
    }

    pub fn union(&self, other: impl Operand<M, T>) -> Result<Self> {
        let other = other.word(self.class())?;
        Ok(self.with(self.bits.word | other))
    }

    pub fn difference(&self, other: impl Operand<M, T>) -> Result<Self> {
        let other = other.word(self.class())?;
        Ok(self.with(self.bits.word & !other))
    }

    pub fn symmetric_difference(&self, other: impl Operand<M, T>) -> Result<Self> {
        let other = other.word(self.class())?;
        Ok(self.with(self.bits.word ^ other))
    }

    /// The absent members.
    pub fn complement(&self) -> Self {
        Self::from(!&self.bits)
    }
}

impl<'a, M: Member, T: Word> IntoIterator for &'a BitSet<M, T> {
    type Item = &'a M;
    type IntoIter = Members<'a, M, T>;

    fn into_iter(self) -> Members<'a, M, T> {
        self.iter()
    }
}
