use core::{
    fmt::{self, Debug},
    hash::{Hash, Hasher},
    ops::Deref,
};

use crate::{
    bitset::MemberBits,
    domain::{Class, Member},
    word::Word,
};

use super::{fmt_series, sealed::FromBitsets, Series, SeriesKind};

/// Immutable series, hashable like its elements.
pub struct Tuple<M, T = u64> {
    class: Class<M, T>,
    items: Box<[MemberBits<M, T>]>,
}

impl<M, T> FromBitsets<M, T> for Tuple<M, T> {
    fn from_checked(class: Class<M, T>, items: Vec<MemberBits<M, T>>) -> Self {
        Self {
            class,
            items: items.into_boxed_slice(),
        }
    }
}

impl<M: Member, T: Word> Series<M, T> for Tuple<M, T> {
    const KIND: SeriesKind = SeriesKind::Tuple;

    fn class(&self) -> &Class<M, T> {
        &self.class
    }

    fn as_slice(&self) -> &[MemberBits<M, T>] {
        &self.items
    }
}

impl<M, T: Copy> Clone for Tuple<M, T> {
    fn clone(&self) -> Self {
        Self {
            class: self.class.clone(),
            items: self.items.clone(),
        }
    }
}

impl<M, T> Deref for Tuple<M, T> {
    type Target = [MemberBits<M, T>];

    fn deref(&self) -> &[MemberBits<M, T>] {
        &self.items
    }
}

impl<'a, M, T> IntoIterator for &'a Tuple<M, T> {
    type Item = &'a MemberBits<M, T>;
    type IntoIter = core::slice::Iter<'a, MemberBits<M, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<M, T: PartialEq> PartialEq for Tuple<M, T> {
    fn eq(&self, other: &Self) -> bool {
        self.class == other.class && self.items == other.items
    }
}

impl<M, T: Eq> Eq for Tuple<M, T> {}

impl<M, T: Hash> Hash for Tuple<M, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.class.hash(state);
        self.items.hash(state);
    }
}

impl<M: Member, T: Word> Debug for Tuple<M, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_series(&self.class, SeriesKind::Tuple, &self.items, f)
    }
}
