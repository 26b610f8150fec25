use core::{
    fmt::{self, Debug},
    ops::Deref,
};

use crate::{
    bitset::MemberBits,
    domain::{Class, Member},
    error::Result,
    word::Word,
};

use super::{fmt_series, sealed::FromBitsets, Series, SeriesKind};

/// Mutable series. Every insertion checks that the value belongs to the
/// list's class.
pub struct List<M, T = u64> {
    class: Class<M, T>,
    items: Vec<MemberBits<M, T>>,
}

impl<M, T> FromBitsets<M, T> for List<M, T> {
    fn from_checked(class: Class<M, T>, items: Vec<MemberBits<M, T>>) -> Self {
        Self { class, items }
    }
}

impl<M: Member, T: Word> Series<M, T> for List<M, T> {
    const KIND: SeriesKind = SeriesKind::List;

    fn class(&self) -> &Class<M, T> {
        &self.class
    }

    fn as_slice(&self) -> &[MemberBits<M, T>] {
        &self.items
    }
}

impl<M: Member, T: Word> List<M, T> {
    pub fn push(&mut self, value: MemberBits<M, T>) -> Result<()> {
        self.class.check(&value)?;
        self.items.push(value);
        Ok(())
    }

    /// # Panics
    /// If `index > len`.
    pub fn insert(&mut self, index: usize, value: MemberBits<M, T>) -> Result<()> {
        self.class.check(&value)?;
        self.items.insert(index, value);
        Ok(())
    }

    /// Append every value, or none of them if one belongs to another class.
    pub fn extend(&mut self, values: impl IntoIterator<Item = MemberBits<M, T>>) -> Result<()> {
        let values = values
            .into_iter()
            .map(|b| self.class.check(&b).map(|()| b))
            .collect::<Result<Vec<_>>>()?;
        self.items.extend(values);
        Ok(())
    }

    /// Replace the value at `index`, returning the old one.
    ///
    /// # Panics
    /// If `index` is out of bounds.
    pub fn set(&mut self, index: usize, value: MemberBits<M, T>) -> Result<MemberBits<M, T>> {
        self.class.check(&value)?;
        Ok(core::mem::replace(&mut self.items[index], value))
    }

    /// Sort in place, e.g. by [`MemberBits::shortlex`].
    pub fn sort_by_key<K: Ord>(&mut self, f: impl FnMut(&MemberBits<M, T>) -> K) {
        self.items.sort_by_key(f);
    }

    pub fn pop(&mut self) -> Option<MemberBits<M, T>> {
        self.items.pop()
    }

    /// # Panics
    /// If `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> MemberBits<M, T> {
        self.items.remove(index)
    }

    pub fn truncate(&mut self, len: usize) {
        self.items.truncate(len);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn into_vec(self) -> Vec<MemberBits<M, T>> {
        self.items
    }
}

impl<M, T: Copy> Clone for List<M, T> {
    fn clone(&self) -> Self {
        Self {
            class: self.class.clone(),
            items: self.items.clone(),
        }
    }
}

impl<M, T> Deref for List<M, T> {
    type Target = [MemberBits<M, T>];

    fn deref(&self) -> &[MemberBits<M, T>] {
        &self.items
    }
}

impl<'a, M, T> IntoIterator for &'a List<M, T> {
    type Item = &'a MemberBits<M, T>;
    type IntoIter = core::slice::Iter<'a, MemberBits<M, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<M, T> IntoIterator for List<M, T> {
    type Item = MemberBits<M, T>;
    type IntoIter = std::vec::IntoIter<MemberBits<M, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<M, T: PartialEq> PartialEq for List<M, T> {
    fn eq(&self, other: &Self) -> bool {
        self.class == other.class && self.items == other.items
    }
}

impl<M, T: Eq> Eq for List<M, T> {}

impl<M: Member, T: Word> Debug for List<M, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_series(&self.class, SeriesKind::List, &self.items, f)
    }
}
