//! Ordered collections of subsets sharing one class.
//!
//! A class declared with `list` or `tuple` pairs up with a [`SeriesClass`]
//! building [`List`]s or [`Tuple`]s of its values.

use core::{
    borrow::Borrow,
    fmt::{self, Debug},
    marker::PhantomData,
    str::FromStr,
};
use std::collections::HashSet;

use crate::{
    bitset::MemberBits,
    domain::{token::Token, Class, Member},
    error::{Error, Result},
    word::Word,
};

mod list;
mod tuple;

pub use list::List;
pub use tuple::Tuple;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    List,
    Tuple,
}

impl SeriesKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            SeriesKind::List => "List",
            SeriesKind::Tuple => "Tuple",
        }
    }
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeriesKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "List" => Ok(SeriesKind::List),
            "Tuple" => Ok(SeriesKind::Tuple),
            _ => Err(Error::InvalidSeries(s.to_owned())),
        }
    }
}

mod sealed {
    use crate::{bitset::MemberBits, domain::Class};

    pub trait FromBitsets<M, T> {
        /// Assemble a series from values already checked against `class`.
        fn from_checked(class: Class<M, T>, items: Vec<MemberBits<M, T>>) -> Self;
    }
}

/// Read access shared by [`List`] and [`Tuple`].
pub trait Series<M: Member, T: Word>: sealed::FromBitsets<M, T> + Sized {
    const KIND: SeriesKind;

    fn class(&self) -> &Class<M, T>;

    fn as_slice(&self) -> &[MemberBits<M, T>];

    fn members(&self) -> Vec<Vec<M>> {
        self.as_slice().iter().map(MemberBits::members).collect()
    }

    fn member_sets(&self) -> Vec<HashSet<M>> {
        self.as_slice().iter().map(MemberBits::member_set).collect()
    }

    fn bools(&self) -> Vec<Vec<bool>> {
        self.as_slice().iter().map(MemberBits::bools).collect()
    }

    fn bits(&self) -> Vec<String> {
        self.as_slice().iter().map(MemberBits::bits).collect()
    }

    fn ints(&self) -> Vec<T> {
        self.as_slice().iter().map(MemberBits::int).collect()
    }

    fn index_sets(&self) -> Vec<Vec<usize>> {
        self.as_slice().iter().map(|b| b.indexes().collect()).collect()
    }

    /// Intersection of every element, the supremum when empty.
    fn reduce_and(&self) -> MemberBits<M, T> {
        let class = self.class();
        let word = self
            .as_slice()
            .iter()
            .fold(class.supremum_word(), |acc, b| acc & b.int());
        class.wrap(word)
    }

    /// Union of every element, the infimum when empty.
    fn reduce_or(&self) -> MemberBits<M, T> {
        let word = self.as_slice().iter().fold(T::zero(), |acc, b| acc | b.int());
        self.class().wrap(word)
    }

    #[cfg(feature = "rayon")]
    fn par_reduce_and(&self) -> MemberBits<M, T> {
        use rayon::prelude::*;

        let class = self.class();
        let supremum = class.supremum_word();
        let word = self
            .as_slice()
            .par_iter()
            .map(MemberBits::int)
            .reduce(|| supremum, |a, b| a & b);
        class.wrap(word)
    }

    #[cfg(feature = "rayon")]
    fn par_reduce_or(&self) -> MemberBits<M, T> {
        use rayon::prelude::*;

        let word = self
            .as_slice()
            .par_iter()
            .map(MemberBits::int)
            .reduce(T::zero, |a, b| a | b);
        self.class().wrap(word)
    }
}

/// The series class paired with a bitset class, building series of kind `S`.
pub struct SeriesClass<M, T, S> {
    class: Class<M, T>,
    series: PhantomData<fn() -> S>,
}

pub type ListClass<M, T = u64> = SeriesClass<M, T, List<M, T>>;
pub type TupleClass<M, T = u64> = SeriesClass<M, T, Tuple<M, T>>;

impl<M, T, S> Clone for SeriesClass<M, T, S> {
    fn clone(&self) -> Self {
        Self::new(self.class.clone())
    }
}

impl<M, T, S> PartialEq for SeriesClass<M, T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.class == other.class
    }
}

impl<M, T, S> Eq for SeriesClass<M, T, S> {}

impl<M, T, S> SeriesClass<M, T, S> {
    pub(crate) fn new(class: Class<M, T>) -> Self {
        Self {
            class,
            series: PhantomData,
        }
    }

    /// The class of the elements.
    pub fn bitset_class(&self) -> &Class<M, T> {
        &self.class
    }
}

impl<M: Member, T: Word, S: Series<M, T>> Debug for SeriesClass<M, T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match S::KIND {
            SeriesKind::List => write!(f, "bitset_list")?,
            SeriesKind::Tuple => write!(f, "bitset_tuple")?,
        }
        self.class.fmt_arguments(f)
    }
}

impl<M: Member, T: Word, S: Series<M, T>> SeriesClass<M, T, S> {
    pub fn kind(&self) -> SeriesKind {
        S::KIND
    }

    /// `NumsList` for the list class of `Nums`.
    pub fn name(&self) -> String {
        format!("{}{}", self.class.name(), S::KIND)
    }

    /// Series classes share the token of their element class.
    pub fn token(&self) -> Token<M> {
        self.class.token()
    }

    pub fn from_bitsets(&self, bitsets: impl IntoIterator<Item = MemberBits<M, T>>) -> Result<S> {
        let items = bitsets
            .into_iter()
            .map(|b| self.class.check(&b).map(|()| b))
            .collect::<Result<Vec<_>>>()?;
        Ok(S::from_checked(self.class.clone(), items))
    }

    pub fn from_members<I>(&self, members: I) -> Result<S>
    where
        I: IntoIterator,
        I::Item: IntoIterator,
        <I::Item as IntoIterator>::Item: Borrow<M>,
    {
        self.collect(members.into_iter().map(|m| self.class.from_members(m)))
    }

    pub fn from_bools<I>(&self, bools: I) -> Result<S>
    where
        I: IntoIterator,
        I::Item: IntoIterator<Item = bool>,
    {
        self.collect(bools.into_iter().map(|b| self.class.from_bools(b)))
    }

    pub fn from_bits<I>(&self, bits: I) -> Result<S>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.collect(bits.into_iter().map(|b| self.class.from_bits(b.as_ref())))
    }

    pub fn from_ints(&self, ints: impl IntoIterator<Item = T>) -> Result<S> {
        self.collect(ints.into_iter().map(|n| self.class.from_int(n)))
    }

    fn collect(&self, items: impl Iterator<Item = Result<MemberBits<M, T>>>) -> Result<S> {
        let items = items.collect::<Result<Vec<_>>>()?;
        Ok(S::from_checked(self.class.clone(), items))
    }
}

/// `NumsList('101000', '110000')`
pub(crate) fn fmt_series<M: Member, T: Word>(
    class: &Class<M, T>,
    kind: SeriesKind,
    items: &[MemberBits<M, T>],
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    write!(f, "{}{kind}(", class.name())?;
    for (i, b) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "'{}'", b.bits())?;
    }
    write!(f, ")")
}
