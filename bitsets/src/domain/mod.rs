//! Domains and the classes bound to them.
//!
//! A [`Class`] is a shared handle on an immutable [`Domain`]: the ordered
//! members, their bit positions and the identity the class was registered
//! under. Every value carries the class it belongs to.

use core::{
    borrow::Borrow,
    fmt::{self, Debug},
    hash::{Hash, Hasher},
    str::FromStr,
};
use std::{
    collections::{hash_map::Entry, HashMap},
    sync::Arc,
};

use crate::{
    bitset::MemberBits,
    error::{Error, Result},
    series::{ListClass, SeriesClass, SeriesKind, TupleClass},
    word::Word,
};

mod display;
pub mod registry;
pub mod token;

/// Bound on the members of a domain.
pub trait Member: Clone + Eq + Hash + Debug + Send + Sync + 'static {}

impl<M: Clone + Eq + Hash + Debug + Send + Sync + 'static> Member for M {}

/// Which value flavor a class was declared with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flavor {
    /// Integer-like subsets: [`MemberBits`].
    MemberBits,
    /// Container-like subsets: [`crate::BitSet`].
    BitSet,
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Flavor::MemberBits => write!(f, "MemberBits"),
            Flavor::BitSet => write!(f, "BitSet"),
        }
    }
}

impl FromStr for Flavor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "MemberBits" => Ok(Flavor::MemberBits),
            "BitSet" => Ok(Flavor::BitSet),
            _ => Err(Error::InvalidBase(s.to_owned())),
        }
    }
}

/// What a new class derives from: a fresh flavor, or (erroneously) a class
/// that is already bound to a domain.
#[derive(Debug)]
pub enum Base<M, T> {
    Flavor(Flavor),
    Bound(Class<M, T>),
}

impl<M, T> From<Flavor> for Base<M, T> {
    fn from(flavor: Flavor) -> Self {
        Base::Flavor(flavor)
    }
}

impl<M, T> From<Class<M, T>> for Base<M, T> {
    fn from(class: Class<M, T>) -> Self {
        Base::Bound(class)
    }
}

impl<M, T> From<&Class<M, T>> for Base<M, T> {
    fn from(class: &Class<M, T>) -> Self {
        Base::Bound(class.clone())
    }
}

/// The fixed, ordered members of a class and everything derived from them.
pub struct Domain<M, T> {
    name: String,
    members: Vec<M>,
    id: i64,
    flavor: Flavor,
    list: bool,
    tuple: bool,
    positions: HashMap<M, usize>,
    supremum: T,
}

impl<M: Member, T: Word> Domain<M, T> {
    pub(crate) fn new(
        name: String,
        members: Vec<M>,
        id: i64,
        flavor: Flavor,
        list: bool,
        tuple: bool,
    ) -> Result<Self> {
        if name.is_empty() {
            return Err(Error::EmptyName);
        }
        if members.is_empty() {
            return Err(Error::NoMembers { name });
        }
        if members.len() > T::NUM_BITS as usize {
            return Err(Error::TooManyMembers {
                name,
                len: members.len(),
                max: T::NUM_BITS,
            });
        }
        let mut positions = HashMap::with_capacity(members.len());
        let mut duplicates = vec![];
        for (i, member) in members.iter().enumerate() {
            match positions.entry(member.clone()) {
                Entry::Occupied(_) => duplicates.push(member),
                Entry::Vacant(entry) => {
                    entry.insert(i);
                }
            }
        }
        if !duplicates.is_empty() {
            let duplicates = format!("{duplicates:?}");
            return Err(Error::DuplicateMembers { name, duplicates });
        }
        let supremum = T::range_to(members.len() as u32);
        Ok(Self {
            name,
            members,
            id,
            flavor,
            list,
            tuple,
            positions,
            supremum,
        })
    }
}

/// A canonical bitset class: a domain plus its identity.
///
/// Classes compare equal only when they are the same registered object.
pub struct Class<M, T = u64> {
    domain: Arc<Domain<M, T>>,
}

impl<M, T> Clone for Class<M, T> {
    fn clone(&self) -> Self {
        Self {
            domain: Arc::clone(&self.domain),
        }
    }
}

impl<M, T> PartialEq for Class<M, T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.domain, &other.domain)
    }
}

impl<M, T> Eq for Class<M, T> {}

impl<M, T> Hash for Class<M, T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.domain.id.hash(state);
        self.domain.name.hash(state);
    }
}

impl<M, T> PartialOrd for Class<M, T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<M, T> Ord for Class<M, T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        Arc::as_ptr(&self.domain).cmp(&Arc::as_ptr(&other.domain))
    }
}

impl<M, T> Class<M, T> {
    pub(crate) fn new(domain: Domain<M, T>) -> Self {
        Self {
            domain: Arc::new(domain),
        }
    }

    pub fn name(&self) -> &str {
        &self.domain.name
    }

    pub fn members(&self) -> &[M] {
        &self.domain.members
    }

    /// The identity token distinguishing classes with equal name and members.
    pub fn id(&self) -> i64 {
        self.domain.id
    }

    pub fn flavor(&self) -> Flavor {
        self.domain.flavor
    }

    /// Number of members, which is also the bit length of every value.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.domain.members.len()
    }

    pub fn has_series(&self, kind: SeriesKind) -> bool {
        match kind {
            SeriesKind::List => self.domain.list,
            SeriesKind::Tuple => self.domain.tuple,
        }
    }

    pub(crate) fn wrap(&self, word: T) -> MemberBits<M, T> {
        MemberBits::new(self.clone(), word)
    }
}

impl<M: Member, T: Word> Class<M, T> {
    /// Bit position of `member`.
    pub fn position(&self, member: &M) -> Result<usize> {
        self.domain
            .positions
            .get(member)
            .copied()
            .ok_or_else(|| Error::UnknownMember(format!("{member:?}")))
    }

    /// The singleton subset of `member`.
    pub fn atom(&self, member: &M) -> Result<MemberBits<M, T>> {
        self.position(member)
            .map(|i| self.wrap(T::singleton(i as u32)))
    }

    /// All singletons in domain order.
    pub fn atoms(&self) -> impl DoubleEndedIterator<Item = MemberBits<M, T>> + ExactSizeIterator + '_ {
        (0..self.len()).map(|i| self.wrap(T::singleton(i as u32)))
    }

    /// The empty subset.
    pub fn infimum(&self) -> MemberBits<M, T> {
        self.wrap(T::zero())
    }

    /// The subset of all members.
    pub fn supremum(&self) -> MemberBits<M, T> {
        self.wrap(self.domain.supremum)
    }

    pub(crate) fn supremum_word(&self) -> T {
        self.domain.supremum
    }

    /// Every subset of the domain, from `infimum` to `supremum` in integer order.
    pub fn lattice(&self) -> impl Iterator<Item = MemberBits<M, T>> {
        let class = self.clone();
        let supremum = self.domain.supremum;
        core::iter::successors(Some(T::zero()), move |&n| (n < supremum).then(|| n + T::one()))
            .map(move |n| class.wrap(n))
    }

    pub(crate) fn check(&self, value: &MemberBits<M, T>) -> Result<()> {
        if value.class() == self {
            Ok(())
        } else {
            Err(Error::ForeignDomain {
                value: format!("{value:?}"),
                class: format!("{self:?}"),
            })
        }
    }

    /// Member singletons of `value`.
    pub fn atomic<'a>(&self, value: &'a MemberBits<M, T>) -> Result<impl Iterator<Item = MemberBits<M, T>> + 'a> {
        self.check(value)?;
        Ok(value.atoms(false))
    }

    /// Complement singletons of `value`.
    pub fn inatomic<'a>(&self, value: &'a MemberBits<M, T>) -> Result<impl Iterator<Item = MemberBits<M, T>> + 'a> {
        self.check(value)?;
        Ok(value.inatoms(false))
    }

    /// Generalized intersection, `supremum` for no values.
    pub fn reduce_and<I>(&self, values: I) -> Result<MemberBits<M, T>>
    where
        I: IntoIterator,
        I::Item: Borrow<MemberBits<M, T>>,
    {
        values
            .into_iter()
            .try_fold(self.domain.supremum, |acc, value| {
                let value = value.borrow();
                self.check(value).map(|()| acc & value.int())
            })
            .map(|word| self.wrap(word))
    }

    /// Generalized union, `infimum` for no values.
    pub fn reduce_or<I>(&self, values: I) -> Result<MemberBits<M, T>>
    where
        I: IntoIterator,
        I::Item: Borrow<MemberBits<M, T>>,
    {
        values
            .into_iter()
            .try_fold(T::zero(), |acc, value| {
                let value = value.borrow();
                self.check(value).map(|()| acc | value.int())
            })
            .map(|word| self.wrap(word))
    }

    /// The mutable series class paired with this class.
    pub fn list(&self) -> Result<ListClass<M, T>> {
        self.series()
    }

    /// The immutable series class paired with this class.
    pub fn tuple(&self) -> Result<TupleClass<M, T>> {
        self.series()
    }

    fn series<S: crate::series::Series<M, T>>(&self) -> Result<SeriesClass<M, T, S>> {
        if self.has_series(S::KIND) {
            Ok(SeriesClass::new(self.clone()))
        } else {
            Err(Error::NoSeries {
                class: format!("{self:?}"),
                kind: S::KIND.as_str(),
            })
        }
    }
}
