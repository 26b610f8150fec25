//! Ordered subsets of a predetermined finite domain, stored as integers.
//!
//! Declaring a class binds a name to an ordered sequence of members. Subsets
//! of the domain are then values of that class: their rank is the integer
//! whose bit `i` says whether the `i`-th member is present, so comparing
//! ranks orders subsets colexicographically.
//!
//! ```
//! let ints: bitsets::Class<i32> = bitsets::declare("Ints", [1, 2, 3, 4, 5, 6], bitsets::Flavor::MemberBits, false, false).unwrap();
//! let b = ints.from_bits("100011").unwrap();
//! assert_eq!(b.members(), [1, 5, 6]);
//! assert_eq!(b.int(), 49);
//! ```

pub mod bitset;
pub mod combos;
pub mod domain;
mod error;
pub mod integers;
pub mod series;
pub mod transform;
mod word;

pub use bitset::{set::BitSet, set::Operand, MemberBits};
pub use domain::{registry::Registry, token::Token, Base, Class, Domain, Flavor, Member};
pub use error::{Error, Result};
pub use series::{List, ListClass, Series, SeriesClass, SeriesKind, Tuple, TupleClass};
pub use word::Word;

/// Declare a class in the process-wide registry for `M` and `T`.
pub fn declare<M: Member, T: Word>(
    name: &str,
    members: impl Into<Vec<M>>,
    base: impl Into<Base<M, T>>,
    list: bool,
    tuple: bool,
) -> Result<Class<M, T>> {
    Registry::<M, T>::global().declare(name, members, base, list, tuple)
}

/// Declare a container-flavored class with neither series.
pub fn bitset<M: Member, T: Word>(name: &str, members: impl Into<Vec<M>>) -> Result<Class<M, T>> {
    declare(name, members, Flavor::BitSet, false, false)
}

/// Reconstruct a class from its token in the process-wide registry.
pub fn restore<M: Member, T: Word>(token: &Token<M>) -> Result<Class<M, T>> {
    Registry::<M, T>::global().restore(token)
}
