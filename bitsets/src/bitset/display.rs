use core::fmt::{self, Debug, Display};

use itertools::Itertools;

use crate::{domain::Member, word::Word};

use super::{set::BitSet, MemberBits};

/// `Name('100011')`
impl<M: Member, T: Word> Debug for MemberBits<M, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}('{}')", self.class.name(), self.bits())
    }
}

impl<M: Member, T: Word> Display for MemberBits<M, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bits())
    }
}

/// `Name([1, 5, 6])`, or `Name()` when empty.
impl<M: Member, T: Word> Debug for BitSet<M, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.class().name())?;
        if self.any() {
            write!(f, "[{:?}]", self.iter().format(", "))?;
        }
        write!(f, ")")
    }
}

/// `{1, 5, 6}`
impl<M: Member, T: Word> Display for BitSet<M, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{:?}}}", self.iter().format(", "))
    }
}
