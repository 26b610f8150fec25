use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Sub, SubAssign};

use crate::{domain::Member, word::Word};

use super::MemberBits;

// Operands must share a class. Mixing classes panics, since the result could
// hold bits past the supremum of the left-hand class.
macro_rules! impl_binary_op {
    ($op:ident, $f:ident, $op_assign:ident, $f_assign:ident, |$a:ident, $b:ident| $word:expr) => {
        impl<M, T: Word> $op<&MemberBits<M, T>> for &MemberBits<M, T> {
            type Output = MemberBits<M, T>;

            fn $f(self, rhs: &MemberBits<M, T>) -> MemberBits<M, T> {
                assert!(self.class == rhs.class, "operands belong to different classes");
                let ($a, $b) = (self.word, rhs.word);
                MemberBits::new(self.class.clone(), $word)
            }
        }

        impl<M, T: Word> $op<&MemberBits<M, T>> for MemberBits<M, T> {
            type Output = MemberBits<M, T>;

            fn $f(mut self, rhs: &MemberBits<M, T>) -> MemberBits<M, T> {
                self.$f_assign(rhs);
                self
            }
        }

        impl<M, T: Word> $op for MemberBits<M, T> {
            type Output = MemberBits<M, T>;

            fn $f(self, rhs: MemberBits<M, T>) -> MemberBits<M, T> {
                self.$f(&rhs)
            }
        }

        impl<M, T: Word> $op_assign<&MemberBits<M, T>> for MemberBits<M, T> {
            fn $f_assign(&mut self, rhs: &MemberBits<M, T>) {
                assert!(self.class == rhs.class, "operands belong to different classes");
                let ($a, $b) = (self.word, rhs.word);
                self.word = $word;
            }
        }

        impl<M, T: Word> $op_assign for MemberBits<M, T> {
            fn $f_assign(&mut self, rhs: MemberBits<M, T>) {
                self.$f_assign(&rhs);
            }
        }
    };
}

impl_binary_op!(BitAnd, bitand, BitAndAssign, bitand_assign, |a, b| a & b);
impl_binary_op!(BitOr, bitor, BitOrAssign, bitor_assign, |a, b| a | b);
impl_binary_op!(BitXor, bitxor, BitXorAssign, bitxor_assign, |a, b| a ^ b);
impl_binary_op!(Sub, sub, SubAssign, sub_assign, |a, b| a & !b);

impl<M: Member, T: Word> Not for &MemberBits<M, T> {
    type Output = MemberBits<M, T>;

    /// Complement within the domain: bits past the last member stay clear.
    fn not(self) -> MemberBits<M, T> {
        MemberBits::new(self.class.clone(), self.word ^ self.class.supremum_word())
    }
}

impl<M: Member, T: Word> Not for MemberBits<M, T> {
    type Output = MemberBits<M, T>;

    fn not(self) -> MemberBits<M, T> {
        !&self
    }
}
