//! Sort keys over subsets of the same class.
//!
//! The natural order of [`MemberBits`] is the rank, which lists subsets
//! colexicographically. The keys below group subsets by cardinality first.

use core::cmp::{Ordering, Reverse};

use crate::{domain::Member, integers, word::Word};

use super::MemberBits;

impl<M: Member, T: Word> MemberBits<M, T> {
    fn reinverted(&self) -> T {
        integers::reinverted(self.word, self.class.len() as u32)
    }

    /// Smaller sets first, lexicographical within the same cardinality.
    pub fn shortlex(&self) -> (usize, T) {
        (self.count(true), self.reinverted())
    }

    /// Larger sets first, lexicographical within the same cardinality.
    pub fn longlex(&self) -> (Reverse<usize>, T) {
        (Reverse(self.count(true)), self.reinverted())
    }

    /// Smaller sets first, colexicographical within the same cardinality.
    pub fn shortcolex(&self) -> (usize, T) {
        (self.count(true), self.word)
    }

    /// Larger sets first, colexicographical within the same cardinality.
    pub fn longcolex(&self) -> (Reverse<usize>, T) {
        (Reverse(self.count(true)), self.word)
    }
}

impl<M, T: Ord> PartialOrd for MemberBits<M, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<M, T: Ord> Ord for MemberBits<M, T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.word
            .cmp(&other.word)
            .then_with(|| self.class.cmp(&other.class))
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

    use crate::{domain::registry::Registry, Class, Flavor};

    use super::MemberBits;

    fn ints() -> Class<i32> {
        Registry::new()
            .declare("Ints", [1, 2, 3, 4, 5, 6], Flavor::MemberBits, false, false)
            .unwrap()
    }

    /// Every subset of at most two members, shuffled.
    fn small_subsets(ints: &Class<i32>) -> Vec<MemberBits<i32>> {
        let mut subsets = ints.lattice().filter(|b| b.count(true) <= 2).collect::<Vec<_>>();
        subsets.shuffle(&mut StdRng::seed_from_u64(11));
        subsets
    }

    fn render(subsets: &[MemberBits<i32>]) -> String {
        subsets.iter().map(|b| b.members().iter().join("")).join(" ")
    }

    #[test]
    fn shortlex_order() {
        let ints = ints();
        let mut subsets = small_subsets(&ints);
        subsets.sort_by_key(MemberBits::shortlex);
        assert_eq!(
            render(&subsets),
            " 1 2 3 4 5 6 12 13 14 15 16 23 24 25 26 34 35 36 45 46 56"
        );
    }

    #[test]
    fn longlex_order() {
        let ints = ints();
        let mut subsets = small_subsets(&ints);
        subsets.sort_by_key(MemberBits::longlex);
        assert_eq!(
            render(&subsets),
            "12 13 14 15 16 23 24 25 26 34 35 36 45 46 56 1 2 3 4 5 6 "
        );
    }

    #[test]
    fn shortcolex_order() {
        let ints = ints();
        let mut subsets = small_subsets(&ints);
        subsets.sort_by_key(MemberBits::shortcolex);
        assert_eq!(
            render(&subsets),
            " 1 2 3 4 5 6 12 13 23 14 24 34 15 25 35 45 16 26 36 46 56"
        );
    }

    #[test]
    fn longcolex_order() {
        let ints = ints();
        let mut subsets = small_subsets(&ints);
        subsets.sort_by_key(MemberBits::longcolex);
        assert_eq!(
            render(&subsets),
            "12 13 23 14 24 34 15 25 35 45 16 26 36 46 56 1 2 3 4 5 6 "
        );
    }

    #[test]
    fn natural_order_is_the_rank() {
        let ints = ints();
        let mut subsets = small_subsets(&ints);
        subsets.sort();
        assert!(subsets.windows(2).all(|w| w[0].int() < w[1].int()));
    }
}
