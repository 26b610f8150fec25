use std::collections::HashSet;

use bitsets::{bitset, declare, integers, restore, BitSet, Class, Error, Flavor, Series, Token};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn ints() -> Class<i32> {
    declare("Ints", [1, 2, 3, 4, 5, 6], Flavor::MemberBits, false, false).unwrap()
}

#[test]
fn ranks_and_bit_strings_are_bijective() {
    let ints = ints();
    for n in 0..64u64 {
        assert_eq!(integers::rank::<u64>(integers::indexes(n)), n);
        let b = ints.from_int(n).unwrap();
        assert_eq!(ints.from_bits(&b.bits()).unwrap(), b);
        assert_eq!(ints.from_members(b.members()).unwrap(), b);
        assert_eq!(ints.from_bools(b.bools()).unwrap(), b);
    }
}

#[test]
fn cardinalities_agree() {
    let ints = ints();
    for b in ints.lattice() {
        let count = b.count(true);
        assert_eq!(count, b.members().len());
        assert_eq!(count, b.atoms(false).count());
        assert_eq!(count + b.count(false), ints.len());
    }
}

#[test]
fn complements_partition_the_domain() {
    let ints = ints();
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..64 {
        let a = ints.from_int(rng.gen_range(0..64)).unwrap();
        let b = ints.from_int(rng.gen_range(0..64)).unwrap();
        assert_eq!(&a | &!&a, ints.supremum());
        assert_eq!(&a & &!&a, ints.infimum());
        assert_eq!(!(&a | &b), &!&a & &!&b);
        assert_eq!(!(&a & &b), &!&a | &!&b);
    }
}

#[test]
fn shortlex_is_total_and_grouped_by_size() {
    let ints = ints();
    let mut lattice = ints.lattice().collect::<Vec<_>>();
    lattice.sort_by_key(|b| b.shortlex());
    let keys = lattice.iter().map(|b| b.shortlex()).collect::<Vec<_>>();
    assert!(keys.windows(2).all(|w| w[0] < w[1]));
    let walked = ints.supremum().powerset(None, false).unwrap().collect::<Vec<_>>();
    assert_eq!(walked, lattice);
}

#[test]
fn powerset_is_complete() {
    let ints = ints();
    let walked = ints.supremum().powerset(None, false).unwrap().collect::<Vec<_>>();
    assert_eq!(walked.len(), 64);
    assert_eq!(walked.iter().collect::<HashSet<_>>().len(), 64);
    let b = ints.from_bits("101101").unwrap();
    let below = b.powerset(None, false).unwrap().collect::<Vec<_>>();
    assert_eq!(below.len(), 16);
    assert!(below.iter().all(|s| (s | &b) == b));
}

#[test]
fn bits_100011_decompose() {
    let b = ints().from_bits("100011").unwrap();
    assert_eq!(b.members(), [1, 5, 6]);
    assert_eq!(b.count(true), 3);
    assert_eq!(b.bits(), "100011");
    assert_eq!(b.int(), 49);
    assert_eq!(format!("{b:?}"), "Ints('100011')");
}

#[test]
fn triples_of_six_come_in_shortlex_groups() {
    let triples = ints()
        .supremum()
        .powerset(None, false)
        .unwrap()
        .filter(|b| b.count(true) == 3)
        .collect::<Vec<_>>();
    assert_eq!(triples.len(), 20);
    assert_eq!(triples.first().unwrap().members(), [1, 2, 3]);
    assert_eq!(triples.last().unwrap().members(), [4, 5, 6]);
}

#[test]
fn powerset_from_a_start_below_111() {
    let three: Class<char> = declare("Three", ['a', 'b', 'c'], Flavor::MemberBits, false, false).unwrap();
    let all = three.from_bits("111").unwrap();
    let start = three.from_bits("1").unwrap();
    let walked = all.powerset(Some(&start), false).unwrap().map(|b| b.bits()).collect::<Vec<_>>();
    assert_eq!(walked, ["100", "110", "101", "111"]);
}

#[test]
fn global_declarations_are_canonical() {
    let a = ints();
    let b = ints();
    assert_eq!(a, b);
    let error = declare::<i32, u64>("Ints", [1, 2, 3, 4, 5, 6], Flavor::BitSet, false, false).unwrap_err();
    assert!(matches!(error, Error::AlreadyDeclared { .. }));
}

#[test]
fn tokens_restore_the_identical_class() {
    let nums: Class<i32> = declare("Nums", [1, 2, 3, 4, 5, 6], Flavor::BitSet, true, true).unwrap();
    let json = nums.token().to_json().unwrap();
    let first: Class<i32> = restore(&Token::from_json(&json).unwrap()).unwrap();
    let second: Class<i32> = restore(&Token::from_json(&json).unwrap()).unwrap();
    assert_eq!(first, nums);
    assert_eq!(second, nums);

    let list = nums.list().unwrap().from_bits(["101000", "110000"]).unwrap();
    assert_eq!(format!("{list:?}"), "NumsList('101000', '110000')");
    let restored = first.list().unwrap().from_ints(list.ints()).unwrap();
    assert_eq!(restored, list);
}

#[test]
fn container_sets_behave_like_sets() {
    let letters: Class<char> = bitset("Letters", ['a', 'b', 'c', 'd']).unwrap();
    let s: BitSet<char> = letters.set(['a', 'c']).unwrap();
    assert_eq!(format!("{s:?}"), "Letters(['a', 'c'])");
    assert!(s.issubset(['a', 'b', 'c']).unwrap());
    assert_eq!(s.union(['d']).unwrap().to_string(), "{'a', 'c', 'd'}");
    assert_eq!(s.complement().members(), ['b', 'd']);
    assert!(matches!(s.contains(&'z'), Err(Error::UnknownMember(_))));
}

#[test]
fn chunks_carry_subsets_across_word_sizes() {
    let wide: Class<u8, u128> =
        declare("Wide", (0..100).collect::<Vec<u8>>(), Flavor::MemberBits, false, false).unwrap();
    let b = wide.from_indexes([0, 33, 64, 99]).unwrap();
    let chunks = b.to_chunks::<u32>().collect::<Vec<_>>();
    assert_eq!(chunks, [1, 2, 1, 8]);
    assert_eq!(wide.from_chunks(chunks).unwrap(), b);
}
