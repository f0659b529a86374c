// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Properties of the lexicographic permutation enumerator.

use jam_template::Permutations;
use proptest::prelude::*;

fn factorial(n: usize) -> usize {
    (1..=n).product()
}

proptest! {
    /// For every size the enumerator yields exactly `size!` permutations,
    /// strictly increasing lexicographically, starting at the identity and
    /// ending at the descending sequence, each a permutation of `0..size`.
    #[test]
    fn enumeration_is_complete_and_ordered(size in 1usize..=6) {
        let all: Vec<Vec<usize>> = Permutations::new(size).unwrap().collect();
        let identity: Vec<usize> = (0..size).collect();

        prop_assert_eq!(all.len(), factorial(size));
        prop_assert_eq!(&all[0], &identity);

        let mut descending = identity.clone();
        descending.reverse();
        prop_assert_eq!(all.last().unwrap(), &descending);

        // Strict lexicographic increase also implies distinctness.
        for pair in all.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }

        for perm in &all {
            let mut sorted = perm.clone();
            sorted.sort_unstable();
            prop_assert_eq!(&sorted, &identity);
        }
    }
}

#[test]
fn test_lending_and_copying_paths_agree() {
    let copied: Vec<Vec<usize>> = Permutations::new(4).unwrap().collect();
    let mut lending = Permutations::new(4).unwrap();
    let mut index = 0;
    while let Some(perm) = lending.advance() {
        assert_eq!(perm, copied[index].as_slice());
        index += 1;
    }
    assert_eq!(index, copied.len());
}

#[test]
fn test_fresh_enumerator_restarts_from_identity() {
    // Re-enumeration requires a new instance; an exhausted one stays done.
    let mut perms = Permutations::new(3).unwrap();
    while perms.advance().is_some() {}
    assert!(perms.advance().is_none());

    let mut fresh = Permutations::new(3).unwrap();
    assert_eq!(fresh.advance().unwrap(), &[0, 1, 2]);
}
