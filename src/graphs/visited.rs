use std::hash::Hash;

use bit_vec::BitVec;
use rustc_hash::FxHashSet;

/// Marks items as seen during a traversal.
pub trait Visited<V>: Default {
    /// Marks `value`, returning true only the first time it is seen.
    fn visit(&mut self, value: V) -> bool;

    fn is_visited(&self, value: &V) -> bool;
}

impl<V> Visited<V> for FxHashSet<V>
where
    V: Eq + Hash,
{
    #[inline]
    fn visit(&mut self, value: V) -> bool {
        self.insert(value)
    }

    #[inline]
    fn is_visited(&self, value: &V) -> bool {
        self.contains(value)
    }
}

/// Dense visited set over vertex indices, grown on demand.
impl Visited<usize> for BitVec {
    #[inline]
    fn visit(&mut self, value: usize) -> bool {
        let len = self.len();
        if value >= len {
            self.grow(value + 1 - len, false);
        }

        if self[value] {
            false
        } else {
            self.set(value, true);
            true
        }
    }

    #[inline]
    fn is_visited(&self, value: &usize) -> bool {
        self.get(*value).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use proptest::prelude::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use crate::graphs::vertex::Vertex;

    #[test]
    fn hashed_visit_returns_true_only_first_time() {
        let mut visited: FxHashSet<Vertex> = FxHashSet::default();
        let a = Vertex::new(1, "a");

        assert!(!visited.is_visited(&a));
        assert!(visited.visit(a.clone()));
        assert!(visited.is_visited(&a));
        assert!(!visited.visit(Vertex::new(1, "a")));
        assert!(!visited.is_visited(&Vertex::new(1, "b")));
    }

    #[test]
    fn bitvec_grows_on_out_of_range_visit() {
        let mut visited = BitVec::from_elem(4, false);

        assert!(!visited.is_visited(&10));
        assert!(visited.visit(10));
        assert!(visited.len() > 10);
        assert!(visited.is_visited(&10));
        assert!(!visited.visit(10));

        for i in 0..10 {
            assert!(!visited.is_visited(&i));
        }
    }

    proptest! {
        #[test]
        fn prop_bitvec_behaves_like_set(values in proptest::collection::vec(0usize..200, 0..200)) {
            let mut visited = BitVec::default();
            let mut reference = HashSet::new();

            for v in &values {
                prop_assert_eq!(visited.visit(*v), reference.insert(*v), "visit({}) mismatch", v);
                prop_assert!(visited.len() > *v);
                prop_assert_eq!(visited.is_visited(v), reference.contains(v));
            }
        }
    }

    #[test]
    fn random_stress_both_implementations_agree() {
        let mut rng = ChaCha8Rng::seed_from_u64(0x_5649_5349_5445_445F);

        for _case in 0..100 {
            let mut dense = BitVec::from_elem(rng.random_range(0..64), false);
            let mut hashed: FxHashSet<usize> = FxHashSet::default();

            let steps = rng.random_range(0..500);
            for _ in 0..steps {
                let v: usize = rng.random_range(0..256);
                assert_eq!(dense.visit(v), hashed.visit(v), "visit({v}) mismatch");
                assert_eq!(dense.is_visited(&v), hashed.is_visited(&v));
            }
        }
    }
}
