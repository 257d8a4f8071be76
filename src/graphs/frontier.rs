use std::mem;

/// Breadth-first work list processed one layer at a time.
///
/// Every item pushed while expanding layer `n` belongs to layer `n + 1`, and
/// items of a layer are handed out in the order they were pushed. Expanding
/// layers in this way visits items in exactly the order a FIFO queue would.
#[derive(Debug, Default)]
pub struct LayeredFrontier<T> {
    frontier: Vec<T>,
    next: Vec<T>,
    depth: usize,
}

impl<T> LayeredFrontier<T> {
    pub fn new<I: IntoIterator<Item = T>>(initial: I) -> Self {
        Self {
            frontier: initial.into_iter().collect(),
            next: Vec::new(),
            depth: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.frontier.is_empty()
    }

    /// Number of layers expanded so far.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Expands the current layer and makes whatever `expand` pushed the new
    /// current layer.
    ///
    /// Returns the expanded layer, or `None` once the frontier is exhausted.
    pub fn step<F>(&mut self, mut expand: F) -> Option<Vec<T>>
    where
        F: FnMut(&[T], &mut Vec<T>),
    {
        if self.frontier.is_empty() {
            return None;
        }

        let current = mem::take(&mut self.frontier);
        self.next.clear();

        expand(&current, &mut self.next);

        self.frontier = mem::take(&mut self.next);
        self.depth += 1;
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    use proptest::prelude::*;

    #[test]
    fn empty_frontier_yields_nothing() {
        let mut frontier = LayeredFrontier::<u32>::new([]);
        assert!(frontier.is_empty());
        assert!(frontier.step(|_, _| unreachable!()).is_none());
        assert_eq!(frontier.depth(), 0);
    }

    #[test]
    fn layers_advance_until_exhausted() {
        let mut frontier = LayeredFrontier::new([1u32]);
        let mut layers = Vec::new();

        while let Some(layer) = frontier.step(|current, next| {
            for &item in current {
                if item < 8 {
                    next.push(item * 2);
                    next.push(item * 2 + 1);
                }
            }
        }) {
            layers.push(layer);
        }

        assert_eq!(
            layers,
            vec![
                vec![1],
                vec![2, 3],
                vec![4, 5, 6, 7],
                vec![8, 9, 10, 11, 12, 13, 14, 15],
            ]
        );
        assert_eq!(frontier.depth(), 4);
        assert!(frontier.is_empty());
    }

    proptest! {
        // Expanding layer by layer must hand items out in queue order.
        #[test]
        fn prop_layers_match_fifo_order(
            children in proptest::collection::vec(
                proptest::collection::vec(0usize..40, 0..4),
                40,
            )
        ) {
            let mut queue = VecDeque::from([0usize]);
            let mut expected = Vec::new();
            let mut budget = 200;
            while let Some(item) = queue.pop_front() {
                expected.push(item);
                for &child in &children[item] {
                    if budget > 0 {
                        budget -= 1;
                        queue.push_back(child);
                    }
                }
            }

            let mut frontier = LayeredFrontier::new([0usize]);
            let mut order = Vec::new();
            let mut budget = 200;
            while let Some(layer) = frontier.step(|current, next| {
                for &item in current {
                    for &child in &children[item] {
                        if budget > 0 {
                            budget -= 1;
                            next.push(child);
                        }
                    }
                }
            }) {
                order.extend(layer);
            }

            prop_assert_eq!(order, expected);
        }
    }
}
