use crate::cartesian_tree::CartesianTree;
use crate::util::NONE;

#[derive(Clone, Copy)]
enum Step {
    Enter,
    AfterLeft,
    AfterRight,
}

/// Depth-first visit sequence of a [`CartesianTree`].
///
/// A node is recorded when it is entered and again after returning from each
/// child, so the tour has `2n - 1` entries and consecutive depths differ by
/// exactly one.
#[derive(Clone, Debug)]
pub struct EulerTour {
    nodes: Vec<usize>,
    depths: Vec<u32>,
    first: Vec<usize>,
}

impl EulerTour {
    pub fn new(tree: &CartesianTree) -> Self {
        let n = tree.len();
        let mut nodes = Vec::with_capacity(2 * n - 1);
        let mut depths = Vec::with_capacity(2 * n - 1);
        let mut first = vec![NONE; n];

        // The depth of a frame is its position on the stack.
        let mut stack: Vec<(usize, Step)> = Vec::with_capacity(n);
        stack.push((tree.root(), Step::Enter));

        while let Some(&(node, step)) = stack.last() {
            let depth = (stack.len() - 1) as u32;
            let top = stack.len() - 1;
            match step {
                Step::Enter => {
                    first[node] = nodes.len();
                    nodes.push(node);
                    depths.push(depth);
                    stack[top].1 = Step::AfterLeft;
                    if let Some(child) = tree.left(node) {
                        stack.push((child, Step::Enter));
                    }
                }
                Step::AfterLeft => {
                    if tree.left(node).is_some() {
                        nodes.push(node);
                        depths.push(depth);
                    }
                    stack[top].1 = Step::AfterRight;
                    if let Some(child) = tree.right(node) {
                        stack.push((child, Step::Enter));
                    }
                }
                Step::AfterRight => {
                    if tree.right(node).is_some() {
                        nodes.push(node);
                        depths.push(depth);
                    }
                    stack.pop();
                }
            }
        }

        debug_assert_eq!(nodes.len(), 2 * n - 1);
        Self {
            nodes,
            depths,
            first,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    pub fn depths(&self) -> &[u32] {
        &self.depths
    }

    /// Tour index at which `node` is first entered.
    pub fn first_occurrence(&self, node: usize) -> usize {
        self.first[node]
    }
}

#[cfg(test)]
mod tests {
    use super::EulerTour;
    use crate::cartesian_tree::CartesianTree;

    #[test]
    fn worked_example_tour() {
        let values = [5_i64, 2, 8, 1, 9, 3, 7, 4];
        let tree = CartesianTree::new(&values);
        let tour = EulerTour::new(&tree);
        assert_eq!(
            tour.nodes(),
            &[3, 1, 0, 1, 2, 1, 3, 5, 4, 5, 7, 6, 7, 5, 3]
        );
        assert_eq!(
            tour.depths(),
            &[0, 1, 2, 1, 2, 1, 0, 1, 2, 1, 2, 3, 2, 1, 0]
        );
        let firsts: Vec<_> = (0..8).map(|v| tour.first_occurrence(v)).collect();
        assert_eq!(firsts, vec![2, 1, 4, 0, 8, 7, 11, 10]);
    }

    #[test]
    fn single_node_tour() {
        let tree = CartesianTree::new(&[1_i64]);
        let tour = EulerTour::new(&tree);
        assert_eq!(tour.nodes(), &[0]);
        assert_eq!(tour.depths(), &[0]);
        assert_eq!(tour.first_occurrence(0), 0);
    }

    #[test]
    fn deep_path_does_not_recurse() {
        let values: Vec<i64> = (0..200_000).collect();
        let tree = CartesianTree::new(&values);
        let tour = EulerTour::new(&tree);
        assert_eq!(tour.len(), 2 * values.len() - 1);
        assert_eq!(tour.depths().iter().copied().max(), Some(199_999));
        assert!(tour.depths().windows(2).all(|w| w[0].abs_diff(w[1]) == 1));
    }
}
