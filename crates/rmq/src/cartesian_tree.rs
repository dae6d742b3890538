use crate::util::NONE;

/// Min-heap ordered binary tree whose in-order traversal is the input order.
///
/// Nodes are array positions; links are stored in flat per-node tables with
/// `NONE` marking an absent parent or child.
#[derive(Clone, Debug)]
pub struct CartesianTree {
    root: usize,
    parent: Vec<usize>,
    left: Vec<usize>,
    right: Vec<usize>,
}

impl CartesianTree {
    /// Single left-to-right pass with a stack of indices whose keys are
    /// non-decreasing from bottom to top. Equal keys are not popped, so the
    /// leftmost of several equal minima ends up as their ancestor.
    pub fn new<T: Ord>(values: &[T]) -> Self {
        let n = values.len();
        debug_assert!(n > 0);

        let mut parent = vec![NONE; n];
        let mut left = vec![NONE; n];
        let mut right = vec![NONE; n];
        let mut stack: Vec<usize> = Vec::with_capacity(n);

        for i in 0..n {
            let mut last = NONE;
            while let Some(&top) = stack.last() {
                if values[top] <= values[i] {
                    break;
                }
                last = top;
                stack.pop();
            }

            if let Some(&top) = stack.last() {
                parent[i] = top;
                right[top] = i;
            }
            if last != NONE {
                parent[last] = i;
                left[i] = last;
            }
            stack.push(i);
        }

        Self {
            root: stack[0],
            parent,
            left,
            right,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn root(&self) -> usize {
        self.root
    }

    pub fn parent(&self, node: usize) -> Option<usize> {
        link(self.parent[node])
    }

    pub fn left(&self, node: usize) -> Option<usize> {
        link(self.left[node])
    }

    pub fn right(&self, node: usize) -> Option<usize> {
        link(self.right[node])
    }

    /// Nodes in in-order; equals `0..len()` for a well-formed tree.
    pub fn in_order(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.len());
        let mut stack = Vec::new();
        let mut cur = self.root;
        while cur != NONE || !stack.is_empty() {
            while cur != NONE {
                stack.push(cur);
                cur = self.left[cur];
            }
            if let Some(node) = stack.pop() {
                order.push(node);
                cur = self.right[node];
            }
        }
        order
    }
}

#[inline]
fn link(x: usize) -> Option<usize> {
    (x != NONE).then_some(x)
}
