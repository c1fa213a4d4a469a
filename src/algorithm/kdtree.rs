use tracing::{debug, trace};

use crate::algorithm::NearestAlgorithm;
use crate::point::distance;

const NONE: usize = usize::MAX;

#[derive(Clone, Copy, Debug)]
struct KdNode {
    // Index of the splitting point in the indexed point set
    id: usize,
    left: usize, // NONE if absent
    right: usize,
    axis: u8,
}

/// A static k-d tree over a point set.
///
/// The tree is built by sorting each partition along the current axis and
/// splitting at the median element (index `len / 2`), cycling the axis with
/// depth. Nodes live in a single arena and refer to their children by index,
/// so every node has exactly one parent and the tree has no cycles.
///
/// Nodes only store the index of their point; queries must be given the same
/// points the tree was built from. A query with a slice of a different length
/// finds nothing.
#[derive(Clone, Debug, Default)]
pub struct AlgorithmKdTree<const D: usize> {
    nodes: Vec<KdNode>,
    root: Option<usize>,
    depth: usize,
}

impl<const D: usize> AlgorithmKdTree<D> {
    pub fn new() -> Self {
        AlgorithmKdTree {
            nodes: Vec::new(),
            root: None,
            depth: 0,
        }
    }

    /// Builds a tree over `points`.
    pub fn build(points: &[[f64; D]]) -> Self {
        let mut tree = Self::new();
        tree.set_points(points);
        tree
    }

    /// Number of nodes, equal to the number of indexed points.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of levels, zero for an empty tree.
    pub fn depth(&self) -> usize {
        self.depth
    }

    fn build_recursive(&mut self, indices: &mut [usize], axis: usize, level: usize, points: &[[f64; D]]) -> usize {
        if indices.is_empty() {
            return NONE;
        }
        self.depth = self.depth.max(level);

        // Stable sort, ties keep their previous relative order
        indices.sort_by(|&a, &b| points[a][axis].total_cmp(&points[b][axis]));

        let mid = indices.len() / 2;
        let node_idx = self.nodes.len();
        self.nodes.push(KdNode {
            id: indices[mid],
            left: NONE,
            right: NONE,
            axis: axis as u8,
        });

        let next_axis = (axis + 1) % D;
        let (before, rest) = indices.split_at_mut(mid);
        let after = &mut rest[1..];

        let left = self.build_recursive(before, next_axis, level + 1, points);
        let right = self.build_recursive(after, next_axis, level + 1, points);

        let node = &mut self.nodes[node_idx];
        node.left = left;
        node.right = right;
        node_idx
    }
}

impl<const D: usize> NearestAlgorithm<D> for AlgorithmKdTree<D> {
    fn set_points(&mut self, points: &[[f64; D]]) {
        self.nodes.clear();
        self.root = None;
        self.depth = 0;

        if points.is_empty() || D == 0 {
            return;
        }
        self.nodes.reserve(points.len());
        let mut indices: Vec<usize> = (0..points.len()).collect();
        self.root = Some(self.build_recursive(&mut indices, 0, 1, points));

        debug!(points = points.len(), depth = self.depth, "built k-d tree");
    }

    fn nearest(&self, points: &[[f64; D]], query: &[f64; D]) -> Option<(usize, f64)> {
        let (best, visited) = self.search(points, query);
        trace!(visited, nodes = self.nodes.len(), "k-d tree query");
        best
    }
}

impl<const D: usize> AlgorithmKdTree<D> {
    /// Pruned depth-first search. Also returns the number of nodes whose
    /// point was compared against the query.
    fn search(&self, points: &[[f64; D]], query: &[f64; D]) -> (Option<(usize, f64)>, usize) {
        let Some(root) = self.root else {
            return (None, 0);
        };
        if points.len() != self.nodes.len() {
            return (None, 0);
        }

        let mut best: Option<usize> = None;
        let mut best_dist = f64::INFINITY;
        let mut visited = 0usize;

        // Each entry carries the distance from the query to the subtree's
        // half-space along the parent's axis; no point below it can be closer.
        let mut stack: Vec<(usize, f64)> = Vec::with_capacity(2 * self.depth + 1);
        stack.push((root, 0.0));

        while let Some((node_idx, gap)) = stack.pop() {
            // best_dist may have shrunk since this subtree was pushed
            if gap > best_dist {
                continue;
            }
            visited += 1;

            let node = &self.nodes[node_idx];
            let point = &points[node.id];
            let dist = distance(query, point);
            // A NaN distance never wins; an infinite one only until anything closer shows up
            if dist < best_dist || (best.is_none() && !dist.is_nan()) {
                best = Some(node.id);
                best_dist = dist;
            }

            let axis = node.axis as usize;
            let diff = query[axis] - point[axis];

            // Left holds coordinates <= split: reachable if query[axis] <= split + best_dist.
            // Right holds coordinates >= split: reachable if query[axis] >= split - best_dist.
            let left = (node.left, diff.max(0.0));
            let right = (node.right, (-diff).max(0.0));

            // Push the far side first so the near side is searched first
            let (near, far) = if diff <= 0.0 { (left, right) } else { (right, left) };
            for (child, child_gap) in [far, near] {
                if child != NONE && child_gap <= best_dist {
                    stack.push((child, child_gap));
                }
            }
        }

        (best.map(|id| (id, best_dist)), visited)
    }
}
