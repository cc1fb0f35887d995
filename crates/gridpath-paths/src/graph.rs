use std::collections::HashMap;
use std::fmt;

use gridpath_core::Point;
use rand::Rng;

use crate::distance::manhattan;

/// Shortest edge length, for generated and hand-built graphs alike.
pub const MIN_EDGE_LENGTH: i32 = 1;
/// Longest edge length, for generated and hand-built graphs alike.
///
/// Path costs are `i32` sums; the cap keeps them far from overflow.
pub const MAX_EDGE_LENGTH: i32 = 5;

/// An undirected weighted edge between two nodes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub a: Point,
    pub b: Point,
    pub length: i32,
}

/// Errors raised while building a [`Graph`] by hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The same coordinate was listed twice.
    DuplicateNode(Point),
    /// An edge endpoint is not a node of the graph.
    UnknownNode(Point),
    /// An edge would connect a node to itself.
    SelfLoop(Point),
    /// The two nodes are already connected.
    DuplicateEdge(Point, Point),
    /// The length is outside [`MIN_EDGE_LENGTH`]`..=`[`MAX_EDGE_LENGTH`].
    InvalidLength(i32),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateNode(p) => write!(f, "graph: node {p} listed twice"),
            Self::UnknownNode(p) => write!(f, "graph: edge endpoint {p} is not a node"),
            Self::SelfLoop(p) => write!(f, "graph: self-loop at {p}"),
            Self::DuplicateEdge(a, b) => write!(f, "graph: {a} and {b} are already connected"),
            Self::InvalidLength(l) => {
                write!(
                    f,
                    "graph: edge length {l} is outside {MIN_EDGE_LENGTH}..={MAX_EDGE_LENGTH}"
                )
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// An undirected graph whose nodes are grid coordinates.
///
/// Nodes keep the order in which they were added; that order gives every node
/// a stable index. Edges can only be added, never removed or re-weighted.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    width: i32,
    nodes: Vec<Point>,
    index: HashMap<Point, usize>,
    edges: Vec<Edge>,
    // (neighbour index, edge length) per node
    adjacency: Vec<Vec<(usize, i32)>>,
}

impl Graph {
    /// Create an edgeless graph over `nodes`, in the given order.
    ///
    /// The grid side ([`width`](Self::width)) is taken from the largest
    /// coordinate present.
    pub fn new(nodes: impl IntoIterator<Item = Point>) -> Result<Self, GraphError> {
        let nodes: Vec<Point> = nodes.into_iter().collect();
        let mut index = HashMap::with_capacity(nodes.len());
        for (i, &p) in nodes.iter().enumerate() {
            if index.insert(p, i).is_some() {
                return Err(GraphError::DuplicateNode(p));
            }
        }
        let width = nodes.iter().map(|p| p.x.max(p.y) + 1).max().unwrap_or(0);
        Ok(Self {
            width,
            adjacency: vec![Vec::new(); nodes.len()],
            nodes,
            index,
            edges: Vec::new(),
        })
    }

    fn from_unique_nodes(width: i32, nodes: Vec<Point>) -> Self {
        let index = nodes.iter().enumerate().map(|(i, &p)| (p, i)).collect();
        Self {
            width,
            adjacency: vec![Vec::new(); nodes.len()],
            nodes,
            index,
            edges: Vec::new(),
        }
    }

    /// Connect `a` and `b` with an edge of the given length.
    pub fn add_edge(&mut self, a: Point, b: Point, length: i32) -> Result<(), GraphError> {
        let ai = self.index_of(a).ok_or(GraphError::UnknownNode(a))?;
        let bi = self.index_of(b).ok_or(GraphError::UnknownNode(b))?;
        if ai == bi {
            return Err(GraphError::SelfLoop(a));
        }
        if !(MIN_EDGE_LENGTH..=MAX_EDGE_LENGTH).contains(&length) {
            return Err(GraphError::InvalidLength(length));
        }
        if self.adjacency[ai].iter().any(|&(n, _)| n == bi) {
            return Err(GraphError::DuplicateEdge(a, b));
        }
        self.push_edge(ai, bi, length);
        Ok(())
    }

    fn push_edge(&mut self, ai: usize, bi: usize, length: i32) {
        self.edges.push(Edge {
            a: self.nodes[ai],
            b: self.nodes[bi],
            length,
        });
        self.adjacency[ai].push((bi, length));
        self.adjacency[bi].push((ai, length));
    }

    /// Side of the bounding grid.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All nodes, in insertion order.
    #[inline]
    pub fn nodes(&self) -> &[Point] {
        &self.nodes
    }

    /// All edges, in insertion order.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.index.contains_key(&p)
    }

    /// Insertion index of node `p`.
    #[inline]
    pub fn index_of(&self, p: Point) -> Option<usize> {
        self.index.get(&p).copied()
    }

    /// Node at insertion index `idx`.
    #[inline]
    pub fn node(&self, idx: usize) -> Option<Point> {
        self.nodes.get(idx).copied()
    }

    /// Neighbours of `p` with the length of the connecting edge.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = (Point, i32)> + '_ {
        self.index_of(p)
            .map(|i| self.adjacency[i].as_slice())
            .unwrap_or_default()
            .iter()
            .map(|&(n, length)| (self.nodes[n], length))
    }

    #[inline]
    pub(crate) fn adjacent(&self, idx: usize) -> &[(usize, i32)] {
        &self.adjacency[idx]
    }

    /// Length of the edge joining `a` and `b`, if any.
    pub fn edge_length(&self, a: Point, b: Point) -> Option<i32> {
        let bi = self.index_of(b)?;
        self.adjacency[self.index_of(a)?]
            .iter()
            .find(|&&(n, _)| n == bi)
            .map(|&(_, length)| length)
    }

    /// Sum of edge lengths along `path`.
    ///
    /// Returns `None` for an empty path, when two consecutive nodes are not
    /// connected, or when the sum does not fit in an `i32`. A single-node path
    /// costs 0.
    pub fn path_cost(&self, path: &[Point]) -> Option<i32> {
        let first = *path.first()?;
        if !self.contains(first) {
            return None;
        }
        path.windows(2).try_fold(0i32, |cost, w| {
            cost.checked_add(self.edge_length(w[0], w[1])?)
        })
    }

    /// The first generated node, where the demo starts its search.
    pub fn start(&self) -> Option<Point> {
        self.nodes.first().copied()
    }

    /// The node at index `width - 1`, where the demo ends its search.
    ///
    /// The index is clamped into the node list, so hand-built graphs with
    /// fewer nodes than their width still have a goal.
    pub fn goal(&self) -> Option<Point> {
        let last = self.nodes.len().checked_sub(1)?;
        let idx = (self.width.max(1) as usize - 1).min(last);
        self.node(idx)
    }
}

/// Build a random weighted grid graph of side `width`.
///
/// Nodes are the `width` diagonal cells `(i, i)` in ascending order followed
/// by every ordered pair `(a, b)` with `a != b`, in lexicographic order. Every
/// unordered pair of nodes at taxicab distance 1 is joined by exactly one edge
/// whose length is drawn uniformly from
/// [`MIN_EDGE_LENGTH`]`..=`[`MAX_EDGE_LENGTH`].
///
/// A width of 1 gives a single node without edges; a width of 0 or less gives
/// an empty graph.
pub fn generate_graph<R: Rng + ?Sized>(width: i32, rng: &mut R) -> Graph {
    let w = width.max(0);
    let mut nodes = Vec::with_capacity((w as usize) * (w as usize));
    nodes.extend((0..w).map(|i| Point::new(i, i)));
    for a in 0..w {
        nodes.extend((0..w).filter(|&b| b != a).map(|b| Point::new(a, b)));
    }

    // Diagonal cells and distinct pairs never collide.
    let mut graph = Graph::from_unique_nodes(w, nodes);

    // Looking only right and down from each node visits every adjacent pair
    // exactly once.
    for i in 0..graph.nodes.len() {
        let p = graph.nodes[i];
        for q in [p.shift(1, 0), p.shift(0, 1)] {
            if let Some(j) = graph.index_of(q) {
                debug_assert_eq!(manhattan(p, q), 1);
                let length = rng.random_range(MIN_EDGE_LENGTH..=MAX_EDGE_LENGTH);
                graph.push_edge(i, j, length);
            }
        }
    }

    log::debug!(
        "generated graph: width {w}, {} nodes, {} edges",
        graph.len(),
        graph.edges.len()
    );
    graph
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn width_three_example() {
        let g = generate_graph(3, &mut rng());
        let expected: Vec<Point> = [
            (0, 0),
            (1, 1),
            (2, 2),
            (0, 1),
            (0, 2),
            (1, 0),
            (1, 2),
            (2, 0),
            (2, 1),
        ]
        .into_iter()
        .map(Point::from)
        .collect();
        assert_eq!(g.nodes(), expected.as_slice());
        assert!(g.edge_length(Point::new(0, 0), Point::new(0, 1)).is_some());
        assert!(g.edge_length(Point::new(0, 0), Point::new(2, 2)).is_none());
        assert_eq!(g.start(), Some(Point::new(0, 0)));
        assert_eq!(g.goal(), Some(Point::new(2, 2)));
    }

    #[test]
    fn node_count_matches_diagonal_plus_permutations() {
        for w in 1..=12 {
            let g = generate_graph(w, &mut rng());
            let w = w as usize;
            assert_eq!(g.len(), w + w * (w - 1));
            let unique: HashSet<Point> = g.nodes().iter().copied().collect();
            assert_eq!(unique.len(), g.len());
        }
    }

    #[test]
    fn edges_join_adjacent_nodes_once() {
        let g = generate_graph(8, &mut rng());
        // Every horizontal and vertical pair of the 8x8 grid.
        assert_eq!(g.edges().len(), 2 * 8 * 7);

        let mut seen = HashSet::new();
        for e in g.edges() {
            assert_eq!(manhattan(e.a, e.b), 1, "{e:?}");
            assert!((MIN_EDGE_LENGTH..=MAX_EDGE_LENGTH).contains(&e.length));
            assert!(g.contains(e.a) && g.contains(e.b));
            let key = if e.a < e.b { (e.a, e.b) } else { (e.b, e.a) };
            assert!(seen.insert(key), "duplicate edge {e:?}");
        }

        for &p in g.nodes() {
            for &q in g.nodes() {
                let adjacent = manhattan(p, q) == 1;
                assert_eq!(g.edge_length(p, q).is_some(), adjacent, "{p} {q}");
            }
        }
    }

    #[test]
    fn lengths_cover_the_whole_range() {
        let g = generate_graph(20, &mut rng());
        let lengths: HashSet<i32> = g.edges().iter().map(|e| e.length).collect();
        assert_eq!(lengths, (MIN_EDGE_LENGTH..=MAX_EDGE_LENGTH).collect());
    }

    #[test]
    fn same_seed_same_graph() {
        let a = generate_graph(6, &mut rng());
        let b = generate_graph(6, &mut rng());
        assert_eq!(a.edges(), b.edges());
    }

    #[test]
    fn degenerate_widths() {
        let one = generate_graph(1, &mut rng());
        assert_eq!(one.nodes(), &[Point::ZERO]);
        assert!(one.edges().is_empty());
        assert_eq!(one.start(), one.goal());

        let zero = generate_graph(0, &mut rng());
        assert!(zero.is_empty());
        assert_eq!(zero.start(), None);
        assert_eq!(zero.goal(), None);
        assert!(generate_graph(-4, &mut rng()).is_empty());
    }

    #[test]
    fn neighbors_report_edge_lengths() {
        let g = generate_graph(4, &mut rng());
        let corner = Point::new(0, 0);
        let ns: Vec<(Point, i32)> = g.neighbors(corner).collect();
        assert_eq!(ns.len(), 2);
        for (q, length) in ns {
            assert_eq!(g.edge_length(corner, q), Some(length));
            assert_eq!(g.edge_length(q, corner), Some(length));
        }
        assert_eq!(g.neighbors(Point::new(1, 1)).count(), 4);
        assert_eq!(g.neighbors(Point::new(9, 9)).count(), 0);
    }

    #[test]
    fn manual_construction_errors() {
        let (a, b, c) = (Point::new(0, 0), Point::new(1, 0), Point::new(5, 5));
        assert_eq!(Graph::new([a, b, a]).unwrap_err(), GraphError::DuplicateNode(a));

        let mut g = Graph::new([a, b]).unwrap();
        assert_eq!(g.add_edge(a, c, 1), Err(GraphError::UnknownNode(c)));
        assert_eq!(g.add_edge(a, a, 1), Err(GraphError::SelfLoop(a)));
        assert_eq!(g.add_edge(a, b, 0), Err(GraphError::InvalidLength(0)));
        g.add_edge(a, b, 3).unwrap();
        assert_eq!(g.add_edge(b, a, 2), Err(GraphError::DuplicateEdge(b, a)));
        assert_eq!(g.edges().len(), 1);
        assert_eq!(g.width(), 2);
    }

    #[test]
    fn rejects_lengths_above_the_cap() {
        let pts = [Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)];
        let mut g = Graph::new(pts).unwrap();
        let huge = i32::MAX / 2 + 1;
        assert_eq!(
            g.add_edge(pts[0], pts[1], huge),
            Err(GraphError::InvalidLength(huge))
        );
        assert_eq!(
            g.add_edge(pts[1], pts[2], i32::MAX),
            Err(GraphError::InvalidLength(i32::MAX))
        );
        assert_eq!(
            g.add_edge(pts[1], pts[2], MAX_EDGE_LENGTH + 1),
            Err(GraphError::InvalidLength(MAX_EDGE_LENGTH + 1))
        );
        assert!(g.edges().is_empty());

        g.add_edge(pts[0], pts[1], MAX_EDGE_LENGTH).unwrap();
        g.add_edge(pts[1], pts[2], MAX_EDGE_LENGTH).unwrap();
        assert_eq!(g.path_cost(&pts), Some(2 * MAX_EDGE_LENGTH));
    }

    #[test]
    fn error_messages() {
        let e = GraphError::SelfLoop(Point::new(2, 3));
        assert_eq!(e.to_string(), "graph: self-loop at (2, 3)");
        assert_eq!(
            GraphError::InvalidLength(9).to_string(),
            "graph: edge length 9 is outside 1..=5"
        );
    }

    #[test]
    fn path_cost_sums_edges() {
        let pts = [Point::new(0, 0), Point::new(1, 0), Point::new(2, 0)];
        let mut g = Graph::new(pts).unwrap();
        g.add_edge(pts[0], pts[1], 2).unwrap();
        g.add_edge(pts[1], pts[2], 5).unwrap();
        assert_eq!(g.path_cost(&pts), Some(7));
        assert_eq!(g.path_cost(&pts[..1]), Some(0));
        assert_eq!(g.path_cost(&[]), None);
        assert_eq!(g.path_cost(&[pts[0], pts[2]]), None);
        assert_eq!(g.path_cost(&[Point::new(9, 9)]), None);
    }
}
