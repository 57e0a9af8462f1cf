//! Breadth-first traversal over any [`Graph`].

use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use super::{Graph, GridError};

/// Visited nodes of one search, each mapped to the node it was reached from.
///
/// The start node maps to `None`. Following predecessors from any visited
/// node back to the start gives a fewest-edges path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameFrom<N: Hash + Eq> {
    start: N,
    predecessors: HashMap<N, Option<N>>,
}

impl<N: Hash + Eq + Clone> CameFrom<N> {
    pub fn start(&self) -> &N {
        &self.start
    }

    /// Number of visited nodes, start included.
    pub fn len(&self) -> usize {
        self.predecessors.len()
    }

    /// Always false; the start is always visited.
    pub fn is_empty(&self) -> bool {
        self.predecessors.is_empty()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.predecessors.contains_key(node)
    }

    /// Node that `node` was discovered from; `None` for the start and for
    /// unvisited nodes.
    pub fn predecessor(&self, node: &N) -> Option<&N> {
        self.predecessors.get(node)?.as_ref()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.predecessors.keys()
    }

    /// Path from the start to `target`, both included, or `None` if
    /// `target` was never visited.
    pub fn path_to(&self, target: &N) -> Option<Vec<N>> {
        let mut path = vec![target.clone()];
        let mut current = self.predecessors.get(target)?;
        while let Some(previous) = current {
            path.push(previous.clone());
            current = &self.predecessors[previous];
        }
        path.reverse();
        Some(path)
    }

    pub fn into_inner(self) -> HashMap<N, Option<N>> {
        self.predecessors
    }
}

/// Breadth-first search from `start`.
///
/// Neighbours are admitted when unvisited and accepted by `accepts`. The
/// search stops when the frontier empties or when `goal` is dequeued; the
/// goal itself is never expanded.
///
/// # Example
///
/// ```rust
/// use aoc_solutions::utils::grid::{breadth_first_search, Connectivity, GridSize, SquareGrid, Tile};
///
/// let size = GridSize::new(3, 1).unwrap();
/// let grid = SquareGrid::new(size, Connectivity::Orthogonal);
/// let visited = breadth_first_search(&grid, Tile::new(0, 0), None, |_| true).unwrap();
///
/// assert_eq!(
///     visited.path_to(&Tile::new(2, 0)).unwrap(),
///     vec![Tile::new(0, 0), Tile::new(1, 0), Tile::new(2, 0)],
/// );
/// ```
pub fn breadth_first_search<G, F>(
    graph: &G,
    start: G::Node,
    goal: Option<&G::Node>,
    mut accepts: F,
) -> Result<CameFrom<G::Node>, GridError>
where
    G: Graph + ?Sized,
    G::Node: Hash + Eq + Clone,
    F: FnMut(&G::Node) -> bool,
{
    try_breadth_first_search(graph, start, goal, |node| Ok::<_, GridError>(accepts(node)))
}

/// [`breadth_first_search`] with a fallible predicate.
///
/// The first predicate error aborts the search and is returned as is.
pub fn try_breadth_first_search<G, F, E>(
    graph: &G,
    start: G::Node,
    goal: Option<&G::Node>,
    mut accepts: F,
) -> Result<CameFrom<G::Node>, E>
where
    G: Graph + ?Sized,
    G::Node: Hash + Eq + Clone,
    F: FnMut(&G::Node) -> Result<bool, E>,
    E: From<GridError>,
{
    let mut frontier = VecDeque::from([start.clone()]);
    let mut predecessors = HashMap::from([(start.clone(), None)]);

    while let Some(current) = frontier.pop_front() {
        if goal == Some(&current) {
            break;
        }

        for next in graph.neighbors(&current)? {
            if predecessors.contains_key(&next) || !accepts(&next)? {
                continue;
            }
            predecessors.insert(next.clone(), Some(current.clone()));
            frontier.push_back(next);
        }
    }

    Ok(CameFrom {
        start,
        predecessors,
    })
}

/// Everything reachable from `start`.
pub fn reachable<G>(graph: &G, start: G::Node) -> Result<CameFrom<G::Node>, GridError>
where
    G: Graph + ?Sized,
    G::Node: Hash + Eq + Clone,
{
    breadth_first_search(graph, start, None, |_| true)
}
