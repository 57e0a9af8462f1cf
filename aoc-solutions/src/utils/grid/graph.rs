//! Graph capability consumed by the search routines.

use std::collections::HashMap;
use std::hash::Hash;

use super::{Connectivity, GridError, GridSize, Tile};

/// Anything that can list the neighbours of a node.
pub trait Graph {
    type Node;

    fn neighbors(&self, node: &Self::Node) -> Result<Vec<Self::Node>, GridError>;
}

/// A graph whose edges carry a non-negative cost.
///
/// Only meaningful for adjacent nodes; the value for other pairs is
/// unspecified.
pub trait WeightedGraph: Graph {
    fn cost(&self, from: &Self::Node, to: &Self::Node) -> u64;
}

impl<G: Graph + ?Sized> Graph for &G {
    type Node = G::Node;

    fn neighbors(&self, node: &Self::Node) -> Result<Vec<Self::Node>, GridError> {
        (**self).neighbors(node)
    }
}

/// Grid-backed graph: neighbours are derived from the grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareGrid {
    size: GridSize,
    connectivity: Connectivity,
}

impl SquareGrid {
    pub fn new(size: GridSize, connectivity: Connectivity) -> Self {
        Self { size, connectivity }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }
}

impl Graph for SquareGrid {
    type Node = Tile;

    fn neighbors(&self, node: &Tile) -> Result<Vec<Tile>, GridError> {
        self.size.neighbors(*node, self.connectivity)
    }
}

impl WeightedGraph for SquareGrid {
    fn cost(&self, _from: &Tile, _to: &Tile) -> u64 {
        1
    }
}

/// Map-backed graph over explicit adjacency lists.
///
/// Nodes without an entry have no neighbours. Edge costs default to 1
/// unless set with [`SimpleGraph::with_cost`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleGraph<T: Hash + Eq> {
    edges: HashMap<T, Vec<T>>,
    costs: HashMap<(T, T), u64>,
}

impl<T: Hash + Eq + Clone> SimpleGraph<T> {
    pub fn new(edges: HashMap<T, Vec<T>>) -> Self {
        Self {
            edges,
            costs: HashMap::new(),
        }
    }

    /// Adds a directed edge. Call twice for an undirected one.
    pub fn add_edge(&mut self, from: T, to: T) {
        self.edges.entry(from).or_default().push(to);
    }

    pub fn with_cost(mut self, from: T, to: T, cost: u64) -> Self {
        self.costs.insert((from, to), cost);
        self
    }
}

impl<T: Hash + Eq + Clone> Default for SimpleGraph<T> {
    fn default() -> Self {
        Self::new(HashMap::new())
    }
}

impl<T: Hash + Eq + Clone> FromIterator<(T, Vec<T>)> for SimpleGraph<T> {
    fn from_iter<I: IntoIterator<Item = (T, Vec<T>)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<T: Hash + Eq + Clone> Graph for SimpleGraph<T> {
    type Node = T;

    fn neighbors(&self, node: &T) -> Result<Vec<T>, GridError> {
        Ok(self.edges.get(node).cloned().unwrap_or_default())
    }
}

impl<T: Hash + Eq + Clone> WeightedGraph for SimpleGraph<T> {
    fn cost(&self, from: &T, to: &T) -> u64 {
        self.costs
            .get(&(from.clone(), to.clone()))
            .copied()
            .unwrap_or(1)
    }
}
