//! Construction and algorithm parameters.

/// Whether `add_edge` accepts an edge whose endpoints coincide.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SelfLoops {
    #[default]
    Allow,
    Reject,
}

/// Fixed-at-construction graph settings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphConfig {
    pub directed: bool,
    pub self_loops: SelfLoops,
}

impl GraphConfig {
    pub fn directed() -> Self {
        Self {
            directed: true,
            ..Self::default()
        }
    }

    pub fn undirected() -> Self {
        Self::default()
    }

    pub fn with_self_loops(mut self, self_loops: SelfLoops) -> Self {
        self.self_loops = self_loops;
        self
    }
}

/// Parameters for Katz centrality.
///
/// `score = beta + alpha * A * score`, iterated exactly `iterations` times
/// starting from `beta`. No convergence check is made.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KatzConfig {
    pub alpha: f64,
    pub beta: f64,
    pub iterations: usize,
}

impl Default for KatzConfig {
    fn default() -> Self {
        Self {
            alpha: 0.1,
            beta: 1.0,
            iterations: 20,
        }
    }
}

/// Order in which greedy node coloring visits nodes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ColoringOrder {
    /// Node insertion order.
    #[default]
    InsertionOrder,
    /// Degree descending; equal degrees keep insertion order.
    LargestFirst,
    /// Breadth-first discovery order, restarting at each unvisited node.
    BreadthFirst,
}
