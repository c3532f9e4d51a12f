use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::{Direction, GraphBase, GraphError, KatzConfig, Result};

/// Katz centrality by fixed-count power iteration.
///
/// Every score starts at `beta`; each round computes, synchronously,
/// `new[v] = beta + alpha * sum(old[u])` over the in-neighbors `u` of `v`
/// (all neighbors when undirected). Edge weights are not used and scores are
/// not normalized. Exactly `iterations` rounds run; convergence is never
/// checked, so an `alpha` at or above `1 / max_degree` may diverge. That case
/// is logged, not rejected; use [`try_katz_centrality`] for validation.
pub fn katz_centrality<G>(graph: &G, config: &KatzConfig) -> IndexMap<G::Key, f64>
where
    G: GraphBase + ?Sized,
{
    let direction = if graph.is_directed() {
        Direction::Incoming
    } else {
        Direction::Both
    };

    let max_degree = graph
        .node_ids()
        .map(|v| graph.adjacent(v, direction).count())
        .max()
        .unwrap_or(0);
    if !config.alpha.is_finite() || config.alpha * max_degree as f64 >= 1.0 {
        warn!(
            alpha = config.alpha,
            max_degree, "katz alpha outside the convergence bound"
        );
    }

    let n = graph.order();
    let mut scores = vec![config.beta; n];
    let mut next = vec![0.0_f64; n];

    for _ in 0..config.iterations {
        for v in graph.node_ids() {
            let incoming: f64 = graph.adjacent(v, direction).map(|(u, _)| scores[u.0]).sum();
            next[v.0] = config.beta + config.alpha * incoming;
        }
        std::mem::swap(&mut scores, &mut next);
    }

    debug!(
        nodes = n,
        iterations = config.iterations,
        alpha = config.alpha,
        "katz centrality"
    );
    graph
        .node_ids()
        .map(|v| (graph.node_key(v).clone(), scores[v.0]))
        .collect()
}

/// [`katz_centrality`] that refuses a negative or non-finite `alpha` or `beta`.
pub fn try_katz_centrality<G>(graph: &G, config: &KatzConfig) -> Result<IndexMap<G::Key, f64>>
where
    G: GraphBase + ?Sized,
{
    for (name, value) in [("alpha", config.alpha), ("beta", config.beta)] {
        if !value.is_finite() || value < 0.0 {
            return Err(GraphError::UnsupportedOperation(format!(
                "katz centrality with {name} = {value}"
            )));
        }
    }
    Ok(katz_centrality(graph, config))
}
