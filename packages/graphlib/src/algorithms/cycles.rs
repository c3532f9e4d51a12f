use tracing::debug;

use crate::{Control, DfsEvent, Direction, GraphBase, UnionFind, depth_first_search};

/// Whether the graph contains any cycle. Self-loops count as cycles.
///
/// Directed graphs: three-color DFS, stopping at the first back edge.
/// Undirected graphs: union-find over the canonical edges, stopping at the
/// first edge whose endpoints are already connected.
pub fn has_cycle<G>(graph: &G) -> bool
where
    G: GraphBase + ?Sized,
{
    let found = if graph.is_directed() {
        has_directed_cycle(graph)
    } else {
        has_undirected_cycle(graph)
    };
    debug!(directed = graph.is_directed(), found, "cycle check");
    found
}

fn has_directed_cycle<G>(graph: &G) -> bool
where
    G: GraphBase + ?Sized,
{
    let control = depth_first_search(graph, Direction::Outgoing, |event| match event {
        DfsEvent::BackEdge(..) => Control::Break,
        _ => Control::Continue,
    });
    control == Control::Break
}

fn has_undirected_cycle<G>(graph: &G) -> bool
where
    G: GraphBase + ?Sized,
{
    let mut uf = UnionFind::new(graph.order());
    graph.edge_ids().any(|e| {
        let (u, v) = graph.endpoints(e);
        !uf.union_nodes(u, v)
    })
}
