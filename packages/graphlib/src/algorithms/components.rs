use tracing::debug;

use crate::{Direction, GraphBase, NodeId, bfs_forest};

/// Weakly connected components: edge direction is ignored, so on undirected
/// graphs these are the ordinary connected components.
///
/// Components are ordered by their earliest inserted node; members appear in
/// breadth-first discovery order from that node.
pub fn weakly_connected_components<G>(graph: &G) -> Vec<Vec<G::Key>>
where
    G: GraphBase + ?Sized,
{
    let forest = bfs_forest(graph, Direction::Both);
    debug!(
        nodes = graph.order(),
        components = forest.len(),
        "weakly connected components"
    );
    to_keys(graph, forest)
}

/// Strongly connected components (Tarjan, iterative).
///
/// Components are ordered by their earliest inserted node and members keep
/// insertion order. On undirected graphs this is the weak partition.
pub fn strongly_connected_components<G>(graph: &G) -> Vec<Vec<G::Key>>
where
    G: GraphBase + ?Sized,
{
    if !graph.is_directed() {
        return weakly_connected_components(graph);
    }

    let n = graph.order();
    let mut index_counter = 0usize;
    let mut stack: Vec<NodeId> = Vec::new();
    let mut on_stack = vec![false; n];
    let mut indices = vec![usize::MAX; n];
    let mut lowlinks = vec![usize::MAX; n];
    let mut components: Vec<Vec<NodeId>> = Vec::new();

    for root in graph.node_ids() {
        if indices[root.0] != usize::MAX {
            continue;
        }

        // (node, its remaining successors)
        let mut dfs_stack = vec![(root, graph.successors(root))];
        indices[root.0] = index_counter;
        lowlinks[root.0] = index_counter;
        index_counter += 1;
        stack.push(root);
        on_stack[root.0] = true;

        while let Some((v, successors)) = dfs_stack.last_mut() {
            let v = *v;
            if let Some((w, _)) = successors.next() {
                if indices[w.0] == usize::MAX {
                    indices[w.0] = index_counter;
                    lowlinks[w.0] = index_counter;
                    index_counter += 1;
                    stack.push(w);
                    on_stack[w.0] = true;
                    dfs_stack.push((w, graph.successors(w)));
                } else if on_stack[w.0] {
                    lowlinks[v.0] = lowlinks[v.0].min(indices[w.0]);
                }
                continue;
            }

            if lowlinks[v.0] == indices[v.0] {
                let mut component = Vec::new();
                while let Some(w) = stack.pop() {
                    on_stack[w.0] = false;
                    component.push(w);
                    if w == v {
                        break;
                    }
                }
                component.sort_unstable();
                components.push(component);
            }

            let low = lowlinks[v.0];
            dfs_stack.pop();
            if let Some((parent, _)) = dfs_stack.last() {
                lowlinks[parent.0] = lowlinks[parent.0].min(low);
            }
        }
    }

    // Tarjan emits in reverse topological order
    components.sort_unstable_by_key(|c| c[0]);

    debug!(
        nodes = n,
        components = components.len(),
        "strongly connected components"
    );
    to_keys(graph, components)
}

fn to_keys<G>(graph: &G, components: Vec<Vec<NodeId>>) -> Vec<Vec<G::Key>>
where
    G: GraphBase + ?Sized,
{
    components
        .into_iter()
        .map(|c| c.into_iter().map(|v| graph.node_key(v).clone()).collect())
        .collect()
}
