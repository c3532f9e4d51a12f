//! Breadth-first and depth-first traversal primitives.
//!
//! Both are iterative, so traversal depth is bounded by heap rather than the
//! call stack. Neighbors are visited in adjacency order (edge insertion
//! order), which makes every traversal deterministic.

use std::collections::VecDeque;

use crate::{Direction, EdgeId, GraphBase, NodeId};

/// Breadth-first discovery order from `start`.
pub fn bfs<G>(graph: &G, start: NodeId, direction: Direction) -> Vec<NodeId>
where
    G: GraphBase + ?Sized,
{
    if start.0 >= graph.order() {
        return Vec::new();
    }
    let mut visited = vec![false; graph.order()];
    bfs_from(graph, start, direction, &mut visited)
}

/// Breadth-first trees covering every node: a new search starts at each node
/// (in insertion order) not reached by an earlier one.
pub fn bfs_forest<G>(graph: &G, direction: Direction) -> Vec<Vec<NodeId>>
where
    G: GraphBase + ?Sized,
{
    let mut visited = vec![false; graph.order()];
    let mut trees = Vec::new();
    for root in graph.node_ids() {
        if !visited[root.0] {
            trees.push(bfs_from(graph, root, direction, &mut visited));
        }
    }
    trees
}

fn bfs_from<G>(graph: &G, start: NodeId, direction: Direction, visited: &mut [bool]) -> Vec<NodeId>
where
    G: GraphBase + ?Sized,
{
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    visited[start.0] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current);
        for (neighbor, _) in graph.adjacent(current, direction) {
            if !visited[neighbor.0] {
                visited[neighbor.0] = true;
                queue.push_back(neighbor);
            }
        }
    }
    order
}

/// Edge classification reported by `depth_first_search`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DfsEvent {
    Discover(NodeId),
    /// The edge reaches an unvisited node, which is discovered next.
    TreeEdge(NodeId, NodeId, EdgeId),
    /// The edge reaches a node still on the DFS path (a cycle).
    BackEdge(NodeId, NodeId, EdgeId),
    /// The edge reaches a node whose subtree is finished.
    CrossForwardEdge(NodeId, NodeId, EdgeId),
    Finish(NodeId),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Control {
    Continue,
    Break,
}

/// Three-color marking.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

struct Frame<'a> {
    node: NodeId,
    /// Edge used to enter `node`; never walked back.
    via: Option<EdgeId>,
    adjacency: Box<dyn Iterator<Item = (NodeId, EdgeId)> + 'a>,
}

/// Depth-first search over the whole graph, restarting from every unvisited
/// node in insertion order, feeding each event to `visitor`.
///
/// The edge a node was entered through is not reported again from that node,
/// so on an undirected graph a `BackEdge` always closes a real cycle.
/// Returns `Control::Break` as soon as the visitor does.
pub fn depth_first_search<G, F>(graph: &G, direction: Direction, mut visitor: F) -> Control
where
    G: GraphBase + ?Sized,
    F: FnMut(DfsEvent) -> Control,
{
    let mut marks = vec![Mark::Unvisited; graph.order()];

    for root in graph.node_ids() {
        if marks[root.0] != Mark::Unvisited {
            continue;
        }

        marks[root.0] = Mark::InProgress;
        if visitor(DfsEvent::Discover(root)) == Control::Break {
            return Control::Break;
        }
        let mut stack = vec![Frame {
            node: root,
            via: None,
            adjacency: graph.adjacent(root, direction),
        }];

        while let Some(frame) = stack.last_mut() {
            let v = frame.node;
            let via = frame.via;

            match frame.adjacency.next() {
                Some((_, e)) if Some(e) == via => {}
                Some((w, e)) => {
                    let event = match marks[w.0] {
                        Mark::Unvisited => DfsEvent::TreeEdge(v, w, e),
                        Mark::InProgress => DfsEvent::BackEdge(v, w, e),
                        Mark::Done => DfsEvent::CrossForwardEdge(v, w, e),
                    };
                    if visitor(event) == Control::Break {
                        return Control::Break;
                    }
                    if marks[w.0] == Mark::Unvisited {
                        marks[w.0] = Mark::InProgress;
                        if visitor(DfsEvent::Discover(w)) == Control::Break {
                            return Control::Break;
                        }
                        stack.push(Frame {
                            node: w,
                            via: Some(e),
                            adjacency: graph.adjacent(w, direction),
                        });
                    }
                }
                None => {
                    marks[v.0] = Mark::Done;
                    stack.pop();
                    if visitor(DfsEvent::Finish(v)) == Control::Break {
                        return Control::Break;
                    }
                }
            }
        }
    }

    Control::Continue
}

/// Depth-first preorder of every node, restarting per unvisited root.
pub fn dfs_preorder<G>(graph: &G, direction: Direction) -> Vec<NodeId>
where
    G: GraphBase + ?Sized,
{
    let mut order = Vec::with_capacity(graph.order());
    depth_first_search(graph, direction, |event| {
        if let DfsEvent::Discover(v) = event {
            order.push(v);
        }
        Control::Continue
    });
    order
}
