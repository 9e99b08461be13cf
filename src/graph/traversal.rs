//! Graph traversal algorithms (stack-order BFS, level-order BFS, DFS).

use std::collections::VecDeque;

use serde::Serialize;

use crate::types::{GraphError, GraphResult, VertexLabel};

use super::AdjacencyGraph;

/// Which traversal produced a visit sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalOrder {
    /// Worklist traversal popping the most recently discovered vertex.
    Bfs,
    /// First-in-first-out breadth-first traversal.
    LevelOrder,
    /// Recursive pre-order depth-first traversal.
    Dfs,
}

impl TraversalOrder {
    /// Return a human-readable name for this traversal.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bfs => "bfs",
            Self::LevelOrder => "level_order",
            Self::Dfs => "dfs",
        }
    }
}

impl std::fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Result of a traversal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraversalResult<V> {
    /// The traversal that was run.
    pub order: TraversalOrder,
    /// Start vertex.
    pub start: V,
    /// Vertices in the order they were emitted.
    pub visited: Vec<V>,
}

impl<V: VertexLabel> TraversalResult<V> {
    /// The visit sequence, space-separated.
    pub fn to_line(&self) -> String {
        format_sequence(&self.visited)
    }
}

/// Render a visit sequence space-separated.
pub fn format_sequence<V: VertexLabel>(vertices: &[V]) -> String {
    vertices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl<V: VertexLabel> AdjacencyGraph<V> {
    /// Worklist traversal that removes from the END of the worklist.
    ///
    /// A vertex is marked visited when it is pushed, and the most recently
    /// pushed vertex is popped next. Despite the name this is not level
    /// order: on the demo graph it yields `A D E F C B`. Use
    /// [`AdjacencyGraph::level_order`] for a true breadth-first traversal.
    pub fn bfs(&self, start: &V) -> GraphResult<Vec<V>> {
        let start_id = self.start_index(start)?;

        let mut visited = vec![false; self.vertex_count()];
        let mut worklist = vec![start_id];
        let mut emitted = Vec::new();
        visited[start_id] = true;

        while let Some(current) = worklist.pop() {
            emitted.push(self.label(current).clone());
            for &neighbor in self.neighbor_ids(current) {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    worklist.push(neighbor);
                }
            }
        }

        log::debug!("bfs from {} visited {} vertices", start, emitted.len());
        Ok(emitted)
    }

    /// Breadth-first traversal with a first-in-first-out queue.
    pub fn level_order(&self, start: &V) -> GraphResult<Vec<V>> {
        let start_id = self.start_index(start)?;

        let mut visited = vec![false; self.vertex_count()];
        let mut queue = VecDeque::from([start_id]);
        let mut emitted = Vec::new();
        visited[start_id] = true;

        while let Some(current) = queue.pop_front() {
            emitted.push(self.label(current).clone());
            for &neighbor in self.neighbor_ids(current) {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }

        log::debug!(
            "level-order from {} visited {} vertices",
            start,
            emitted.len()
        );
        Ok(emitted)
    }

    /// Depth-first pre-order traversal following neighbor-list order.
    ///
    /// Emits exactly the vertices reachable from `start`, each once. The
    /// order matches the recursive definition (emit, then descend into each
    /// unvisited neighbor in turn) but runs on an explicit frame stack, so
    /// long paths do not grow the call stack.
    pub fn dfs(&self, start: &V) -> GraphResult<Vec<V>> {
        let start_id = self.start_index(start)?;

        let mut visited = vec![false; self.vertex_count()];
        let mut emitted = Vec::new();
        // (vertex, position of the next neighbor to descend into)
        let mut frames: Vec<(usize, usize)> = Vec::new();

        visited[start_id] = true;
        emitted.push(self.label(start_id).clone());
        frames.push((start_id, 0));

        while let Some(frame) = frames.last_mut() {
            let (current, next) = *frame;
            let Some(&neighbor) = self.neighbor_ids(current).get(next) else {
                frames.pop();
                continue;
            };
            frame.1 += 1;

            if !visited[neighbor] {
                visited[neighbor] = true;
                emitted.push(self.label(neighbor).clone());
                frames.push((neighbor, 0));
            }
        }

        log::debug!("dfs from {} visited {} vertices", start, emitted.len());
        Ok(emitted)
    }

    /// Run the traversal named by `order` and package the result.
    pub fn traverse(&self, order: TraversalOrder, start: &V) -> GraphResult<TraversalResult<V>> {
        let visited = match order {
            TraversalOrder::Bfs => self.bfs(start)?,
            TraversalOrder::LevelOrder => self.level_order(start)?,
            TraversalOrder::Dfs => self.dfs(start)?,
        };
        Ok(TraversalResult {
            order,
            start: start.clone(),
            visited,
        })
    }

    fn start_index(&self, start: &V) -> GraphResult<usize> {
        self.index_of(start).ok_or_else(|| {
            log::warn!("traversal start vertex {} not in graph", start);
            GraphError::VertexNotFound(start.to_string())
        })
    }
}
