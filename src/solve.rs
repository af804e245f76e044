use crate::{BoardGraph, START};

type IndexMap<K, V> = indexmap::IndexMap<K, V, fxhash::FxBuildHasher>;

/// The minimum number of die rolls from the start square to the goal, or
/// `None` when the goal cannot be reached.
///
/// `on_step` is invoked once per examined edge, for progress reporting.
pub fn minimum_rolls(graph: &BoardGraph, mut on_step: impl FnMut()) -> Option<u32> {
    let goal = graph.goal();

    // Insertion order doubles as the BFS queue, and an existing entry marks a
    // square as discovered, so each square keeps its first predecessor.
    let mut predecessor = IndexMap::default();
    predecessor.insert(START, !0usize); // Sentinel.

    let mut cursor = 0;
    let goal_at = 'bfs: loop {
        if cursor >= predecessor.len() {
            return None;
        }
        let (&square, _) = predecessor.get_index(cursor).unwrap();
        if square == goal {
            break 'bfs cursor;
        }
        // Farthest die roll first.
        for &next in graph.neighbors(square).iter().rev() {
            on_step();
            predecessor.entry(next).or_insert(cursor);
        }
        cursor += 1;
    };

    // Parent indices strictly decrease, so the walk cannot cycle.
    let rolls = std::iter::successors(Some(goal_at), |&i| {
        let parent = predecessor[i];
        (parent != !0usize).then_some(parent)
    })
    .count() as u32
        - 1;
    debug_assert!(rolls <= u32::from(graph.board_size()));
    Some(rolls)
}
