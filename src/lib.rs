use std::ops::Index;

use arrayvec::ArrayVec;

mod fmt;
mod parse;
pub mod solve;

/// Number of squares on the standard board.
pub const BOARD_SIZE: u16 = 100;

/// Faces of the die, and thus the maximum out-degree of a square.
pub const DIE_FACES: usize = 6;

/// The square every game begins on.
pub const START: Square = Square(1);

/// A 1-based square number in `[1, board_size]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(pub u16);

type EdgeList = ArrayVec<Square, DIE_FACES>;

/// The board as a directed graph: one edge per die face, with snakes and
/// ladders folded into the predecessors' edges.
///
/// Mutable only through [`BoardGraph::apply_shortcut`]; the search treats it
/// as read-only. One instance per test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardGraph {
    // Indexed by square number minus one.
    edges: Box<[EdgeList]>,
    shortcut_starts: Vec<Square>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ShortcutError {
    #[error("square {0} is outside the board")]
    OutOfBoard(Square),
    #[error("shortcut from square {0} to itself")]
    SelfLoop(Square),
    #[error("shortcut must not begin on the start or goal square {0}")]
    StartsOnEndpoint(Square),
    #[error("square {0} already begins a shortcut")]
    DuplicateStart(Square),
}

impl Index<Square> for BoardGraph {
    type Output = [Square];
    fn index(&self, square: Square) -> &Self::Output {
        &self.edges[square.0 as usize - 1]
    }
}

impl BoardGraph {
    /// The base topology: square `i` leads to `i+1 ..= min(i+6, board_size)`,
    /// in ascending order.
    pub fn new(board_size: u16) -> Self {
        assert!(board_size >= 2, "board needs a start and a goal square");
        let edges = (1..=board_size)
            .map(|i| {
                (i + 1..=board_size.min(i.saturating_add(DIE_FACES as u16)))
                    .map(Square)
                    .collect()
            })
            .collect();
        Self {
            edges,
            shortcut_starts: Vec::new(),
        }
    }

    pub fn board_size(&self) -> u16 {
        self.edges.len() as u16
    }

    pub fn goal(&self) -> Square {
        Square(self.board_size())
    }

    /// The current outgoing edges of `square`, shortcuts applied.
    pub fn neighbors(&self, square: Square) -> &[Square] {
        &self[square]
    }

    fn contains(&self, square: Square) -> bool {
        (1..=self.board_size()).contains(&square.0)
    }

    /// Applies one snake or ladder running from `start` to `end`.
    ///
    /// A die roll landing exactly on `start` is redirected to `end` before it
    /// is ever recorded, so `start` loses its own edges and every edge of the
    /// up-to-six predecessor squares that targeted `start` targets `end`
    /// instead. Validation failures leave the graph untouched.
    pub fn apply_shortcut(&mut self, start: Square, end: Square) -> Result<(), ShortcutError> {
        for square in [start, end] {
            if !self.contains(square) {
                return Err(ShortcutError::OutOfBoard(square));
            }
        }
        if start == end {
            return Err(ShortcutError::SelfLoop(start));
        }
        if start == START || start == self.goal() {
            return Err(ShortcutError::StartsOnEndpoint(start));
        }
        if self.shortcut_starts.contains(&start) {
            return Err(ShortcutError::DuplicateStart(start));
        }
        self.shortcut_starts.push(start);

        self.edges[start.0 as usize - 1].clear();
        let lowest = start.0.saturating_sub(DIE_FACES as u16).max(1);
        for p in lowest..start.0 {
            for target in self.edges[p as usize - 1].iter_mut() {
                if *target == start {
                    *target = end;
                }
            }
        }
        Ok(())
    }
}

/// One board configuration as fed by the driver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestCase {
    pub ladders: Vec<(Square, Square)>,
    pub snakes: Vec<(Square, Square)>,
}

/// A whole input: every test case of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseSet {
    pub cases: Vec<TestCase>,
}

impl TestCase {
    /// Builds the board for this case, applying all ladders then all snakes,
    /// each group in input order. Chained shortcuts (one's end equal to
    /// another's start) therefore resolve deterministically: the later
    /// application rewires whatever the earlier one left in its window.
    pub fn build_graph(&self, board_size: u16) -> Result<BoardGraph, ShortcutError> {
        let mut graph = BoardGraph::new(board_size);
        for &(start, end) in self.ladders.iter().chain(&self.snakes) {
            graph.apply_shortcut(start, end)?;
        }
        Ok(graph)
    }
}
