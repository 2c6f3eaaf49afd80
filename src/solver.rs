use crate::board::{Board, Move};
use crate::search::Search;

/// Solves a board and decides solvability in the same run.
///
/// Two searches race: one from the given board, one from its twin. Swapping
/// a tile pair flips the parity class, so exactly one of the two can reach
/// the goal. Strict alternation, one expansion per side per round, lets the
/// solvable side win in finite time while the other is abandoned on the spot.
///
/// The race runs to completion inside [`Solver::new`]; every accessor
/// afterwards reads the recorded outcome.
pub struct Solver {
    solvable: bool,
    path: Option<Vec<Board>>,
    expansions: u64,
}

impl Solver {
    pub fn new(initial: Board) -> Self {
        let mut original = Search::new(initial.clone());
        let mut twin = Search::new(initial.twin());

        loop {
            original.step();
            if original.is_solved() {
                break;
            }
            twin.step();
            if twin.is_solved() {
                break;
            }
        }

        let path = original.goal_node().map(|terminal| {
            let mut boards = Vec::with_capacity(terminal.moves() as usize + 1);
            let mut current = Some(terminal);
            while let Some(node) = current {
                boards.push(node.board().clone());
                current = node.predecessor();
            }
            boards.reverse();
            boards
        });

        Self {
            solvable: original.is_solved(),
            path,
            expansions: original.expansions() + twin.expansions(),
        }
    }

    /// Whether the original board, not the twin, reached the goal.
    pub fn is_solvable(&self) -> bool {
        self.solvable
    }

    /// Minimum number of moves, or -1 when the board is unsolvable.
    pub fn moves(&self) -> i32 {
        match &self.path {
            Some(path) => (path.len() - 1) as i32,
            None => -1,
        }
    }

    /// The boards from the initial arrangement to the goal, one slide apart,
    /// or `None` when the board is unsolvable.
    pub fn solution(&self) -> Option<&[Board]> {
        self.path.as_deref()
    }

    /// The slides along the solution path, in order.
    pub fn solution_moves(&self) -> Option<Vec<Move>> {
        self.path.as_ref().map(|path| {
            path.windows(2)
                // adjacent solution boards always differ by exactly one slide
                .filter_map(|pair| pair[0].move_to(&pair[1]))
                .collect()
        })
    }

    /// Total node expansions across both sides of the race.
    pub fn expansions(&self) -> u64 {
        self.expansions
    }
}
