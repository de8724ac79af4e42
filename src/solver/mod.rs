pub mod stats;

use std::collections::VecDeque;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;
use std::io::{self, Write};

use fnv::FnvHashMap;
use log::{debug, info};

use crate::moves::Moves;

use self::stats::Stats;

/// Anything the breadth-first search can explore.
///
/// States are deduplicated by value so `Eq` and `Hash` have to agree.
pub trait SearchState: Clone + Eq + Hash {
    type Move: Copy;

    fn is_goal(&self) -> bool;

    fn legal_moves(&self) -> Vec<Self::Move>;

    /// Only ever called with moves returned by `legal_moves`.
    fn make_move(&mut self, mov: Self::Move);

    /// The state reached by `mov`, leaves `self` untouched.
    fn successor(&self, mov: Self::Move) -> Self {
        let mut next = self.clone();
        next.make_move(mov);
        next
    }
}

pub struct SolverOk<M> {
    /// `None` if the goal is unreachable.
    pub moves: Option<Moves<M>>,
    pub stats: Stats,
}

impl<M> SolverOk<M> {
    fn new(moves: Option<Moves<M>>, stats: Stats) -> Self {
        Self { moves, stats }
    }
}

impl<M: Display> Debug for SolverOk<M> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.moves {
            None => writeln!(f, "No solution")?,
            Some(ref moves) => writeln!(f, "{}: {}", moves, moves.len())?,
        }
        write!(f, "{:?}", self.stats)
    }
}

/// Shortest sequence of moves from `initial` to any goal state.
///
/// Among equally short solutions the one found first in `legal_moves` order wins.
pub fn search<S: SearchState>(initial: &S) -> SolverOk<S::Move> {
    debug!("Search called");

    let mut stats = Stats::new();

    let mut to_visit = VecDeque::new();
    // discovered states and how we got to them, the initial state has no prev
    let mut prevs: FnvHashMap<S, Option<(S, S::Move)>> = FnvHashMap::default();

    stats.add_created(0);
    prevs.insert(initial.clone(), None);
    to_visit.push_back((initial.clone(), 0));

    while let Some((cur, depth)) = to_visit.pop_front() {
        if stats.add_unique_visited(depth) {
            info!("Visited new depth: {}", depth);
        }

        if cur.is_goal() {
            debug!("Solved, backtracking path");
            let moves = backtrack_moves(&prevs, &cur);
            return SolverOk::new(Some(moves), stats);
        }

        for mov in cur.legal_moves() {
            let next = cur.successor(mov);
            stats.add_created(depth + 1);

            // marked when discovered, not when visited -
            // the first discovery is always at the lowest depth
            if prevs.contains_key(&next) {
                stats.add_reached_duplicate(depth + 1);
                continue;
            }
            prevs.insert(next.clone(), Some((cur.clone(), mov)));
            to_visit.push_back((next, depth + 1));
        }
    }

    debug!("Nothing left to visit");
    SolverOk::new(None, stats)
}

/// Runs `search` and writes the solution (or its absence) to `out`.
pub fn solve_and_print<S, W>(initial: &S, out: &mut W) -> io::Result<SolverOk<S::Move>>
where
    S: SearchState,
    S::Move: Display,
    W: Write,
{
    let solution = search(initial);
    match solution.moves {
        Some(ref moves) => {
            writeln!(out, "Found solution:")?;
            writeln!(out, "{}", moves)?;
            writeln!(out, "Moves: {}", moves.len())?;
        }
        None => writeln!(out, "No solution")?,
    }
    Ok(solution)
}

fn backtrack_moves<S: SearchState>(
    prevs: &FnvHashMap<S, Option<(S, S::Move)>>,
    final_state: &S,
) -> Moves<S::Move> {
    let mut moves = Vec::new();
    let mut state = final_state;
    while let Some((prev, mov)) = &prevs[state] {
        moves.push(*mov);
        state = prev;
    }
    moves.reverse();
    Moves::new(moves)
}
