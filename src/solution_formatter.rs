use std::fmt::{self, Debug, Display, Formatter};

use crate::data::Dir;
use crate::moves::Moves;
use crate::state::State;

/// Replays a solution, one state per line including the initial one.
pub struct SolutionFormatter<'a> {
    initial_state: &'a State,
    moves: &'a Moves<Dir>,
}

impl<'a> SolutionFormatter<'a> {
    pub fn new(initial_state: &'a State, moves: &'a Moves<Dir>) -> Self {
        Self {
            initial_state,
            moves,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        // TODO verify moves (somebody could pass moves solving a different state)

        writeln!(f, "{}", self.initial_state)?;
        let mut state = self.initial_state.clone();
        for &mov in self.moves {
            state.make_move(mov);
            writeln!(f, "{}", state)?;
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
