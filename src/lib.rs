// Opt in to warnings about new 2018 idioms
#![warn(rust_2018_idioms)]
// Additional warnings that are allow by default (`rustc -W help`)
#![warn(missing_copy_implementations)]
#![warn(missing_debug_implementations)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused)]

pub mod data;
pub mod moves;
pub mod solution_formatter;
pub mod solver;
pub mod state;

mod parser;

use crate::solver::{SearchState, SolverOk};

pub trait Solve {
    type Move;

    fn solve(&self) -> SolverOk<Self::Move>;
}

impl<S: SearchState> Solve for S {
    type Move = S::Move;

    fn solve(&self) -> SolverOk<S::Move> {
        solver::search(self)
    }
}
