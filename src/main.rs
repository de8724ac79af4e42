use std::io;
use std::process;

use clap::{App, Arg};
use log::debug;

use shoe_puzzle_solver::solution_formatter::SolutionFormatter;
use shoe_puzzle_solver::solver;
use shoe_puzzle_solver::state::State;

fn main() {
    env_logger::init();

    let matches = App::new("shoe-puzzle-solver")
        .author("martin-t")
        .version("0.1")
        .about("Finds the shortest solution of the block and shoes puzzle")
        .arg(
            Arg::with_name("steps")
                .short("s")
                .long("steps")
                .help("print every state of the solution"),
        )
        .arg(
            Arg::with_name("stats")
                .long("stats")
                .help("print search statistics"),
        )
        .arg(
            Arg::with_name("state")
                .value_name("STATE")
                .help("initial state, e.g. \"[(0,0),(2,0),(1,1),(0,2)]\" (default)"),
        )
        .get_matches();

    let initial = match matches.value_of("state") {
        Some(text) => text.parse::<State>().unwrap_or_else(|err| {
            eprintln!("Invalid state: {}", err);
            process::exit(1);
        }),
        None => State::default(),
    };
    debug!("Initial state: {:?}", initial);

    println!("Solving {}...", initial);
    let solution = if matches.is_present("steps") {
        // the moves are printed after the states
        let solution = solver::search(&initial);
        match solution.moves {
            Some(ref moves) => {
                println!("Found solution:");
                print!("{}", SolutionFormatter::new(&initial, moves));
                println!("{}", moves);
                println!("Moves: {}", moves.len());
            }
            None => println!("No solution"),
        }
        solution
    } else {
        solver::solve_and_print(&initial, &mut io::stdout()).unwrap_or_else(|err| {
            eprintln!("Failed to write solution: {}", err);
            process::exit(1);
        })
    };

    if matches.is_present("stats") {
        println!();
        print!("{}", solution.stats);
    }
}
