use std::error::Error;
use std::fmt::{self, Display, Formatter};

use crate::data::{Dir, Pos, DIRECTIONS};
use crate::solver::SearchState;

pub const BLOCK: usize = 0;
pub const RED_SHOE: usize = 1;
pub const BLUE_SHOE: usize = 2;
pub const BLACK_SHOE: usize = 3;

const ENTITIES: usize = 4;
const SHOES: [usize; 3] = [RED_SHOE, BLUE_SHOE, BLACK_SHOE];

/// Bitmask of the only two shoes allowed to share a cell.
const RED_BLUE: u8 = (1 << RED_SHOE) | (1 << BLUE_SHOE);

fn role_name(role: usize) -> &'static str {
    match role {
        BLOCK => "block",
        RED_SHOE => "red shoe",
        BLUE_SHOE => "blue shoe",
        BLACK_SHOE => "black shoe",
        _ => "unknown entity",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateErr {
    Count(usize),
    OffBoard(usize, Pos),
    SharedCell(usize, usize),
    Syntax(String),
}

impl Display for StateErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            StateErr::Count(n) => write!(f, "Expected {} positions, got {}", ENTITIES, n),
            StateErr::OffBoard(role, pos) => {
                write!(f, "Position of {} is off the board: {}", role_name(role), pos)
            }
            StateErr::SharedCell(a, b) => write!(
                f,
                "The {} and the {} can't share a cell",
                role_name(a),
                role_name(b)
            ),
            StateErr::Syntax(ref text) => write!(f, "Can't parse state: {}", text),
        }
    }
}

impl Error for StateErr {}

/// Positions of the block and the three shoes, indexed by
/// `BLOCK`, `RED_SHOE`, `BLUE_SHOE` and `BLACK_SHOE`.
///
/// The block carries the shoes on its cell when it moves right, down or left.
/// Moving up it lifts off and leaves them behind.
/// The puzzle is solved once the red and the blue shoe are on the same cell.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct State {
    positions: [Pos; ENTITIES],
}

impl State {
    pub fn new(positions: &[Pos]) -> Result<State, StateErr> {
        if positions.len() != ENTITIES {
            return Err(StateErr::Count(positions.len()));
        }
        for (role, &pos) in positions.iter().enumerate() {
            if !pos.is_on_board() {
                return Err(StateErr::OffBoard(role, pos));
            }
        }
        for (i, &a) in SHOES.iter().enumerate() {
            for &b in &SHOES[i + 1..] {
                let pair = (1 << a) | (1 << b);
                if positions[a] == positions[b] && pair != RED_BLUE {
                    return Err(StateErr::SharedCell(a, b));
                }
            }
        }

        let mut checked = [Pos::new(0, 0); ENTITIES];
        checked.copy_from_slice(positions);
        Ok(State { positions: checked })
    }

    pub fn position(&self, role: usize) -> Pos {
        self.positions[role]
    }

    pub fn positions(&self) -> &[Pos; ENTITIES] {
        &self.positions
    }

    pub fn is_solved(&self) -> bool {
        self.positions[RED_SHOE] == self.positions[BLUE_SHOE]
    }

    pub fn is_legal_move(&self, dir: Dir) -> bool {
        let block = self.positions[BLOCK];
        let dest = block.step(dir);
        if dest == block {
            // already at the edge
            return false;
        }

        let load = self.load(dir);
        let waiting = self.shoes_at(dest);
        load == 0 || waiting == 0 || (load | waiting) == RED_BLUE
    }

    pub fn legal_moves(&self) -> Vec<Dir> {
        DIRECTIONS
            .iter()
            .cloned()
            .filter(|&dir| self.is_legal_move(dir))
            .collect()
    }

    /// Shoes that travel with the block when it moves in `dir`.
    pub fn carried_shoes(&self, dir: Dir) -> Vec<usize> {
        let load = self.load(dir);
        SHOES
            .iter()
            .cloned()
            .filter(|&shoe| load & (1 << shoe) != 0)
            .collect()
    }

    /// The caller has to make sure the move is legal.
    pub fn make_move(&mut self, dir: Dir) {
        let block = self.positions[BLOCK];
        let dest = block.step(dir);
        let load = self.load(dir);
        for &shoe in &SHOES {
            if load & (1 << shoe) != 0 {
                self.positions[shoe] = dest;
            }
        }
        self.positions[BLOCK] = dest;
    }

    fn load(&self, dir: Dir) -> u8 {
        if dir == Dir::Up {
            0
        } else {
            self.shoes_at(self.positions[BLOCK])
        }
    }

    fn shoes_at(&self, pos: Pos) -> u8 {
        SHOES
            .iter()
            .filter(|&&shoe| self.positions[shoe] == pos)
            .fold(0, |mask, &shoe| mask | (1 << shoe))
    }
}

impl Default for State {
    fn default() -> State {
        State {
            positions: [Pos::new(0, 0), Pos::new(2, 0), Pos::new(1, 1), Pos::new(0, 2)],
        }
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, pos) in self.positions.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", pos)?;
        }
        write!(f, "]")
    }
}

impl SearchState for State {
    type Move = Dir;

    fn is_goal(&self) -> bool {
        self.is_solved()
    }

    fn legal_moves(&self) -> Vec<Dir> {
        State::legal_moves(self)
    }

    fn make_move(&mut self, mov: Dir) {
        State::make_move(self, mov)
    }
}

#[cfg(test)]
mod tests {
    use fnv::FnvHashSet;

    use super::*;

    fn state(positions: [(u8, u8); 4]) -> State {
        let positions: Vec<_> = positions.iter().map(|&(r, c)| Pos::new(r, c)).collect();
        State::new(&positions).unwrap()
    }

    /// the default initial state
    fn initial() -> State {
        State::default()
    }

    /// a goal state
    fn paired() -> State {
        state([(1, 1), (1, 1), (1, 1), (1, 2)])
    }

    /// block carrying the blue shoe in the middle
    fn carrying_blue() -> State {
        state([(1, 1), (2, 0), (1, 1), (0, 2)])
    }

    /// block carrying the black shoe, boxed in - no legal moves
    fn dead_end() -> State {
        state([(0, 0), (1, 0), (0, 1), (0, 0)])
    }

    #[test]
    fn constructing() {
        let positions = [Pos::new(0, 0), Pos::new(2, 0), Pos::new(1, 1), Pos::new(0, 2)];
        let s = State::new(&positions).unwrap();
        for (role, &pos) in positions.iter().enumerate() {
            assert_eq!(s.position(role), pos);
        }
        assert_eq!(s, State::default());
    }

    #[test]
    fn constructing_invalid() {
        assert_eq!(State::new(&[Pos::new(0, 0)]).unwrap_err(), StateErr::Count(1));
        assert_eq!(State::new(&[]).unwrap_err(), StateErr::Count(0));
        assert_eq!(
            State::new(&[Pos::new(0, 0); 5]).unwrap_err(),
            StateErr::Count(5)
        );
        assert_eq!(
            State::new(&[Pos::new(0, 0), Pos::new(1, 1), Pos::new(2, 2), Pos::new(3, 3)])
                .unwrap_err(),
            StateErr::OffBoard(BLACK_SHOE, Pos::new(3, 3))
        );
        assert_eq!(
            State::new(&[Pos::new(1, 1); 4]).unwrap_err(),
            StateErr::SharedCell(RED_SHOE, BLACK_SHOE)
        );
        assert_eq!(
            State::new(&[Pos::new(0, 0), Pos::new(2, 0), Pos::new(1, 1), Pos::new(1, 1)])
                .unwrap_err(),
            StateErr::SharedCell(BLUE_SHOE, BLACK_SHOE)
        );
    }

    #[test]
    fn red_and_blue_may_share() {
        let s = State::new(&[Pos::new(0, 0), Pos::new(2, 2), Pos::new(2, 2), Pos::new(1, 1)]);
        assert!(s.is_ok());
    }

    #[test]
    fn solved() {
        assert!(!initial().is_solved());
        assert!(paired().is_solved());
        assert!(!carrying_blue().is_solved());
        assert!(!dead_end().is_solved());
    }

    #[test]
    fn legal_moves_initial() {
        let s = initial();
        assert!(!s.is_legal_move(Dir::Up));
        assert!(s.is_legal_move(Dir::Right));
        assert!(s.is_legal_move(Dir::Down));
        assert!(!s.is_legal_move(Dir::Left));
        assert_eq!(s.legal_moves(), vec![Dir::Right, Dir::Down]);
    }

    #[test]
    fn legal_moves_paired() {
        // the pair can't be carried onto the black shoe
        let s = paired();
        assert!(s.is_legal_move(Dir::Up));
        assert!(!s.is_legal_move(Dir::Right));
        assert!(s.is_legal_move(Dir::Down));
        assert!(s.is_legal_move(Dir::Left));
        assert_eq!(s.legal_moves(), vec![Dir::Up, Dir::Down, Dir::Left]);
    }

    #[test]
    fn legal_moves_carrying() {
        let s = carrying_blue();
        for &dir in &DIRECTIONS {
            assert!(s.is_legal_move(dir));
        }
        assert_eq!(s.legal_moves(), DIRECTIONS.to_vec());
    }

    #[test]
    fn legal_moves_dead_end() {
        let s = dead_end();
        for &dir in &DIRECTIONS {
            assert!(!s.is_legal_move(dir));
        }
        assert!(s.legal_moves().is_empty());
    }

    #[test]
    fn legal_moves_match_is_legal_move() {
        for s in &[initial(), paired(), carrying_blue(), dead_end()] {
            let expected: Vec<_> = DIRECTIONS
                .iter()
                .cloned()
                .filter(|&d| s.is_legal_move(d))
                .collect();
            assert_eq!(s.legal_moves(), expected);
        }
    }

    #[test]
    fn empty_handed_block_enters_occupied_cell() {
        // nothing to carry so it may step onto the blue shoe
        let s = state([(0, 1), (2, 0), (1, 1), (0, 2)]);
        assert!(s.is_legal_move(Dir::Down));
        assert!(s.carried_shoes(Dir::Down).is_empty());
    }

    #[test]
    fn carrying_blue_onto_red() {
        let mut s = state([(2, 1), (2, 0), (2, 1), (0, 2)]);
        assert!(s.is_legal_move(Dir::Left));
        s.make_move(Dir::Left);
        assert_eq!(s, state([(2, 0), (2, 0), (2, 0), (0, 2)]));
        assert!(s.is_solved());
    }

    #[test]
    fn carrying_black_onto_red_is_illegal() {
        let s = state([(2, 1), (2, 0), (1, 1), (2, 1)]);
        assert!(!s.is_legal_move(Dir::Left));
    }

    #[test]
    fn carried_shoes() {
        let s = carrying_blue();
        assert_eq!(s.carried_shoes(Dir::Right), vec![BLUE_SHOE]);
        assert_eq!(s.carried_shoes(Dir::Down), vec![BLUE_SHOE]);
        assert_eq!(s.carried_shoes(Dir::Left), vec![BLUE_SHOE]);
        // lifting off
        assert!(s.carried_shoes(Dir::Up).is_empty());

        assert_eq!(paired().carried_shoes(Dir::Left), vec![RED_SHOE, BLUE_SHOE]);
        assert!(initial().carried_shoes(Dir::Right).is_empty());
    }

    fn check_move(before: &State, dir: Dir) {
        let mut after = before.clone();
        after.make_move(dir);
        let carried = before.carried_shoes(dir);
        let expected_block = before.position(BLOCK).step(dir);
        assert_eq!(after.position(BLOCK), expected_block);
        for &shoe in &SHOES {
            if carried.contains(&shoe) {
                assert_eq!(after.position(shoe), expected_block);
            } else {
                assert_eq!(after.position(shoe), before.position(shoe));
            }
        }
    }

    #[test]
    fn making_moves() {
        let s = initial();
        check_move(&s, Dir::Right);
        check_move(&s, Dir::Down);

        let s = carrying_blue();
        for &dir in &DIRECTIONS {
            check_move(&s, dir);
        }

        let s = paired();
        for dir in s.legal_moves() {
            check_move(&s, dir);
        }
    }

    #[test]
    fn moving_up_leaves_load() {
        let mut s = carrying_blue();
        s.make_move(Dir::Up);
        assert_eq!(s, state([(0, 1), (2, 0), (1, 1), (0, 2)]));
    }

    #[test]
    fn moving_right_carries_load() {
        let mut s = carrying_blue();
        s.make_move(Dir::Right);
        assert_eq!(s, state([(1, 2), (2, 0), (1, 2), (0, 2)]));
    }

    #[test]
    fn equality_and_cloning() {
        let s = initial();
        assert_eq!(s, s);
        assert_ne!(s, paired());

        let mut clone = s.clone();
        assert_eq!(clone, s);
        clone.make_move(Dir::Right);
        assert_ne!(clone, s);
        assert_eq!(s, State::default());
    }

    #[test]
    fn hashing() {
        let mut set = FnvHashSet::default();
        set.insert(initial());
        assert!(set.contains(&initial().clone()));
        assert!(!set.insert(State::default()));

        let mut moved = initial();
        moved.make_move(Dir::Down);
        assert!(set.insert(moved));
    }

    #[test]
    fn formatting() {
        assert_eq!(initial().to_string(), "[(0,0),(2,0),(1,1),(0,2)]");
        assert_eq!(paired().to_string(), "[(1,1),(1,1),(1,1),(1,2)]");
        assert_eq!(carrying_blue().to_string(), "[(1,1),(2,0),(1,1),(0,2)]");
        assert_eq!(dead_end().to_string(), "[(0,0),(1,0),(0,1),(0,0)]");
    }

    #[test]
    fn formatting_errors() {
        assert_eq!(StateErr::Count(1).to_string(), "Expected 4 positions, got 1");
        assert_eq!(
            StateErr::SharedCell(BLUE_SHOE, BLACK_SHOE).to_string(),
            "The blue shoe and the black shoe can't share a cell"
        );
        assert_eq!(
            StateErr::OffBoard(BLOCK, Pos::new(3, 0)).to_string(),
            "Position of block is off the board: (3,0)"
        );
    }

    #[test]
    fn legal_moves_keep_states_valid() {
        // walk everything reachable from the initial state
        let mut seen = FnvHashSet::default();
        let mut to_visit = vec![initial()];
        while let Some(cur) = to_visit.pop() {
            if !seen.insert(cur.clone()) {
                continue;
            }
            assert!(State::new(cur.positions()).is_ok(), "invalid state {}", cur);
            for dir in cur.legal_moves() {
                let mut next = cur.clone();
                next.make_move(dir);
                assert_ne!(next.position(BLOCK), cur.position(BLOCK));
                to_visit.push(next);
            }
        }
        assert!(seen.iter().any(State::is_solved));
    }
}
