use std::fmt::{self, Display, Formatter};

/// The board is always 3x3.
pub const BOARD_SIZE: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub r: u8,
    pub c: u8,
}

impl Pos {
    /// Doesn't check bounds - `State` rejects positions that are off the board.
    pub fn new(r: u8, c: u8) -> Pos {
        Pos { r, c }
    }

    pub fn is_on_board(self) -> bool {
        self.r < BOARD_SIZE && self.c < BOARD_SIZE
    }

    /// Moves one cell in `dir`.
    ///
    /// Stepping off the board is not an error, the position just stays where it is.
    /// Whether that makes the move illegal is up to the puzzle.
    pub fn step(self, dir: Dir) -> Pos {
        let (dr, dc) = dir.delta();
        let r = i16::from(self.r) + i16::from(dr);
        let c = i16::from(self.c) + i16::from(dc);
        let size = i16::from(BOARD_SIZE);
        if r < 0 || c < 0 || r >= size || c >= size {
            self
        } else {
            Pos::new(r as u8, c as u8)
        }
    }

    pub fn move_up(self) -> Pos {
        self.step(Dir::Up)
    }

    pub fn move_right(self) -> Pos {
        self.step(Dir::Right)
    }

    pub fn move_down(self) -> Pos {
        self.step(Dir::Down)
    }

    pub fn move_left(self) -> Pos {
        self.step(Dir::Left)
    }
}

impl Display for Pos {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.r, self.c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

/// Order matters - the solver tries directions in this order
/// so it decides which of the equally short solutions is found.
pub const DIRECTIONS: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

impl Dir {
    /// (row, column) offset of a single step.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Dir::Up => (-1, 0),
            Dir::Right => (0, 1),
            Dir::Down => (1, 0),
            Dir::Left => (0, -1),
        }
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Dir::Up => write!(f, "u"),
            Dir::Right => write!(f, "r"),
            Dir::Down => write!(f, "d"),
            Dir::Left => write!(f, "l"),
        }
    }
}
