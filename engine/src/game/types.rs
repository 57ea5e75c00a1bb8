use serde::{Deserialize, Serialize};

pub const CELL_COUNT: usize = 9;

pub type CellIndex = usize;
pub type LineIndex = usize;

/// One of the two players. `PlayerOne` opens every match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    PlayerOne,
    PlayerTwo,
}

impl Side {
    pub fn opponent(&self) -> Side {
        match self {
            Side::PlayerOne => Side::PlayerTwo,
            Side::PlayerTwo => Side::PlayerOne,
        }
    }

    /// Search factor: a position scored for one side is negated for the other.
    pub fn sign(&self) -> i8 {
        match self {
            Side::PlayerOne => -1,
            Side::PlayerTwo => 1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    pub fn side(&self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Side::PlayerOne),
            Cell::PlayerTwo => Some(Side::PlayerTwo),
        }
    }

    pub fn value(&self) -> i8 {
        self.side().map_or(0, |side| side.sign())
    }

    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::PlayerOne => 'X',
            Cell::PlayerTwo => 'O',
        }
    }
}

impl From<Side> for Cell {
    fn from(side: Side) -> Self {
        match side {
            Side::PlayerOne => Cell::PlayerOne,
            Side::PlayerTwo => Cell::PlayerTwo,
        }
    }
}

/// The two colors every button can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LightColor {
    Green,
    Blue,
}

impl LightColor {
    pub fn other(&self) -> LightColor {
        match self {
            LightColor::Green => LightColor::Blue,
            LightColor::Blue => LightColor::Green,
        }
    }
}
