pub const BOARD_SIZE: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CellContent {
    #[default]
    Empty,
    Cross,
    Nought,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    Cross,
    Nought,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::Cross => Player::Nought,
            Player::Nought => Player::Cross,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Player::Cross => 'X',
            Player::Nought => 'O',
        }
    }
}

impl From<Player> for CellContent {
    fn from(player: Player) -> Self {
        match player {
            Player::Cross => CellContent::Cross,
            Player::Nought => CellContent::Nought,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    Draw,
    CrossWon,
    NoughtWon,
}

impl GamePhase {
    pub fn is_over(&self) -> bool {
        !matches!(self, GamePhase::Playing)
    }

    pub fn won_by(player: Player) -> Self {
        match player {
            Player::Cross => GamePhase::CrossWon,
            Player::Nought => GamePhase::NoughtWon,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(player: Player, start: Position, end: Position) -> Self {
        Self { player, start, end }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Placed,
    Ignored,
    Reset,
}
