use super::types::{GamePhase, Player};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Normal,
    Alert,
}

pub fn status_message(phase: GamePhase, mover: Player) -> &'static str {
    match (phase, mover) {
        (GamePhase::Playing, Player::Cross) => "X's Turn",
        (GamePhase::Playing, Player::Nought) => "O's Turn",
        (GamePhase::Draw, _) => "It's a Draw! Click to play again.",
        (GamePhase::CrossWon, _) => "'X' Won! Click to play again.",
        (GamePhase::NoughtWon, _) => "'O' Won! Click to play again.",
    }
}

pub fn status_tone(phase: GamePhase) -> StatusTone {
    match phase {
        GamePhase::Playing => StatusTone::Normal,
        GamePhase::Draw | GamePhase::CrossWon | GamePhase::NoughtWon => StatusTone::Alert,
    }
}
