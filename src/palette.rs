//! Colors used by the renderer. Kept apart from [CellState] so that the solvers never look
//! at colors.
use crate::cell::CellState;

pub type Rgb = (u8, u8, u8);

pub const WHITE: Rgb = (255, 255, 255);
pub const BLACK: Rgb = (0, 0, 0);
pub const ORANGE: Rgb = (255, 165, 0);
pub const TURQUOISE: Rgb = (64, 224, 208);
pub const GREEN: Rgb = (0, 255, 0);
pub const RED: Rgb = (255, 0, 0);
pub const PURPLE: Rgb = (128, 0, 128);
/// Grid lines.
pub const GREY: Rgb = (128, 128, 128);

pub fn color(state: CellState) -> Rgb {
    match state {
        CellState::Free => WHITE,
        CellState::Obstacle => BLACK,
        CellState::Start => ORANGE,
        CellState::End => TURQUOISE,
        CellState::Frontier => GREEN,
        CellState::Visited => RED,
        CellState::Path => PURPLE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_state_has_its_own_color() {
        let states = [
            CellState::Free,
            CellState::Obstacle,
            CellState::Start,
            CellState::End,
            CellState::Frontier,
            CellState::Visited,
            CellState::Path,
        ];
        let mut colors = states.map(color).to_vec();
        colors.sort();
        colors.dedup();
        assert_eq!(colors.len(), states.len());
        assert!(!colors.contains(&GREY));
    }
}
