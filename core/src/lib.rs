use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use difficulty::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod cell;
mod difficulty;
mod engine;
mod error;
mod generator;
mod types;

/// Smallest side accepted for a custom board.
pub const CUSTOM_MIN_SIDE: Coord = 5;
/// Largest side accepted for a custom board.
pub const CUSTOM_MAX_SIDE: Coord = 30;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    /// Builds a custom board, clamping sides into `5..=30` and mines into `1..rows*cols`.
    pub fn custom(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        let rows = rows.clamp(CUSTOM_MIN_SIDE, CUSTOM_MAX_SIDE);
        let cols = cols.clamp(CUSTOM_MIN_SIDE, CUSTOM_MAX_SIDE);
        let mines = mines.clamp(1, mult(rows, cols) - 1);
        Self::new(rows, cols, mines)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GameError::InvalidDimensions);
        }
        if self.mines == 0 {
            return Err(GameError::NoMines);
        }
        if self.mines >= self.total_cells() {
            return Err(GameError::TooManyMines);
        }
        Ok(())
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Difficulty::default().config()
    }
}

/// Mine positions of a board before any play happens.
#[derive(Clone, Debug, PartialEq)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Self {
            mine_mask,
            mine_count,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn game_config(&self) -> GameConfig {
        let (rows, cols) = self.size();
        GameConfig::new(rows, cols, self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.mine_mask.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        self.mine_mask
            .iter_neighbors(coords)
            .filter(|&pos| self[pos])
            .count() as u8
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.mine_mask[(row as usize, col as usize)]
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

/// What a reveal did to the board. Every rejected move is `NoChange`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_bad_configs() {
        assert_eq!(
            GameConfig::new(0, 4, 1).validate(),
            Err(GameError::InvalidDimensions)
        );
        assert_eq!(GameConfig::new(3, 3, 0).validate(), Err(GameError::NoMines));
        assert_eq!(
            GameConfig::new(3, 3, 9).validate(),
            Err(GameError::TooManyMines)
        );
        assert_eq!(GameConfig::new(3, 3, 8).validate(), Ok(()));
    }

    #[test]
    fn custom_clamps_like_the_dialog() {
        assert_eq!(GameConfig::custom(2, 40, 0), GameConfig::new(5, 30, 1));
        assert_eq!(GameConfig::custom(5, 5, 500), GameConfig::new(5, 5, 24));
        assert!(GameConfig::custom(1, 1, 1).validate().is_ok());
    }

    #[test]
    fn config_deserializes_from_json() {
        let config: GameConfig =
            serde_json::from_str(r#"{"rows":16,"cols":16,"mines":40}"#).unwrap();
        assert_eq!(config, Difficulty::Intermediate.config());
        assert_eq!(config.safe_cells(), 216);
    }

    #[test]
    fn layout_rejects_out_of_bounds_mines() {
        assert_eq!(
            MineLayout::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn layout_counts_adjacent_mines() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(0, 0), (2, 2)]).unwrap();
        assert_eq!(layout.mine_count(), 2);
        assert_eq!(layout.adjacent_mine_count((1, 1)), 2);
        assert_eq!(layout.adjacent_mine_count((0, 2)), 0);
        assert_eq!(layout.game_config(), GameConfig::new(3, 3, 2));
    }
}
