use core::fmt;
use ndarray::Array2;
use std::collections::VecDeque;

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum GameState {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One game from construction to win or loss.
///
/// All mutation goes through [`reveal_cell`](Self::reveal_cell) and
/// [`toggle_flag`](Self::toggle_flag). Both take arbitrary integer coordinates and
/// silently ignore anything that is out of bounds or not a legal move.
#[derive(Clone, Debug, PartialEq)]
pub struct Minefield {
    grid: Array2<Cell>,
    config: GameConfig,
    revealed_count: CellCount,
    flagged_count: CellCount,
    state: GameState,
}

impl Minefield {
    /// New board with randomly placed mines.
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_generator(config, RandomMineGenerator::from_entropy())
    }

    /// New board whose mine placement is fully determined by `seed`.
    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_generator(config, RandomMineGenerator::new(seed))
    }

    pub fn with_generator(config: GameConfig, generator: impl MineGenerator) -> Result<Self> {
        config.validate()?;
        Self::from_layout(generator.generate(&config))
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        Self::from_layout(MineLayout::from_mine_coords(size, mine_coords)?)
    }

    pub fn from_layout(layout: MineLayout) -> Result<Self> {
        let config = layout.game_config();
        config.validate()?;

        let mut grid: Array2<Cell> = Array2::default(config.size().to_nd_index());
        for ((row, col), cell) in grid.indexed_iter_mut() {
            let coords = (row as Coord, col as Coord);
            if layout.contains_mine(coords) {
                cell.set_mine();
            } else {
                cell.set_adjacent_mine_count(layout.adjacent_mine_count(coords));
            }
        }

        log::debug!(
            "New {}x{} board with {} mines",
            config.rows,
            config.cols,
            config.mines
        );

        Ok(Self {
            grid,
            config,
            revealed_count: 0,
            flagged_count: 0,
            state: GameState::default(),
        })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn rows(&self) -> Coord {
        self.config.rows
    }

    pub fn cols(&self) -> Coord {
        self.config.cols
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn total_mines(&self) -> CellCount {
        self.config.mines
    }

    /// Safe cells revealed so far.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// Mines not yet accounted for by a flag, negative when over-flagged.
    pub fn mines_left(&self) -> i32 {
        i32::from(self.config.mines) - i32::from(self.flagged_count)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_finished()
    }

    pub fn is_game_won(&self) -> bool {
        matches!(self.state, GameState::Won)
    }

    /// Snapshot of the cell at `(row, col)`, `None` when off the board.
    pub fn cell_at(&self, row: i32, col: i32) -> Option<Cell> {
        let coords = locate(row, col, self.size())?;
        Some(self.grid[coords.to_nd_index()])
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.grid
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    pub fn reveal_cell(&mut self, row: i32, col: i32) -> RevealOutcome {
        match locate(row, col, self.size()) {
            Some(coords) => self.reveal_at(coords),
            None => RevealOutcome::NoChange,
        }
    }

    pub fn toggle_flag(&mut self, row: i32, col: i32) -> MarkOutcome {
        if self.state.is_finished() {
            return MarkOutcome::NoChange;
        }
        let Some(coords) = locate(row, col, self.size()) else {
            return MarkOutcome::NoChange;
        };

        let cell = &mut self.grid[coords.to_nd_index()];
        if cell.is_revealed() {
            return MarkOutcome::NoChange;
        }

        cell.toggle_flagged();
        if cell.is_flagged() {
            self.flagged_count += 1;
        } else {
            self.flagged_count -= 1;
        }
        log::trace!("Flag at {:?} now {}", coords, cell.is_flagged());
        MarkOutcome::Changed
    }

    fn reveal_at(&mut self, coords: Coord2) -> RevealOutcome {
        if self.state.is_finished() {
            return RevealOutcome::NoChange;
        }

        let cell = self.grid[coords.to_nd_index()];
        if cell.is_revealed() || cell.is_flagged() {
            return RevealOutcome::NoChange;
        }

        if cell.is_mine() {
            self.grid[coords.to_nd_index()].set_revealed();
            self.state = GameState::Lost;
            self.reveal_all_mines();
            log::debug!("Hit mine at {:?}, game lost", coords);
            return RevealOutcome::HitMine;
        }

        // bounds, flag and revealed checks happen on dequeue, duplicates are harmless
        let mut to_visit = VecDeque::from([coords]);
        while let Some(visit_coords) = to_visit.pop_front() {
            let cell = &mut self.grid[visit_coords.to_nd_index()];
            if cell.is_revealed() || cell.is_flagged() {
                continue;
            }

            // a zero-count cell has no mine neighbours, so expansion never reaches a mine
            debug_assert!(
                !cell.is_mine(),
                "flood-fill reached mine at {visit_coords:?}"
            );

            cell.set_revealed();
            let count = cell.adjacent_mine_count();
            self.revealed_count += 1;
            log::trace!(
                "Flood revealed {:?}, adjacent mines: {}",
                visit_coords,
                count
            );

            if count == 0 {
                to_visit.extend(self.grid.iter_neighbors(visit_coords));
            }
        }

        if self.revealed_count == self.config.safe_cells() {
            self.state = GameState::Won;
            log::debug!("All {} safe cells revealed, game won", self.revealed_count);
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    fn reveal_all_mines(&mut self) {
        self.grid
            .iter_mut()
            .filter(|cell| cell.is_mine())
            .for_each(Cell::set_revealed);
    }

    fn render(&self, glyph: impl Fn(&Cell) -> char) -> String {
        let mut out = String::new();
        for row in self.grid.rows() {
            let line: Vec<String> = row.iter().map(|cell| glyph(cell).to_string()).collect();
            out.push_str(&line.join(" "));
            out.push('\n');
        }
        out
    }

    /// Full board layout for debugging: `*` for mines, adjacency count otherwise.
    ///
    /// Not a stable format.
    pub fn dump(&self) -> String {
        self.render(|cell| {
            if cell.is_mine() {
                '*'
            } else {
                (b'0' + cell.adjacent_mine_count()) as char
            }
        })
    }
}

/// Player-visible board, one [`Cell::symbol`] per position.
impl fmt::Display for Minefield {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Cell::symbol))
    }
}
