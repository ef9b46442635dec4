use sweeper_core::*;

use crate::command::{Command, HELP};

#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    Continue(String),
    Quit,
}

/// Drives one player's games. The board itself is the only game state.
#[derive(Debug)]
pub struct Session {
    config: GameConfig,
    seed: Option<u64>,
    games_started: u64,
    field: Minefield,
}

impl Session {
    pub fn new(config: GameConfig, seed: Option<u64>) -> Result<Self> {
        let field = Self::build_field(config, seed)?;
        Ok(Self {
            config,
            seed,
            games_started: 1,
            field,
        })
    }

    fn build_field(config: GameConfig, seed: Option<u64>) -> Result<Minefield> {
        match seed {
            Some(seed) => {
                log::debug!("seed: {}", seed);
                Minefield::with_seed(config, seed)
            }
            None => Minefield::new(config),
        }
    }

    pub fn field(&self) -> &Minefield {
        &self.field
    }

    pub fn new_game(&mut self) -> Result<()> {
        // a forced seed still gives a different board for every new game
        let seed = self
            .seed
            .map(|seed| seed.wrapping_add(self.games_started));
        self.field = Self::build_field(self.config, seed)?;
        self.games_started += 1;
        Ok(())
    }

    pub fn apply(&mut self, command: Command) -> Result<Step> {
        log::trace!("command: {:?}", command);
        Ok(match command {
            Command::Reveal(row, col) => {
                let outcome = self.field.reveal_cell(row, col);
                log::debug!("reveal ({}, {}): {:?}", row, col, outcome);
                Step::Continue(self.screen())
            }
            Command::Flag(row, col) => {
                let outcome = self.field.toggle_flag(row, col);
                log::debug!("flag ({}, {}): {:?}", row, col, outcome);
                Step::Continue(self.screen())
            }
            Command::NewGame => {
                self.new_game()?;
                Step::Continue(self.screen())
            }
            Command::Dump => Step::Continue(self.field.dump()),
            Command::Help => Step::Continue(HELP.to_owned()),
            Command::Quit => Step::Quit,
        })
    }

    pub fn status(&self) -> String {
        match self.field.state() {
            GameState::InProgress => format!("Mines: {}", self.field.mines_left()),
            GameState::Won => "YOU WIN!".to_owned(),
            GameState::Lost => "Game Over!".to_owned(),
        }
    }

    /// Board with 1-based row and column labels followed by the status line.
    pub fn screen(&self) -> String {
        let header: String = (1..=self.field.cols())
            .map(|col| format!("{:>3}", col))
            .collect();
        let mut out = format!("   {}\n", header);

        for row in 0..i32::from(self.field.rows()) {
            let cells: String = (0..i32::from(self.field.cols()))
                .map(|col| {
                    let symbol = self.field.cell_at(row, col).map_or(' ', |cell| cell.symbol());
                    format!("{:>3}", symbol)
                })
                .collect();
            out.push_str(&format!("{:>3}{}\n", row + 1, cells));
        }

        out.push_str(&self.status());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(GameConfig::new(5, 5, 3), Some(11)).unwrap()
    }

    #[test]
    fn rejects_invalid_config() {
        assert_eq!(
            Session::new(GameConfig::new(2, 2, 4), None).unwrap_err(),
            GameError::TooManyMines
        );
    }

    #[test]
    fn flag_updates_mine_counter() {
        let mut session = session();
        assert_eq!(session.status(), "Mines: 3");

        session.apply(Command::Flag(0, 0)).unwrap();
        assert_eq!(session.status(), "Mines: 2");
        assert!(session.field().cell_at(0, 0).unwrap().is_flagged());
    }

    #[test]
    fn revealing_a_mine_ends_the_game() {
        let mut session = session();
        let (mine, _) = session
            .field()
            .iter_cells()
            .find(|(_, cell)| cell.is_mine())
            .unwrap();

        session
            .apply(Command::Reveal(mine.0.into(), mine.1.into()))
            .unwrap();
        assert_eq!(session.status(), "Game Over!");
    }

    #[test]
    fn new_game_starts_fresh_board() {
        let mut session = session();
        session.apply(Command::Flag(1, 1)).unwrap();

        session.apply(Command::NewGame).unwrap();
        assert_eq!(session.field().flagged_count(), 0);
        assert!(!session.field().is_game_over());
    }

    #[test]
    fn screen_has_labels_and_status() {
        let session = session();
        let screen = session.screen();
        let lines: Vec<_> = screen.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "     1  2  3  4  5");
        assert_eq!(lines[1], "  1  ?  ?  ?  ?  ?");
        assert_eq!(lines[6], "Mines: 3");
    }

    #[test]
    fn screen_aligns_flagged_cell_under_its_column() {
        let mut session = Session::new(GameConfig::new(5, 5, 1), Some(0)).unwrap();
        let (mine, _) = session
            .field()
            .iter_cells()
            .find(|(_, cell)| cell.is_mine())
            .unwrap();
        session.apply(Command::Flag(mine.0.into(), mine.1.into())).unwrap();

        let screen = session.screen();
        let lines: Vec<_> = screen.lines().collect();
        let row = &lines[usize::from(mine.0) + 1];
        let col_start = 3 + 3 * usize::from(mine.1);
        assert_eq!(&row[col_start..col_start + 3], "  F");
        assert!(lines.iter().skip(1).take(5).all(|line| line.len() == 18));
        assert_eq!(lines[6], "Mines: 0");
    }

    #[test]
    fn quit_stops() {
        assert_eq!(session().apply(Command::Quit).unwrap(), Step::Quit);
    }
}
