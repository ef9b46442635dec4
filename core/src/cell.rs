use core::fmt;

/// State of one board position.
///
/// Read access is public; only the engine mutates cells, so a `Cell` handed out by
/// [`Minefield::cell_at`](crate::Minefield::cell_at) is a snapshot.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    mine: bool,
    revealed: bool,
    flagged: bool,
    adjacent_mines: u8,
}

impl Cell {
    pub const fn is_mine(&self) -> bool {
        self.mine
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(&self) -> bool {
        self.flagged
    }

    /// Mines in the 8-neighbourhood. Always 0 for mine cells.
    pub const fn adjacent_mine_count(&self) -> u8 {
        self.adjacent_mines
    }

    /// Glyph shown to the player.
    pub const fn symbol(&self) -> char {
        if self.flagged {
            'F'
        } else if !self.revealed {
            '?'
        } else if self.mine {
            'X'
        } else {
            match self.adjacent_mines {
                0 => ' ',
                n => (b'0' + n) as char,
            }
        }
    }

    pub(crate) fn set_mine(&mut self) {
        self.mine = true;
    }

    pub(crate) fn set_revealed(&mut self) {
        self.revealed = true;
    }

    pub(crate) fn toggle_flagged(&mut self) {
        self.flagged = !self.flagged;
    }

    pub(crate) fn set_adjacent_mine_count(&mut self, count: u8) {
        self.adjacent_mines = count;
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
