use crate::*;
pub use random::*;

mod random;

/// Produces the mine layout for a new board.
///
/// Implementations may assume `config` has passed [`GameConfig::validate`].
pub trait MineGenerator {
    fn generate(self, config: &GameConfig) -> MineLayout;
}
