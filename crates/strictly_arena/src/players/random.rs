//! Player choosing uniformly among legal moves.

use super::Player;
use anyhow::Result;
use rand::Rng;
use strictly_breakthrough::{GameInProgress, Move};
use tracing::debug;

/// Random player driven by an injected generator.
pub struct RandomPlayer<R: Rng> {
    name: String,
    rng: R,
}

impl<R: Rng> RandomPlayer<R> {
    /// Creates a random player that draws from `rng`.
    pub fn new(name: impl Into<String>, rng: R) -> Self {
        Self {
            name: name.into(),
            rng,
        }
    }
}

impl<R: Rng> Player for RandomPlayer<R> {
    fn choose_move(&mut self, _game: &GameInProgress, moves: &[Move]) -> Result<Move> {
        if moves.is_empty() {
            anyhow::bail!("No legal moves available");
        }
        let mv = moves[self.rng.random_range(0..moves.len())];
        debug!(player = %self.name, %mv, choices = moves.len(), "Chose random move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_same_seed_same_choices() {
        let game = GameInProgress::new();
        let mut a = RandomPlayer::new("a", StdRng::seed_from_u64(42));
        let mut b = RandomPlayer::new("b", StdRng::seed_from_u64(42));
        for _ in 0..10 {
            let left = a.choose_move(&game, game.legal_moves()).expect("has moves");
            let right = b.choose_move(&game, game.legal_moves()).expect("has moves");
            assert_eq!(left, right);
        }
    }

    #[test]
    fn test_only_legal_moves_are_chosen() {
        let game = GameInProgress::new();
        let mut player = RandomPlayer::new("r", StdRng::seed_from_u64(3));
        for _ in 0..30 {
            let mv = player.choose_move(&game, game.legal_moves()).expect("has moves");
            assert!(game.legal_moves().contains(&mv));
        }
    }

    #[test]
    fn test_empty_move_list_is_an_error() {
        let game = GameInProgress::new();
        let mut player = RandomPlayer::new("r", StdRng::seed_from_u64(3));
        assert!(player.choose_move(&game, &[]).is_err());
    }
}
