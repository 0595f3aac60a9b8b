//! Game bindings for Python.

use pyo3::prelude::*;

use crate::core::Player;
use crate::games::stonehenge::StonehengeGame;
use crate::play::{play_match, GameRecord, MatchConfig};
use crate::rules::{Game, GameState};
use crate::strategy;

use super::to_py_err;

/// Python wrapper for StonehengeGame.
#[pyclass(name = "StonehengeGame")]
#[derive(Clone)]
pub struct PyStonehengeGame {
    game: StonehengeGame,
}

#[pymethods]
impl PyStonehengeGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - side_length: Board size (1-5)
    /// - p1_starts: Whether p1 makes the first move
    #[new]
    #[pyo3(signature = (side_length = 2, p1_starts = true))]
    fn new(side_length: usize, p1_starts: bool) -> PyResult<Self> {
        let game = StonehengeGame::new(side_length, p1_starts).map_err(to_py_err)?;
        Ok(Self { game })
    }

    /// Labels of the unclaimed cells, or an empty list once the game is over.
    fn possible_moves(&self) -> Vec<char> {
        self.game
            .current_state()
            .possible_moves()
            .into_iter()
            .map(|label| label.as_char())
            .collect()
    }

    /// Claim a cell. Raises ValueError on an illegal or unparsable move.
    fn make_move(&mut self, mv: &str) -> PyResult<()> {
        let label = self.game.str_to_move(mv).map_err(to_py_err)?;
        self.game.play(label).map_err(to_py_err)
    }

    fn is_over(&self) -> bool {
        self.game.is_over(self.game.current_state())
    }

    /// "p1", "p2", or None while the game is undecided.
    fn winner(&self) -> Option<&'static str> {
        self.game
            .winner(self.game.current_state())
            .map(|p| p.name())
    }

    #[getter]
    fn current_player(&self) -> &'static str {
        self.game.current_state().current_player().name()
    }

    #[getter]
    fn side_length(&self) -> usize {
        self.game.side_length()
    }

    /// Captured region counts as (p1, p2).
    fn scores(&self) -> (u8, u8) {
        let state = self.game.current_state();
        (state.score(Player::One), state.score(Player::Two))
    }

    /// Ask a named strategy for a move without playing it.
    #[pyo3(signature = (strategy = "minimax-iterative", seed = 0))]
    fn choose_move(&self, strategy: &str, seed: u64) -> PyResult<char> {
        let mut chosen = strategy::by_name::<StonehengeGame>(strategy, seed).map_err(to_py_err)?;
        let label = chosen.choose_move(&self.game).map_err(to_py_err)?;
        Ok(label.as_char())
    }

    /// Copy the game.
    fn copy(&self) -> Self {
        self.clone()
    }

    fn __repr__(&self) -> String {
        let (p1, p2) = self.scores();
        let status = if self.is_over() { "over" } else { "ongoing" };
        format!(
            "StonehengeGame(side_length={}, to_move={}, scores={}-{}, status={})",
            self.game.side_length(),
            self.current_player(),
            p1,
            p2,
            status
        )
    }
}

/// Python wrapper for GameRecord.
#[pyclass(name = "GameRecord")]
pub struct PyGameRecord {
    record: GameRecord,
}

#[pymethods]
impl PyGameRecord {
    /// Moves in play order as (player, label, captured).
    fn moves(&self) -> Vec<(&'static str, char, u8)> {
        self.record
            .moves
            .iter()
            .map(|m| (m.player.name(), m.label.as_char(), m.captured))
            .collect()
    }

    fn winner(&self) -> Option<&'static str> {
        self.record.winner.map(|p| p.name())
    }

    fn to_bytes(&self) -> PyResult<Vec<u8>> {
        self.record.to_bytes().map_err(to_py_err)
    }

    #[staticmethod]
    fn from_bytes(data: Vec<u8>) -> PyResult<Self> {
        let record = GameRecord::from_bytes(&data).map_err(to_py_err)?;
        Ok(Self { record })
    }

    /// Rebuild the final position.
    fn replay(&self) -> PyResult<PyStonehengeGame> {
        let game = self.record.replay().map_err(to_py_err)?;
        Ok(PyStonehengeGame { game })
    }

    fn __len__(&self) -> usize {
        self.record.len()
    }
}

/// Play a full match between two named strategies.
#[pyfunction]
#[pyo3(name = "play_match", signature = (side_length = 2, p1 = "minimax-iterative", p2 = "random", p1_starts = true, seed = 0))]
pub fn py_play_match(
    side_length: usize,
    p1: &str,
    p2: &str,
    p1_starts: bool,
    seed: u64,
) -> PyResult<PyGameRecord> {
    let mut game = StonehengeGame::new(side_length, p1_starts).map_err(to_py_err)?;
    let mut first = strategy::by_name::<StonehengeGame>(p1, seed).map_err(to_py_err)?;
    let mut second =
        strategy::by_name::<StonehengeGame>(p2, seed.wrapping_add(1)).map_err(to_py_err)?;

    let record = play_match(
        &mut game,
        [first.as_mut(), second.as_mut()],
        &MatchConfig::default(),
    )
    .map_err(to_py_err)?;
    Ok(PyGameRecord { record })
}
