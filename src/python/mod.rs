//! Python bindings for the Stonehenge engine.
//!
//! ```python
//! import stonehenge
//!
//! game = stonehenge.StonehengeGame(side_length=2, p1_starts=True)
//! while not game.is_over():
//!     game.make_move(game.choose_move("minimax-iterative"))
//! print(game.winner())
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::GameError;

mod py_games;

pub use py_games::*;

fn to_py_err(err: GameError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// stonehenge: the ley-line capture game with exhaustive minimax.
#[pymodule]
fn stonehenge(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyStonehengeGame>()?;
    m.add_class::<PyGameRecord>()?;
    m.add_function(wrap_pyfunction!(py_play_match, m)?)?;
    m.add("STRATEGIES", crate::strategy::STRATEGY_NAMES.to_vec())?;
    Ok(())
}
