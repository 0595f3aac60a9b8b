//! Rough outcome: a two-ply estimate of a state's value.
//!
//! Much cheaper than full minimax and only an approximation. It backs the
//! rough-outcome strategy and is never mixed into the exact evaluators.

use crate::core::Result;
use crate::rules::{Game, GameState};

use super::score::{Score, DRAW, LOSE, WIN};

/// Estimate the best outcome the player to move can guarantee.
///
/// - `LOSE` when there is no legal move
/// - `WIN` when some move wins on the spot
/// - `LOSE` when every move hands the opponent an immediate winning reply
/// - `DRAW` otherwise
pub fn rough_outcome<G: Game>(game: &G, state: &G::State) -> Result<Score> {
    let moves = state.possible_moves();
    if moves.is_empty() {
        return Ok(LOSE);
    }

    let me = state.current_player();
    let opponent = me.opponent();
    let mut opponent_always_wins = true;

    for mv in &moves {
        let next = state.make_move(mv)?;
        if game.is_over(&next) {
            match game.winner(&next) {
                Some(winner) if winner == me => return Ok(WIN),
                Some(_) => {}
                None => opponent_always_wins = false,
            }
            continue;
        }

        if !opponent_always_wins {
            // Still need to look for an outright win among the other moves.
            continue;
        }
        let mut opponent_can_win = false;
        for reply in next.possible_moves() {
            let after = next.make_move(&reply)?;
            if game.is_over(&after) && game.winner(&after) == Some(opponent) {
                opponent_can_win = true;
                break;
            }
        }
        if !opponent_can_win {
            opponent_always_wins = false;
        }
    }

    Ok(if opponent_always_wins { LOSE } else { DRAW })
}
