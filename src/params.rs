/*
 * Crab, a UCI-compatible chess engine
 * Copyright (C) 2024 Jasper Shovelton
 *
 * Crab is free software: you can redistribute it and/or modify it under the
 * terms of the GNU General Public License as published by the Free Software
 * Foundation, either version 3 of the License, or (at your option) any later
 * version.
 *
 * Crab is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
 * FOR A PARTICULAR PURPOSE. See the GNU General Public License for more
 * details.
 *
 * You should have received a copy of the GNU General Public License along with
 * Crab. If not, see <https://www.gnu.org/licenses/>.
 */

//! Engine-wide tunable parameters, grouped into one immutable value rather
//! than scattered mutable statics, so a single `Params` can be constructed
//! once at startup and shared (by reference) across every search thread this
//! crate might one day grow.

use crate::evaluation::Score;

/// Bonus awarded to the side to move, to offset the fact that static
/// evaluation otherwise treats both sides symmetrically.
pub const TEMPO: i32 = 10;

/// Piece values used by move ordering (distinct from the material+PSQT
/// values baked into [`crate::evaluation::Score`]), indexed by
/// [`crate::defs::PieceType::to_index`].
///
/// Order: pawn, knight, bishop, rook, queen, king, none.
pub const ORDERING_VALUES: [i32; 7] = [86, 304, 360, 466, 905, 20_903, 0];

/// Flat bonus for castling in move ordering.
pub const CASTLING_ORDER_BONUS: i32 = 256;

/// Saturating cap for the history heuristic table (unused by search; see
/// [`crate::history`]).
pub const HISTORY_GRAVITY: i32 = 512;

/// All tunable evaluation weights, grouped so the evaluator takes one
/// reference instead of reaching into global state.
pub struct Params {
    /// Penalty for a pawn sharing its file with another own pawn.
    pub stacked_pawn_penalty: Score,
    /// Bonus for a passed pawn, indexed by the rank (0-7) it stands on from
    /// its owner's perspective.
    pub passed_pawn_bonus: [Score; 8],
    /// Bonus per reachable square, indexed by popcount of the knight's
    /// attacks minus own occupancy (0-8).
    pub knight_mobility: [Score; 9],
    /// As above, for bishops (0-13 reachable squares).
    pub bishop_mobility: [Score; 14],
    /// As above, for rooks (0-14 reachable squares).
    pub rook_mobility: [Score; 15],
    /// As above, for queens (0-27 reachable squares).
    pub queen_mobility: [Score; 28],
    /// Flat bonus for holding both bishops.
    pub bishop_pair: Score,
}

impl Params {
    /// The tuned default parameter set used by this engine.
    #[allow(clippy::missing_inline_in_public_items)]
    pub fn default_values() -> Self {
        Self {
            stacked_pawn_penalty: Score(10, 20),
            passed_pawn_bonus: [
                Score(0, 0),
                Score(5, 10),
                Score(10, 20),
                Score(20, 35),
                Score(35, 55),
                Score(55, 85),
                Score(80, 120),
                Score(0, 0),
            ],
            knight_mobility: core::array::from_fn(|n| Score((n as i32 - 4) * 4, (n as i32 - 4) * 4)),
            bishop_mobility: core::array::from_fn(|n| Score((n as i32 - 6) * 3, (n as i32 - 6) * 3)),
            rook_mobility: core::array::from_fn(|n| Score((n as i32 - 7) * 2, (n as i32 - 7) * 4)),
            queen_mobility: core::array::from_fn(|n| Score((n as i32 - 13) * 1, (n as i32 - 13) * 2)),
            bishop_pair: Score(30, 50),
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::default_values()
    }
}
