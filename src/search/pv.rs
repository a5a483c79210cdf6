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

//! The principal variation: the best line found so far and the score it was
//! found with, rebuilt at every node from its children's lines rather than
//! tracked through a fixed triangular buffer.

use std::ops::{Deref, DerefMut};

use arrayvec::ArrayVec;

use crate::movegen::Move;

use super::MAX_PLY;

/// A line of moves from the root, best-first, bounded by [`MAX_PLY`], paired
/// with the score it was evaluated at.
pub struct Pv {
    moves: ArrayVec<Move, MAX_PLY>,
    /// The score this line was found with, from the perspective of the side
    /// to move at the node the line starts from.
    pub score: i32,
}

impl Pv {
    /// An empty line with a zero score.
    #[must_use]
    pub fn new() -> Self {
        Self { moves: ArrayVec::new(), score: 0 }
    }

    /// Truncates the line to zero length. Leaves `score` untouched; callers
    /// overwrite it once a new score is known.
    pub fn clear(&mut self) {
        self.moves.clear();
    }
}

impl Default for Pv {
    fn default() -> Self {
        Self::new()
    }
}

/// Lets a [`Pv`] be indexed, iterated and measured like the move slice it
/// wraps, without exposing the backing [`ArrayVec`] directly.
impl Deref for Pv {
    type Target = [Move];

    fn deref(&self) -> &Self::Target {
        &self.moves
    }
}

impl DerefMut for Pv {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.moves
    }
}

/// Replaces `pv` with `mv` followed by `child`'s moves and `score`, the
/// convention every search frame uses to propagate its best line and the
/// score it was found at up to its caller.
pub fn extend(pv: &mut Pv, mv: Move, child: &Pv, score: i32) {
    pv.moves.clear();
    pv.moves.push(mv);
    pv.moves.extend_from_slice(&child.moves);
    pv.score = score;
}

/// Renders a PV the way UCI wants it: space-separated moves, each in
/// from-square/to-square/promotion form.
pub fn format_pv(pv: &Pv) -> String {
    pv.iter().map(Move::to_string).collect::<Vec<_>>().join(" ")
}
