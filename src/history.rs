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

//! The history heuristic: a from/to butterfly table of quiet-move success
//! scores. Not consulted by [`crate::ordering`] or [`crate::search`] today;
//! kept ready for when quiet-move ordering needs something sharper than the
//! current flat scoring.

use crate::{defs::Square, params};

/// A from-square/to-square table of quiet-move scores, updated with a
/// gravity-damped add so repeated good moves keep climbing without
/// overflowing.
pub struct HistoryTable {
    scores: [[i32; Square::TOTAL]; Square::TOTAL],
}

impl Default for HistoryTable {
    fn default() -> Self {
        Self { scores: [[0; Square::TOTAL]; Square::TOTAL] }
    }
}

impl HistoryTable {
    /// The current score for a quiet move from `from` to `to`.
    #[must_use]
    pub fn get(&self, from: Square, to: Square) -> i32 {
        self.scores[from.to_index()][to.to_index()]
    }

    /// Rewards a quiet move that caused a beta cutoff, with gravity pulling
    /// the score back towards zero as it approaches its bounds.
    pub fn update(&mut self, from: Square, to: Square, bonus: i32) {
        let score = &mut self.scores[from.to_index()][to.to_index()];
        *score += bonus - *score * bonus.abs() / params::HISTORY_GRAVITY;
    }

    /// Clears every entry, e.g. at the start of a new game.
    pub fn clear(&mut self) {
        self.scores = [[0; Square::TOTAL]; Square::TOTAL];
    }
}

#[cfg(test)]
mod tests {
    use super::HistoryTable;
    use crate::defs::Square;

    #[test]
    fn update_increases_the_score() {
        let mut table = HistoryTable::default();
        table.update(Square::E2, Square::E4, 100);
        assert!(table.get(Square::E2, Square::E4) > 0);
    }

    #[test]
    fn clear_resets_every_entry() {
        let mut table = HistoryTable::default();
        table.update(Square::E2, Square::E4, 100);
        table.clear();
        assert_eq!(table.get(Square::E2, Square::E4), 0);
    }
}
