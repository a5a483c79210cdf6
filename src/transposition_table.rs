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

//! A transposition table skeleton. Not wired into [`crate::search`]: nothing
//! probes or stores into it today, but the shape is here for when it is.

use crate::{board::zobrist::Key, movegen::Move};

/// What kind of bound a stored score represents.
#[derive(Clone, Copy, Eq, PartialEq)]
pub enum Bound {
    /// `best_score <= alpha`: the true value may be lower.
    Upper,
    /// `alpha < best_score < beta`: the true value.
    Exact,
    /// `best_score >= beta`: the true value may be higher.
    Lower,
}

/// One transposition table slot.
#[derive(Clone, Copy)]
pub struct Entry {
    pub key: Key,
    pub score: i32,
    pub best_move: Move,
    pub depth: u8,
    pub bound: Bound,
}

/// A fixed-size, always-replace transposition table indexed by `key % len`.
pub struct TranspositionTable {
    entries: Vec<Option<Entry>>,
}

impl TranspositionTable {
    /// Allocates a table sized for roughly `megabytes` of entries.
    #[must_use]
    pub fn with_size_mb(megabytes: usize) -> Self {
        let slots = (megabytes * 1024 * 1024 / std::mem::size_of::<Entry>()).max(1);
        Self { entries: vec![None; slots] }
    }

    /// Looks up `key`, returning the stored entry if the slot holds it.
    #[must_use]
    pub fn probe(&self, key: Key) -> Option<Entry> {
        let index = (key as usize) % self.entries.len();
        self.entries[index].filter(|entry| entry.key == key)
    }

    /// Stores `entry`, unconditionally replacing whatever was in its slot.
    pub fn store(&mut self, entry: Entry) {
        let index = (entry.key as usize) % self.entries.len();
        self.entries[index] = Some(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::{Bound, Entry, TranspositionTable};
    use crate::{defs::{MoveFlag, Piece, PieceType, Square}, movegen::Move};

    #[test]
    fn round_trips_a_stored_entry() {
        let mut tt = TranspositionTable::with_size_mb(1);
        let mv = Move::new(Square::E2, Square::E4, Piece::WPAWN, MoveFlag::DOUBLE_PAWN_PUSH, PieceType::NONE);
        tt.store(Entry { key: 42, score: 100, best_move: mv, depth: 4, bound: Bound::Exact });

        let found = tt.probe(42).unwrap();
        assert_eq!(found.score, 100);
        assert_eq!(found.best_move, mv);
    }

    #[test]
    fn probe_misses_an_unstored_key() {
        let tt = TranspositionTable::with_size_mb(1);
        assert!(tt.probe(7).is_none());
    }
}
