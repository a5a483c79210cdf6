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

//! The incremental material+PSQT baseline that [`super::Board`] maintains as
//! pieces come and go, so [`crate::evaluation::evaluate`] never has to walk
//! the whole board to compute it from scratch.

use lazy_static::lazy_static;

use crate::{
    defs::{Piece, Square},
    evaluation::{tables::create_piece_square_tables, Score},
    index_unchecked,
};

lazy_static! {
    static ref PIECE_SQUARE_TABLES: [[Score; Square::TOTAL]; Piece::TOTAL + 1] =
        create_piece_square_tables();
}

/// The (opening, endgame) contribution of `piece` standing on `square`,
/// signed so White's pieces are positive and Black's are negative.
pub fn piece_square_value(piece: Piece, square: Square) -> Score {
    index_unchecked!(PIECE_SQUARE_TABLES[piece.to_index()], square.to_index())
}
