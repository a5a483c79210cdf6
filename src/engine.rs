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

//! Owns the board across UCI commands and translates `go` into a call into
//! [`crate::search`]. No search logic lives here.

use std::{
    sync::{atomic::AtomicBool, Arc},
    time::Duration,
};

use crate::{
    board::Board,
    defs::{MoveFlag, PieceType, Side, Square},
    movegen::{self, Move},
    params::Params,
    search::{self, pv::Pv, SearchInfo},
};

/// The default depth a `go` with no depth/time control searches to.
const DEFAULT_MAX_DEPTH: u8 = 64;

/// Parsed `go` parameters: whichever subset of the UCI `go` options the
/// caller sent.
#[derive(Clone, Copy, Default)]
pub struct GoLimits {
    pub depth: Option<u8>,
    pub movetime: Option<Duration>,
    pub wtime: Option<Duration>,
    pub btime: Option<Duration>,
    pub winc: Option<Duration>,
    pub binc: Option<Duration>,
    pub movestogo: Option<u32>,
    pub infinite: bool,
    pub perft: Option<u8>,
}

impl GoLimits {
    /// A rough per-move time slice from the remaining clock and increment
    /// for `side`, assuming `movestogo` moves left if it wasn't given.
    fn time_budget_for(&self, side: Side) -> Option<Duration> {
        if self.infinite {
            return None;
        }
        let (time, inc) = match side {
            Side::WHITE => (self.wtime, self.winc),
            Side::BLACK => (self.btime, self.binc),
        };
        let time = time?;
        let moves_to_go = self.movestogo.unwrap_or(30).max(1);
        Some(time / moves_to_go + inc.unwrap_or_default())
    }
}

/// Holds the current position and the fixed evaluation/search parameters.
pub struct Engine {
    board: Board,
    params: Params,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine sitting at the start position.
    #[must_use]
    pub fn new() -> Self {
        Self { board: Board::start_position(), params: Params::default_values() }
    }

    /// Resets to the start position, as `ucinewgame` requires.
    pub fn new_game(&mut self) {
        self.board = Board::start_position();
    }

    /// The current position.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// The current position, mutably; used by `go perft <depth>`.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Rebuilds the position from a `position` command's tokens:
    /// `startpos|fen <fen>` followed by an optional `moves <uci>...`.
    ///
    /// Leaves the current position untouched if anything fails to parse.
    pub fn set_position<'a>(&mut self, mut tokens: impl Iterator<Item = &'a str>) {
        let Some(mut board) = (match tokens.next() {
            Some("startpos") => Some(Board::start_position()),
            Some("fen") => {
                let fen = tokens.by_ref().take(6).collect::<Vec<_>>().join(" ");
                Board::from_fen(&fen).ok()
            }
            _ => None,
        }) else {
            return;
        };

        match tokens.next() {
            Some("moves") => {}
            Some(_) => return,
            None => {
                self.board = board;
                return;
            }
        }

        for token in tokens {
            let Some(mv) = parse_move(token, &board) else { return };
            if !board.make_move(mv) {
                return;
            }
        }

        self.board = board;
    }

    /// Runs a search under `limits`, printing `info`/`bestmove` lines, and
    /// returns the principal variation found.
    pub fn go(&mut self, limits: GoLimits, stop_signal: &Arc<AtomicBool>) -> Pv {
        let deadline = limits.movetime.or_else(|| limits.time_budget_for(self.board.side_to_move()));
        let max_depth = limits.depth.unwrap_or(DEFAULT_MAX_DEPTH).min(search::MAX_PLY as u8 - 1);

        let mut info = SearchInfo::with_stop_signal(deadline, Arc::clone(stop_signal));
        search::search(&mut self.board, max_depth, &mut info, &self.params)
    }
}

/// Matches a UCI long-algebraic move string (e.g. `e2e4`, `e7e8q`) against
/// the position's pseudo-legal moves, recovering the packed flags a bare
/// from/to string can't carry (castling, en passant, promotion piece).
fn parse_move(uci: &str, board: &Board) -> Option<Move> {
    if uci.len() < 4 {
        return None;
    }
    let from: Square = uci.get(0..2)?.parse().ok()?;
    let to: Square = uci.get(2..4)?.parse().ok()?;
    let promotion = uci.get(4..5).and_then(|s| s.chars().next()).and_then(|c| PieceType::try_from(c).ok());

    movegen::generate(board, false).into_iter().find(|mv| {
        mv.from() == from
            && mv.to() == to
            && match promotion {
                Some(pt) => mv.promotion_piece_type() == pt,
                None => !matches!(mv.flag(), MoveFlag::PROMOTION | MoveFlag::CAPTURE_PROMOTION),
            }
    })
}

#[cfg(test)]
mod tests {
    use super::{parse_move, Engine};
    use crate::board::Board;

    #[test]
    fn parses_a_quiet_move() {
        let board = Board::start_position();
        let mv = parse_move("e2e4", &board).unwrap();
        assert_eq!(mv.to_string(), "e2e4");
    }

    #[test]
    fn parses_a_promotion() {
        let board = Board::from_fen("8/P6k/8/8/8/8/7K/8 w - - 0 1").unwrap();
        let mv = parse_move("a7a8q", &board).unwrap();
        assert_eq!(mv.to_string(), "a7a8q");
    }

    #[test]
    fn set_position_replays_moves_from_startpos() {
        let mut engine = Engine::new();
        engine.set_position(["startpos", "moves", "e2e4", "e7e5"].into_iter());
        assert_eq!(engine.board().to_fen().split(' ').next().unwrap(), "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR");
    }
}
