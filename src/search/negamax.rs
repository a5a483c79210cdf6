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

//! Fail-soft negamax with alpha-beta pruning over the pseudo-legal move
//! list, filtering illegality as it goes via make/unmake.

use crate::{board::Board, movegen, ordering, params::Params};

use super::{
    quiescence::qsearch,
    pv::{self, Pv},
    SearchInfo, INFINITY, MATE,
};

/// Searches `board` to `depth` plies, returning a score from the side to
/// move's perspective. Falls through to [`qsearch`] at the horizon.
pub fn negamax(board: &mut Board, mut alpha: i32, beta: i32, depth: u8, info: &mut SearchInfo, pv: &mut Pv, params: &Params) -> i32 {
    pv.clear();

    info.check_time();
    if info.stopped {
        return 0;
    }

    if depth == 0 {
        return qsearch(board, alpha, beta, info, pv, params);
    }

    let mut moves = movegen::generate(board, false);
    ordering::order_moves(&mut moves, board);

    let mut best = -INFINITY;
    let mut legal = 0_u32;
    let mut child_pv = Pv::new();

    for mv in moves {
        let made = board.make_move(mv);
        if !made {
            board.unmake_move(mv, false);
            continue;
        }

        info.nodes += 1;
        info.ply += 1;
        legal += 1;

        let score = -negamax(board, -beta, -alpha, depth - 1, info, &mut child_pv, params);
        board.unmake_move(mv, true);
        info.ply -= 1;

        if info.stopped {
            return 0;
        }

        if score > best {
            best = score;
            if score > alpha {
                alpha = score;
                pv::extend(pv, mv, &child_pv, score);
            }
            if score >= beta {
                pv.score = score;
                return score;
            }
        }
    }

    if legal == 0 {
        let terminal = if board.is_in_check(board.side_to_move()) { -MATE + info.ply as i32 } else { 0 };
        pv.score = terminal;
        return terminal;
    }

    pv.score = best;
    best
}

#[cfg(test)]
mod tests {
    use super::negamax;
    use crate::{board::Board, params::Params, search::{SearchInfo, INFINITY}};

    #[test]
    fn finds_mate_in_one() {
        // White to move, Qe1-e8 delivers back-rank mate.
        let mut board = Board::from_fen("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1").unwrap();
        let mut info = SearchInfo::new(None);
        let mut pv = super::Pv::new();
        let params = Params::default_values();

        let score = negamax(&mut board, -INFINITY, INFINITY, 2, &mut info, &mut pv, &params);
        assert_eq!(score, super::MATE - 1);
        assert_eq!(pv.len(), 1);
    }

    #[test]
    fn stalemate_scores_as_a_draw() {
        let mut board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        let mut info = SearchInfo::new(None);
        let mut pv = super::Pv::new();
        let params = Params::default_values();

        let score = negamax(&mut board, -INFINITY, INFINITY, 1, &mut info, &mut pv, &params);
        assert_eq!(score, 0);
    }

    #[test]
    fn zero_depth_defers_to_quiescence() {
        let mut board = Board::start_position();
        let mut info = SearchInfo::new(None);
        let mut pv = super::Pv::new();
        let params = Params::default_values();

        let score = negamax(&mut board, -INFINITY, INFINITY, 0, &mut info, &mut pv, &params);
        assert_eq!(score, crate::evaluation::evaluate(&board, &params));
    }
}
