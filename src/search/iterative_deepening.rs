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

//! The driving loop: deepen one ply at a time, narrowing the search window
//! around the previous iteration's score once it's trustworthy enough to
//! bet on.

use crate::{board::Board, params::Params};

use super::{negamax::negamax, pv::{format_pv, Pv}, SearchInfo, INFINITY};

/// The depth at which the previous iteration's score is trusted enough to
/// aspirate the window around it, rather than searching the full range.
const ASPIRATION_MIN_DEPTH: u8 = 4;

const INITIAL_DELTA: i32 = 10;

/// Runs iterative deepening up to `max_depth`, printing one UCI `info` line
/// per completed iteration and a final `bestmove`. Returns the deepest
/// complete iteration's principal variation.
#[allow(clippy::missing_inline_in_public_items)]
pub fn search(board: &mut Board, max_depth: u8, info: &mut SearchInfo, params: &Params) -> Pv {
    let mut best_pv = Pv::new();
    let mut score = 0;

    for depth in 1..=max_depth {
        let mut delta = INITIAL_DELTA;
        let (mut alpha, mut beta) =
            if depth >= ASPIRATION_MIN_DEPTH { (score - delta, score + delta) } else { (-INFINITY, INFINITY) };

        let mut pv = Pv::new();
        let result = loop {
            info.ply = 0;
            let result = negamax(board, alpha, beta, depth, info, &mut pv, params);
            if info.stopped {
                break result;
            }
            if alpha < result && result < beta {
                break result;
            }
            if result <= alpha {
                beta = (alpha + beta) / 2;
                alpha = (alpha - delta).max(-INFINITY);
            } else {
                beta = (beta + delta).min(INFINITY);
            }
            delta += delta / 2;
        };

        if info.stopped {
            break;
        }

        score = result;
        best_pv = pv;
        println!(
            "info score cp {score} depth {depth} nodes {nodes} time {time} pv {pv_str}",
            nodes = info.nodes,
            time = info.elapsed().as_millis(),
            pv_str = format_pv(&best_pv),
        );
    }

    match best_pv.first() {
        Some(mv) => println!("bestmove {mv}"),
        None => println!("bestmove 0000"),
    }

    best_pv
}

#[cfg(test)]
mod tests {
    use super::search;
    use crate::{board::Board, params::Params, search::SearchInfo};

    #[test]
    fn finds_an_immediate_mate() {
        let mut board = Board::from_fen("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1").unwrap();
        let mut info = SearchInfo::new(None);
        let params = Params::default_values();

        let pv = search(&mut board, 2, &mut info, &params);
        assert_eq!(pv.len(), 1);
        assert_eq!(pv[0].to_string(), "e1e8");
    }
}
