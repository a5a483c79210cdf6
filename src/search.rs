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

//! Quiescence, negamax and the iterative-deepening loop that drives them.
//! Single-threaded: make/unmake mutate one shared [`crate::board::Board`] in
//! place, and the only suspension point is the periodic clock check.

/// Iterative deepening with aspiration windows; the entry point.
pub mod iterative_deepening;
/// Fail-soft negamax alpha-beta.
mod negamax;
/// The principal variation line and its UCI rendering.
pub mod pv;
/// The capture-only leaf extension.
mod quiescence;

use std::{
    sync::{atomic::{AtomicBool, Ordering}, Arc},
    time::{Duration, Instant},
};

/// A large-but-finite score reserved for mate, comfortably clear of any
/// realistic material+positional evaluation.
pub const MATE: i32 = 32_000;

/// One past [`MATE`]; the widest alpha-beta window ever needed.
pub const INFINITY: i32 = MATE + 1;

/// The deepest ply quiescence search will recurse to before trusting the
/// static evaluation outright.
pub const MAX_PLY: usize = 128;

/// Per-search bookkeeping threaded through every negamax and quiescence
/// frame: node count, current ply, and the cooperative stop flag that
/// unwinds the whole tree once time runs out.
pub struct SearchInfo {
    /// Total nodes visited so far this search.
    pub nodes: u64,
    /// Distance from the search root, in plies.
    pub ply: usize,
    /// Set once the deadline has passed; every frame checks this on its way
    /// out and returns a sentinel score without touching its PV.
    pub stopped: bool,
    start: Instant,
    deadline: Option<Duration>,
    stop_signal: Option<Arc<AtomicBool>>,
}

impl SearchInfo {
    /// Starts a fresh search clock. `deadline` of `None` means search only
    /// stops when `max_depth` is exhausted.
    #[must_use]
    pub fn new(deadline: Option<Duration>) -> Self {
        Self { nodes: 0, ply: 0, stopped: false, start: Instant::now(), deadline, stop_signal: None }
    }

    /// Like [`Self::new`], but also polled for an externally-set stop
    /// request (e.g. a UCI `stop`/`quit` command) on the same cadence as
    /// the deadline check.
    #[must_use]
    pub fn with_stop_signal(deadline: Option<Duration>, stop_signal: Arc<AtomicBool>) -> Self {
        Self { nodes: 0, ply: 0, stopped: false, start: Instant::now(), deadline, stop_signal: Some(stop_signal) }
    }

    /// Wall-clock time elapsed since this search began.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Checks the deadline and any external stop signal every 2048 nodes,
    /// setting `stopped` on overshoot. Coarser than checking every node; the
    /// cost of overshoot is bounded by one subtree traversal.
    pub fn check_time(&mut self) {
        if self.nodes % 2048 != 0 {
            return;
        }
        if let Some(stop_signal) = &self.stop_signal {
            if stop_signal.load(Ordering::Relaxed) {
                self.stopped = true;
                return;
            }
        }
        if let Some(deadline) = self.deadline {
            if self.start.elapsed() >= deadline {
                self.stopped = true;
            }
        }
    }
}

pub use iterative_deepening::search;
