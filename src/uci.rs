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

//! UCI command plumbing: reads stdin on a background thread, dispatches
//! commands to an [`Engine`], never touches search logic directly.

use std::{
    io::stdin,
    str::FromStr,
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc::{channel, RecvError},
        Arc,
    },
    thread::spawn,
    time::Duration,
};

use crate::{
    engine::{Engine, GoLimits},
    perft::perft,
};

const ID_NAME: &str = "Crab";
const ID_AUTHOR: &str = "Jasper Shovelton";
const ID_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Runs until stdin closes or `quit` is received.
///
/// Spawns a background thread that reads lines from stdin and forwards them
/// over an `mpsc::channel`, so a long-running `go` can still notice `stop`
/// without blocking on stdin itself.
pub fn main_loop() -> Result<(), RecvError> {
    let (tx, rx) = channel::<String>();
    let stop_signal = Arc::new(AtomicBool::new(false));

    {
        let stop_signal = Arc::clone(&stop_signal);
        spawn(move || {
            for line in stdin().lines() {
                let Ok(line) = line else { break };
                if matches!(line.trim(), "stop" | "quit") {
                    stop_signal.store(true, Ordering::Relaxed);
                }
                if tx.send(line).is_err() {
                    break;
                }
            }
        });
    }

    let mut engine = Engine::new();

    loop {
        let command = rx.recv()?;
        let mut tokens = command.split_whitespace();

        match tokens.next() {
            Some("uci") => {
                println!("id name {ID_NAME} {ID_VERSION}");
                println!("id author {ID_AUTHOR}");
                print_options();
                println!("uciok");
            }
            Some("isready") => println!("readyok"),
            Some("ucinewgame") => engine.new_game(),
            Some("position") => engine.set_position(tokens),
            Some("setoption") => set_option(tokens),
            Some("go") => {
                stop_signal.store(false, Ordering::Relaxed);
                let limits = parse_go(tokens);
                if let Some(depth) = limits.perft {
                    perft::<true, true>(engine.board_mut(), depth);
                } else {
                    engine.go(limits, &stop_signal);
                }
            }
            Some("stop") => {}
            Some("quit") => break Ok(()),
            Some(other) => println!("info string unrecognised command \"{other}\""),
            None => {}
        }
    }
}

/// Prints the options this engine supports. `Threads` is accepted but
/// pinned to 1; the core is single-threaded.
fn print_options() {
    println!("option name Hash type spin default 32 min 1 max 65536");
    println!("option name Threads type spin default 1 min 1 max 1");
    println!("option name Move Overhead type spin default 16 min 0 max 1000");
}

/// Parses a `setoption name <Name> value <V>` command. Malformed or unknown
/// options are silently ignored.
fn set_option<'a>(mut tokens: impl Iterator<Item = &'a str>) {
    if tokens.next() != Some("name") {
        return;
    }
    // Hash/Threads/Move Overhead are accepted for UCI compliance but not
    // wired into anything: there is no transposition table probe in this
    // search core and it never spawns more than one thread.
    let _ = tokens;
}

/// Parses a `go` command's tokens into [`GoLimits`].
fn parse_go<'a>(mut tokens: impl Iterator<Item = &'a str>) -> GoLimits {
    let mut limits = GoLimits::default();

    while let Some(token) = tokens.next() {
        let value = tokens.next();
        match token {
            "wtime" => limits.wtime = parse_millis(value),
            "btime" => limits.btime = parse_millis(value),
            "winc" => limits.winc = parse_millis(value),
            "binc" => limits.binc = parse_millis(value),
            "movestogo" => limits.movestogo = parse_number(value),
            "depth" => limits.depth = parse_number(value),
            "movetime" => limits.movetime = parse_millis(value),
            "infinite" => limits.infinite = true,
            "perft" => limits.perft = parse_number(value),
            _ => {}
        }
    }
    limits
}

fn parse_number<T: FromStr>(value: Option<&str>) -> Option<T> {
    value.and_then(|v| v.parse().ok())
}

fn parse_millis(value: Option<&str>) -> Option<Duration> {
    parse_number::<i64>(value).map(|ms| Duration::from_millis(ms.max(0) as u64))
}
