//! Crate root module declarations for the Plum Checkers rule engine.
//!
//! This file exposes the board model, the move rules (validation,
//! enumeration, termination, perft), the `RuleEngine` that ties them
//! together, and the text tooling around it (layout parsing, rendering, click
//! routing, random playouts) so binaries, tests and benchmarks can import
//! stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod checkers_rules;
    pub mod checkers_types;
    pub mod turn_state;
}

pub mod move_generation {
    pub mod move_enumeration;
    pub mod move_validation;
    pub mod perft;
    pub mod termination;
}

pub mod engine {
    pub mod config;
    pub mod rule_engine;
}

pub mod utils {
    pub mod board_generator;
    pub mod board_parser;
    pub mod click_handler;
    pub mod random_playout;
    pub mod render_board;
}
