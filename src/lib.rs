//! Crate root module declarations for the Quince Chess position core.
//!
//! This file exposes all top-level subsystems (board model, move generation,
//! notation handling, and utility helpers) so host applications, tests, and
//! benchmarks can import stable module paths. The crate is a self-contained
//! rules core: it owns board positions, pseudo-legal move generation,
//! check/checkmate detection, and FEN/LAN serialization, and nothing else.
//! Rendering, networking, and persistence belong to the embedding
//! application, which talks to this crate through `Position` values and the
//! FEN/LAN string pair.

pub mod board {
    pub mod chess_move;
    pub mod chess_rules;
    pub mod coordinate;
    pub mod piece;
    pub mod position;
}

pub mod move_generation {
    pub mod check;
    pub mod king_moves;
    pub mod move_grid;
    pub mod pawn_moves;
    pub mod ray_moves;
}

pub mod notation {
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
}

pub mod utils {
    pub mod render_position;
}

pub mod errors;
