//! gridblast-engine - board primitives, placement generation and game rules.

pub mod apply;
pub mod collision;
pub mod config;
pub mod dealer;
pub mod game;
pub mod movegen;
pub mod perft;

pub use apply::{apply_move, apply_placement, clear_completed_lines};
pub use collision::{collides, in_bounds, is_valid_placement};
pub use config::ScoreRules;
pub use dealer::Dealer;
pub use game::{Game, MoveError, MoveReport};
pub use movegen::{
    can_any_piece_be_placed, can_place_anywhere, count_placements, generate_placements,
    PlacementList, MAX_PLACEMENTS,
};
pub use perft::{perft, perft_cached, perft_parallel, PerftCache};
