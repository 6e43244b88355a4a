//! The tournament sign-up page: a player-name grid plus add, reset and generate controls,
//! composed entirely through `dom_factory`.

mod config;
mod error;
mod page;
mod players;

pub use config::PageConfig;
pub use error::PageError;
pub use page::{BracketPage, Command, CommandOutcome};
pub use players::{Entrant, build_player_row, gather_entrants, player_input_id};
