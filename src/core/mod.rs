pub mod board;
pub mod config;
pub mod game;
pub mod ledger;
pub mod piece;
pub mod position;
