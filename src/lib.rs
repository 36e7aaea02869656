pub mod api;
pub mod cli;
pub mod config;
pub mod meme;
pub mod roast;
pub mod session;
pub mod speech;
pub mod utils;
