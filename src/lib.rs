pub mod comments;
pub mod config;
pub mod shared;
pub mod tickets;
pub mod web_server;
