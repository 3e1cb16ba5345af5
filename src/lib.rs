pub mod backend;
pub mod chat;
pub mod config;
pub mod contact;
pub mod content;
pub mod logging;
pub mod state;
pub mod theme;
pub mod types;
pub mod ui;
pub mod views;
