pub mod compute;
pub mod config;
pub mod entities;
pub mod menu;
pub mod viewport;
