pub mod cli;
pub mod command;
pub mod config;
pub mod constant;
pub mod progress;
pub mod table;
pub mod zfs;
