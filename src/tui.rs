//! Interactive odds calculator for the terminal.

pub mod app;
pub mod controller;
mod ui;
