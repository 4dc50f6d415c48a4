//! Retro snake: a fixed-grid snake game split into a pure tick-driven engine
//! and a thin terminal shell.
//!
//! The engine ([`game`], [`snake`], [`food`], [`input`]) knows nothing about
//! terminals. It consumes latched directional input and a tick signal, and
//! produces renderable state (body cells, food cell, score, run status) plus
//! per-tick event signals. The shell ([`renderer`], [`ui`],
//! [`terminal_runtime`], the binary) maps that state onto a ratatui frame and
//! the events onto side effects.

pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
