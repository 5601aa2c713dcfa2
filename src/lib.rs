//! Two-player 1-D ping-pong for an ATmega128 board
//!
//! A ball travels along a serial-terminal track between two walls. Each
//! player returns it with their button while it is in their zone; a ball
//! that reaches a wall scores for the opponent. Everything above [`hal`] is
//! written against `embedded-hal` traits and runs on the host in tests.

#![cfg_attr(not(test), no_std)]

pub mod application;
pub mod board;
pub mod config;
pub mod drivers;
pub mod error;
pub mod game;
pub mod logger;
pub mod os;
pub mod pause;
pub mod presentation;
pub mod summary;

#[cfg(target_arch = "avr")]
pub mod hal;

#[cfg(test)]
mod testing;

pub use application::Application;
pub use board::Board;
pub use error::GameError;
