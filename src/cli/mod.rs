//! CLI infrastructure for the terminal front-end
//!
//! This module provides the command-line interface for interactive play,
//! position analysis, and batch self-play.

pub mod commands;
pub mod output;
