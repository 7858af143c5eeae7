//! Fruit Grader CLI
//!
//! 共通ワークフローを端末から操作するためのモジュール群

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod preview;
pub mod report;
pub mod scanner;
pub mod session;
