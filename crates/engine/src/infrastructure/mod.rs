//! Infrastructure - ports and the adapters behind them.

pub mod clock;
pub mod config;
pub mod ports;
pub mod seed;
pub mod sqlite;
