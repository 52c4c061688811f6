//! HealthCycle Engine library.
//!
//! Server-side code for tracking player character hit points.
//!
//! ## Structure
//!
//! - `use_cases/` - Load, apply health rules, persist
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
