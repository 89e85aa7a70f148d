//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Sweep: Removes expired cache entries and idle rate-limit windows at
//!   configured intervals

mod sweeper;

pub use sweeper::spawn_sweeper_task;
