//! Application layer for Heartline.
//!
//! Composes the domain types from `heartline_core` into the running client:
//! the root shell reducer, the mounted feature views and the cancellable
//! Rizz AI suggestion task.

pub mod app;
pub mod rizz;
pub mod shell;
pub mod views;

pub use app::{App, Services};
pub use rizz::RizzAi;
pub use shell::{ActiveView, ShellCommand, ShellEvent, ShellState};
pub use views::MountedView;
