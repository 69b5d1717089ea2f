//! Terminal viewer built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! - **[`app`]**: viewer state, keyboard event loop, pane focus
//! - **[`panes`]**: stateless render functions for the step list, the diagram
//!   and the status bar
//! - **[`theme`]**: color palette shared by all panes
//!
//! Construct an [`App`] from a [`Transcript`] and call [`App::run`].
//!
//! [`Transcript`]: crate::transcript::Transcript
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
