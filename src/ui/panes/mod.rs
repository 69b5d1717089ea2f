//! TUI pane rendering modules
//!
//! - [`steps`]: list of captured diagrams with the current selection
//! - [`diagram`]: the selected diagram, scrollable, with addresses highlighted
//! - [`status`]: status bar with keybindings and position
//!
//! Each module exports one `render_*` function that takes the frame, its area
//! and the state it draws; scroll offsets are passed by `&mut` so a pane can
//! clamp them to its own height.

pub mod diagram;
pub mod status;
pub mod steps;

pub use diagram::render_diagram_pane;
pub use status::render_status_bar;
pub use steps::render_steps_pane;
