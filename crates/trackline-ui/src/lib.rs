//! Trackline UI - egui rendering of the timeline engine
//!
//! Provides:
//! - The timeline view (toolbar, track headers, lanes, clips, guides)
//! - Header widgets for track flags and levels
//! - The dark theme and clip color parsing

pub mod theme;
pub mod timeline;
pub mod widgets;

pub use theme::{parse_hex_color, Theme};
pub use timeline::{drop_target, show_timeline, RenameTarget, TimelineViewState};
