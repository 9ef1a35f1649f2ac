//! Trackline Timeline - track and clip data model
//!
//! - Tracks holding clips in insertion order
//! - `TrackStore`, the single owner and writer of tracks and clips
//! - Single track/clip selection kept consistent across moves and removals
//! - Store mutations as named, serializable edits

pub mod clip;
pub mod edit;
pub mod selection;
pub mod store;
pub mod track;

pub use clip::{Clip, ClipId, ClipSpec, CLIP_ID_STRIDE};
pub use edit::TimelineEdit;
pub use selection::Selection;
pub use store::TrackStore;
pub use track::{Track, TrackId, TrackKind};
