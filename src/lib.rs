//! In-memory editing of interleaved floating-point audio.
//!
//! An [`AudioClip`] holds samples and their format, an [`AudioEditor`]
//! applies edits to a clip, and [`ResampleJob`] packages everything a
//! sample-rate converter needs for one whole-buffer conversion. The
//! interpolation itself is supplied by the caller through the
//! [`ResampleEngine`] trait; this crate only prepares and wires up the
//! buffers.

pub mod clip;
pub mod editor;
pub mod format;
pub mod resample;

pub use clip::AudioClip;
pub use editor::AudioEditor;
pub use format::AudioFormat;
pub use resample::{ResampleEngine, ResampleJob};
