#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![no_std]

extern crate alloc;

pub mod touch;

pub use glam::Vec2;

/// The `mobile_event` prelude.
pub mod prelude {
    #[doc(hidden)]
    pub use crate::{
        touch::{TouchEvent, TouchPhase, TouchPhaseError, TouchSequence, UnknownTouchPhase},
        Vec2,
    };
}
