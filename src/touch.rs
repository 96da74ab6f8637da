//! The touch input functionality.
//!
//! The best sources on platform touch input are the Android NDK
//! (`include/android/input.h`) and the iOS event handling guide.

use alloc::{borrow::Cow, format};
use core::fmt;

use glam::Vec2;
use thiserror::Error;
use tracing::warn;

/// Identifies a sequence of touch events.
///
/// ## Usage
///
/// Every [`TouchEvent`] of one finger's contact with the screen, from the first
/// [`TouchPhase::Start`] to the final [`TouchPhase::End`], carries the same
/// [`TouchSequence`]. It distinguishes concurrent sequences.
///
/// ## Note
///
/// A value is reused once its sequence has ended, so it is unique only among
/// the sequences that are currently open. Producers must not reuse a value
/// before emitting the `End` of the previous sequence; this type does not
/// check it.
#[derive(Debug, Copy, Clone, Default, PartialOrd, Ord, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct TouchSequence(pub i64);

impl From<i64> for TouchSequence {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<TouchSequence> for i64 {
    fn from(value: TouchSequence) -> Self {
        value.0
    }
}

impl fmt::Display for TouchSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A raw phase tag outside of the defined phases.
///
/// Only [`TouchPhase::from_raw`] and the `From<u8>` conversion create one, so
/// the tag is never `0`, `1` or `2` and every wire tag has exactly one
/// [`TouchPhase`].
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub struct UnknownTouchPhase(u8);

impl UnknownTouchPhase {
    /// Returns the raw wire tag.
    pub fn tag(self) -> u8 {
        self.0
    }
}

impl fmt::Display for UnknownTouchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "touch.Type({})", self.0)
    }
}

/// A phase of a [`TouchEvent`].
///
/// On the wire the phase is a `u8` tag: `0` for [`Start`](TouchPhase::Start),
/// `1` for [`Move`](TouchPhase::Move) and `2` for [`End`](TouchPhase::End).
/// Any other tag is kept as [`Unknown`](TouchPhase::Unknown) instead of being
/// rejected, so decoding and rendering never fail.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "u8", into = "u8")
)]
pub enum TouchPhase {
    /// A user first touching the device.
    ///
    /// On Android, this is an `AMOTION_EVENT_ACTION_DOWN`.
    /// On iOS, this is a call to `touchesBegan`.
    Start,
    /// A user dragging across the device.
    ///
    /// A [`TouchPhase::Move`] is delivered between a [`TouchPhase::Start`] and
    /// a [`TouchPhase::End`].
    ///
    /// On Android, this is an `AMOTION_EVENT_ACTION_MOVE`.
    /// On iOS, this is a call to `touchesMoved`.
    Move,
    /// A user no longer touching the device.
    ///
    /// On Android, this is an `AMOTION_EVENT_ACTION_UP`.
    /// On iOS, this is a call to `touchesEnded`.
    End,
    /// A raw tag outside of the defined phases.
    Unknown(UnknownTouchPhase),
}

impl TouchPhase {
    /// Decodes a raw phase tag.
    ///
    /// Tags outside of `0..=2` become [`TouchPhase::Unknown`] and are logged.
    pub fn from_raw(raw: u8) -> Self {
        let phase = Self::decode(raw);
        if let TouchPhase::Unknown(unknown) = phase {
            warn!(tag = unknown.tag(), "Unknown touch phase tag");
        }
        phase
    }

    /// Decodes a raw phase tag, rejecting tags outside of `0..=2`.
    pub fn try_from_raw(raw: u8) -> Result<Self, TouchPhaseError> {
        match Self::decode(raw) {
            TouchPhase::Unknown(unknown) => Err(TouchPhaseError::Unknown(unknown.tag())),
            phase => Ok(phase),
        }
    }

    fn decode(raw: u8) -> Self {
        match raw {
            0 => TouchPhase::Start,
            1 => TouchPhase::Move,
            2 => TouchPhase::End,
            unknown => TouchPhase::Unknown(UnknownTouchPhase(unknown)),
        }
    }

    /// Returns the raw wire tag of this phase.
    pub fn raw(self) -> u8 {
        match self {
            TouchPhase::Start => 0,
            TouchPhase::Move => 1,
            TouchPhase::End => 2,
            TouchPhase::Unknown(unknown) => unknown.tag(),
        }
    }

    /// Returns `true` unless this is a [`TouchPhase::Unknown`].
    pub fn is_known(self) -> bool {
        !matches!(self, TouchPhase::Unknown(_))
    }

    /// Returns a human-readable name of the phase.
    ///
    /// This is `"start"`, `"move"` or `"end"` for the defined phases and
    /// `"touch.Type(<tag>)"` for an unknown tag.
    pub fn describe(self) -> Cow<'static, str> {
        match self {
            TouchPhase::Start => Cow::Borrowed("start"),
            TouchPhase::Move => Cow::Borrowed("move"),
            TouchPhase::End => Cow::Borrowed("end"),
            TouchPhase::Unknown(unknown) => Cow::Owned(format!("{unknown}")),
        }
    }
}

/// Decodes a raw phase tag like [`TouchPhase::from_raw`], without logging.
///
/// Deserialization goes through this conversion.
impl From<u8> for TouchPhase {
    fn from(value: u8) -> Self {
        Self::decode(value)
    }
}

impl From<TouchPhase> for u8 {
    fn from(value: TouchPhase) -> Self {
        value.raw()
    }
}

impl fmt::Display for TouchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

/// Errors that occur when strictly decoding a touch phase.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhaseError {
    /// The given tag is not one of the defined phases.
    #[error("unknown touch phase tag {0}, expected 0 (start), 1 (move) or 2 (end)")]
    Unknown(u8),
}

/// A touch input event.
///
/// ## Usage
///
/// A platform input layer creates one [`TouchEvent`] per touch callback and
/// hands it to application code. All events of one contact share a
/// [`TouchSequence`]: a sequence starts with a single [`TouchPhase::Start`],
/// is followed by zero or more [`TouchPhase::Move`] and ends with a single
/// [`TouchPhase::End`]. Producers are responsible for that ordering.
///
/// The coordinate space of [`location`](TouchEvent::location) is defined by the
/// producer. No unit, origin or scale is implied.
///
/// ```
/// # use mobile_event::prelude::*;
/// let event = TouchEvent::new(42, TouchPhase::Start, Vec2::new(3.5, 7.2));
/// assert_eq!(event.sequence, TouchSequence(42));
/// assert_eq!(event.phase.describe(), "start");
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct TouchEvent {
    /// The touch sequence this event belongs to.
    pub sequence: TouchSequence,
    /// The phase of the sequence this event represents.
    pub phase: TouchPhase,
    /// Where the touch happened.
    pub location: Vec2,
}

impl TouchEvent {
    /// Creates a [`TouchEvent`].
    pub fn new(sequence: impl Into<TouchSequence>, phase: TouchPhase, location: Vec2) -> Self {
        Self {
            sequence: sequence.into(),
            phase,
            location,
        }
    }

    /// Creates a [`TouchEvent`] from raw wire values.
    ///
    /// The phase tag is decoded with [`TouchPhase::from_raw`], so an unknown
    /// tag is kept rather than rejected.
    ///
    /// ```
    /// # use mobile_event::prelude::*;
    /// let event = TouchEvent::from_raw(7, 99, Vec2::ZERO);
    /// assert_eq!(event.phase.raw(), 99);
/// assert!(!event.phase.is_known());
    /// assert!(event.validate().is_err());
    /// ```
    pub fn from_raw(sequence: i64, phase: u8, location: Vec2) -> Self {
        Self::new(sequence, TouchPhase::from_raw(phase), location)
    }

    /// Returns the event unchanged if its phase is one of the defined phases.
    pub fn validate(self) -> Result<Self, TouchPhaseError> {
        match self.phase {
            TouchPhase::Unknown(unknown) => Err(TouchPhaseError::Unknown(unknown.tag())),
            _ => Ok(self),
        }
    }

    /// Returns `true` if this event starts its sequence.
    pub fn is_start(&self) -> bool {
        self.phase == TouchPhase::Start
    }

    /// Returns `true` if this event moves within its sequence.
    pub fn is_move(&self) -> bool {
        self.phase == TouchPhase::Move
    }

    /// Returns `true` if this event ends its sequence.
    pub fn is_end(&self) -> bool {
        self.phase == TouchPhase::End
    }
}

impl fmt::Display for TouchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "touch.Event{{Sequence:{}, Type:{}, Loc:({:.2}, {:.2})}}",
            self.sequence, self.phase, self.location.x, self.location.y
        )
    }
}
