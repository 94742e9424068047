//! The in-progress booking selection.
//!
//! Pointer events on the calendar grid drive a small state machine:
//! press starts a selection, drag stretches it, release opens the
//! description form, reset abandons the lot. Transitions the current
//! state does not define are rejected with a [`DraftError`] and leave
//! the draft untouched.

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::court::CourtRef;
use crate::error::{DraftError, DraftResult};

/// One interval on the calendar grid: court, date, start and end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub court: CourtRef,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Slot {
    /// Signed span of the slot. Zero while the pointer has not moved
    /// off its press cell.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

/// Client-side draft of a booking being constructed by slot selection.
///
/// The slot only exists in the non-idle states, so "all fields set or
/// none" holds by construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BookingDraft {
    /// No selection in progress.
    #[default]
    Idle,
    /// Pointer held down, dragging within one day column.
    Selecting {
        slot: Slot,
        /// The cell the pointer went down on. Dragging past it in either
        /// direction keeps `start <= end`.
        anchor: NaiveTime,
    },
    /// A fully bounded slot, open in a form awaiting description and
    /// confirmation.
    Editing { slot: Slot, description: String },
}

impl BookingDraft {
    /// Pointer-down on a grid cell: start selecting from that cell.
    ///
    /// A press while a selection or form is already open abandons it
    /// first; the draft never mixes court/date pairs from two gestures.
    pub fn press(&mut self, court: CourtRef, date: NaiveDate, time: NaiveTime) {
        *self = BookingDraft::Selecting {
            slot: Slot {
                court,
                date,
                start: time,
                end: time,
            },
            anchor: time,
        };
    }

    /// Pointer-move onto another cell while selecting.
    ///
    /// The dragged edge and the anchor are normalized so `start <= end`
    /// whichever direction the user drags. Moves into another day
    /// column are rejected.
    pub fn drag(&mut self, date: NaiveDate, time: NaiveTime) -> DraftResult<()> {
        match self {
            BookingDraft::Selecting { slot, anchor } => {
                if date != slot.date {
                    return Err(DraftError::ColumnMismatch);
                }
                if time >= *anchor {
                    slot.start = *anchor;
                    slot.end = time;
                } else {
                    slot.start = time;
                    slot.end = *anchor;
                }
                Ok(())
            }
            _ => Err(DraftError::InvalidTransition("drag")),
        }
    }

    /// Pointer-up: freeze the slot and open the description form.
    ///
    /// A selection that never left its press cell spans no time and
    /// stays in `Selecting`.
    pub fn release(&mut self) -> DraftResult<()> {
        match self {
            BookingDraft::Selecting { slot, .. } => {
                if slot.duration() <= Duration::zero() {
                    return Err(DraftError::EmptySelection);
                }
                *self = BookingDraft::Editing {
                    slot: slot.clone(),
                    description: String::new(),
                };
                Ok(())
            }
            _ => Err(DraftError::InvalidTransition("release")),
        }
    }

    /// Update the description while the form is open.
    pub fn edit_description(&mut self, text: impl Into<String>) -> DraftResult<()> {
        match self {
            BookingDraft::Editing { description, .. } => {
                *description = text.into();
                Ok(())
            }
            _ => Err(DraftError::InvalidTransition("describe")),
        }
    }

    /// Cancel, successful submit, or navigation away: back to idle with
    /// every field cleared.
    pub fn reset(&mut self) {
        *self = BookingDraft::Idle;
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, BookingDraft::Idle)
    }

    /// The selected slot, in any non-idle state.
    pub fn slot(&self) -> Option<&Slot> {
        match self {
            BookingDraft::Idle => None,
            BookingDraft::Selecting { slot, .. } => Some(slot),
            BookingDraft::Editing { slot, .. } => Some(slot),
        }
    }

    /// Elapsed time between start and end; defined exactly when a slot
    /// exists. Recomputed on read, never cached.
    pub fn duration(&self) -> Option<Duration> {
        self.slot().map(Slot::duration)
    }

    /// Check the submission precondition: a released slot with a
    /// positive span. Violations are caller errors, failed fast rather
    /// than coerced.
    pub fn submittable(&self) -> DraftResult<(&Slot, &str)> {
        match self {
            BookingDraft::Editing { slot, description } => {
                if slot.duration() <= Duration::zero() {
                    return Err(DraftError::EmptySelection);
                }
                Ok((slot, description))
            }
            _ => Err(DraftError::NotSubmittable),
        }
    }
}
