//! What the page does in response to a door activation or a reset request.
//!
//! Kept free of browser calls so the decisions can be checked natively; the
//! `App` component only applies the returned [`Feedback`] to its state handles.

use advent_core::{Activation, AdventCalendar, CalendarError, DayRecord, KeyValueStore};
use std::cell::Cell;
use std::rc::Rc;

/// Visible reaction to one door activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// The door is still locked: shake it, change nothing else.
    Shake(u8),
    /// Bounce the door and show its reward, whether or not it was opened before.
    Reveal { day: u8, record: DayRecord },
    /// The model refused the change; report it and leave the page as it was.
    Failed(String),
}

/// Activate `day` on the model and decide how the page reacts.
pub fn activate_door<S>(calendar: &mut AdventCalendar<S>, day: u8) -> Feedback
where
    S: KeyValueStore,
{
    feedback_for(day, calendar.activate(day))
}

fn feedback_for(day: u8, outcome: Result<Activation, CalendarError>) -> Feedback {
    match outcome {
        Ok(Activation::Rejected(_)) => Feedback::Shake(day),
        Ok(Activation::Revealed { record, .. }) => Feedback::Reveal { day, record },
        Err(err) => Feedback::Failed(format!("Failed to open door {day}: {err}")),
    }
}

/// Reset the model only when the user confirmed. Returns whether a reset ran.
///
/// # Errors
///
/// Returns [`CalendarError::Persist`] when the confirmed reset could not be stored.
pub fn reset_if_confirmed<S>(
    calendar: &mut AdventCalendar<S>,
    confirmed: bool,
) -> Result<bool, CalendarError>
where
    S: KeyValueStore,
{
    if !confirmed {
        return Ok(false);
    }
    calendar.reset()?;
    Ok(true)
}

/// Counter shared between a transient highlight and the timers that clear it.
///
/// Each flash takes a new ticket; a timer only clears the highlight if its ticket
/// is still the latest, so a later door keeps its animation.
#[derive(Debug, Clone, Default)]
pub struct FlashGeneration(Rc<Cell<u64>>);

impl FlashGeneration {
    #[must_use]
    pub fn begin(&self) -> u64 {
        let next = self.0.get().wrapping_add(1);
        self.0.set(next);
        next
    }

    #[must_use]
    pub fn is_current(&self, ticket: u64) -> bool {
        self.0.get() == ticket
    }
}
