//! Cancelable timers driven by the UI layer.
//!
//! The session never sleeps. It hands out a [`ScheduledTimer`] and the
//! caller fires its ticket once the delay has elapsed. Scheduling a timer of
//! a kind that is already pending supersedes the older ticket, and resets
//! cancel everything, so a stale ticket can never act.

use core::time::Duration;

use crate::error::TimerError;

/// The timers a session can schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Discards the card once a press has been held long enough.
    LongPressCancel,
    /// Commits a resolved card after the configured delay.
    DelayedCommit,
}

/// Handle identifying one scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerTicket {
    kind: TimerKind,
    generation: u64,
}

impl TimerTicket {
    /// Returns the kind of timer this ticket belongs to.
    #[must_use]
    pub const fn kind(&self) -> TimerKind {
        self.kind
    }
}

/// A timer the caller has to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduledTimer {
    /// Ticket to pass to [`SwipeSession::fire_timer`](crate::SwipeSession::fire_timer).
    pub ticket: TimerTicket,
    /// Delay after which the ticket should be fired.
    pub delay: Duration,
}

#[derive(Debug, Default)]
pub(crate) struct Timers {
    generation: u64,
    long_press: Option<ScheduledTimer>,
    delayed_commit: Option<ScheduledTimer>,
}

impl Timers {
    const fn slot_mut(&mut self, kind: TimerKind) -> &mut Option<ScheduledTimer> {
        match kind {
            TimerKind::LongPressCancel => &mut self.long_press,
            TimerKind::DelayedCommit => &mut self.delayed_commit,
        }
    }

    pub(crate) const fn pending(&self, kind: TimerKind) -> Option<ScheduledTimer> {
        match kind {
            TimerKind::LongPressCancel => self.long_press,
            TimerKind::DelayedCommit => self.delayed_commit,
        }
    }

    pub(crate) fn schedule(&mut self, kind: TimerKind, delay: Duration) -> ScheduledTimer {
        self.generation = self.generation.wrapping_add(1);
        let timer = ScheduledTimer {
            ticket: TimerTicket {
                kind,
                generation: self.generation,
            },
            delay,
        };
        if self.slot_mut(kind).replace(timer).is_some() {
            tracing::trace!(?kind, "superseded pending timer");
        }
        timer
    }

    pub(crate) fn cancel(&mut self, kind: TimerKind) -> bool {
        self.slot_mut(kind).take().is_some()
    }

    pub(crate) fn cancel_all(&mut self) {
        self.long_press = None;
        self.delayed_commit = None;
    }

    /// Consumes the pending timer matching `ticket`.
    pub(crate) fn take(&mut self, ticket: TimerTicket) -> Result<(), TimerError> {
        let slot = self.slot_mut(ticket.kind);
        match *slot {
            Some(pending) if pending.ticket == ticket => {
                *slot = None;
                Ok(())
            }
            Some(_) => Err(TimerError::Stale),
            None => Err(TimerError::Cancelled),
        }
    }
}
