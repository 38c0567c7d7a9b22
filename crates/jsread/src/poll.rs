//! The listen cycle: a two-state machine driven by what each poll pass
//! observes on the device.

use std::time::{Duration, Instant};

use crate::caps::Capabilities;
use crate::event::Event;
use crate::frame::RawFrame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollState {
    Polling,
    Exit,
}

/// What a single poll pass observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A frame that produces no event: a synthetic state report, an unknown
    /// frame type or a channel index the device never reported.
    Discarded,
    /// A button event was recorded.
    Button,
    /// An axis event was recorded.
    Axis,
    /// Nothing was read this pass.
    Idle { has_pending: bool, timed_out: bool },
}

impl PollState {
    /// Transition for one poll pass. `Exit` is terminal.
    pub fn advance(self, step: Step, stop_on_button: bool) -> Self {
        match (self, step) {
            (PollState::Exit, _) => PollState::Exit,
            (PollState::Polling, Step::Button) if stop_on_button => PollState::Exit,
            (PollState::Polling, Step::Idle { has_pending, timed_out })
                if has_pending || timed_out =>
            {
                PollState::Exit
            }
            (PollState::Polling, _) => PollState::Polling,
        }
    }
}

/// State of one `listen` call. Created fresh per call and consumed by
/// [`ListenCycle::finish`].
#[derive(Debug)]
pub struct ListenCycle {
    /// `None` when the timeout is too large to represent; the cycle then
    /// only ends on data.
    deadline: Option<Instant>,
    stop_on_button: bool,
    state: PollState,
    pending: Option<Event>,
}

impl ListenCycle {
    pub fn new(timeout: Duration, stop_on_button: bool) -> Self {
        Self::starting_at(Instant::now(), timeout, stop_on_button)
    }

    pub fn starting_at(start: Instant, timeout: Duration, stop_on_button: bool) -> Self {
        Self {
            deadline: start.checked_add(timeout),
            stop_on_button,
            state: PollState::Polling,
            pending: None,
        }
    }

    #[inline]
    pub fn state(&self) -> PollState {
        self.state
    }

    #[inline]
    pub fn is_polling(&self) -> bool {
        self.state == PollState::Polling
    }

    pub fn pending(&self) -> Option<&Event> {
        self.pending.as_ref()
    }

    /// Time left before the idle timeout fires.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline
            .map_or(Duration::MAX, |deadline| deadline.saturating_duration_since(now))
    }

    /// Handles a frame read during this pass.
    ///
    /// A newer event always replaces the pending one.
    pub fn on_frame(&mut self, frame: &RawFrame, caps: &Capabilities) {
        let step = if frame.is_init() {
            Step::Discarded
        } else {
            match Event::from_frame(frame, caps) {
                Some(event) => {
                    let step = if event.is_button() {
                        Step::Button
                    } else {
                        Step::Axis
                    };
                    self.pending = Some(event);
                    step
                }
                None => {
                    log::trace!(
                        "dropping frame type {:?} for channel {}",
                        frame.kind,
                        frame.number
                    );
                    Step::Discarded
                }
            }
        };
        self.advance(step);
    }

    /// Handles a pass that read nothing.
    pub fn on_idle(&mut self, now: Instant) {
        let step = Step::Idle {
            has_pending: self.pending.is_some(),
            timed_out: self.deadline.is_some_and(|deadline| now >= deadline),
        };
        self.advance(step);
    }

    /// Ends the cycle, yielding the most recent event if there was one.
    pub fn finish(self) -> Option<Event> {
        self.pending
    }

    fn advance(&mut self, step: Step) {
        self.state = self.state.advance(step, self.stop_on_button);
    }
}
