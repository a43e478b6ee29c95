//! Start/stop bookkeeping shared by the effect engines.
//!
//! Every start hands out a [`Ticket`] stamped with the current generation.
//! Stopping bumps the generation, so a callback still holding an older ticket
//! is recognised as stale and ignored.

/// Permission to run one scheduled step of an effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
}

/// Ticket for the next animation frame of a particle field.
pub type FrameToken = Ticket;

/// Ticket for the next timer tick of a typewriter.
pub type TimerToken = Ticket;

/// Running/stopped state with a generation counter.
#[derive(Debug, Default)]
pub(crate) struct Lifecycle {
    generation: u64,
    running: bool,
}

impl Lifecycle {
    /// Enter the running state, invalidating any earlier tickets.
    pub(crate) fn start(&mut self) -> Ticket {
        self.generation = self.generation.wrapping_add(1);
        self.running = true;
        Ticket {
            generation: self.generation,
        }
    }

    /// Leave the running state. Returns false if it was already stopped.
    pub(crate) fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        self.generation = self.generation.wrapping_add(1);
        true
    }

    pub(crate) fn is_running(&self) -> bool {
        self.running
    }

    /// The ticket currently accepted, if running.
    pub(crate) fn current(&self) -> Option<Ticket> {
        self.running.then_some(Ticket {
            generation: self.generation,
        })
    }

    /// Whether a step carrying `ticket` may run.
    pub(crate) fn accepts(&self, ticket: Ticket) -> bool {
        self.running && ticket.generation == self.generation
    }
}
