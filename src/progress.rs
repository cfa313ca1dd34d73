//! Progress reporting.
//!
//! The progress callback is the engine's single side-channel: components
//! emit `(phase, percent, operation, optional counters)` events and the
//! engine does no other I/O. The callback runs inline on the engine's
//! thread and must return promptly.

/// Coarse pipeline phase, as seen by a progress consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressPhase {
    /// Validating input and materializing sections.
    Initializing,
    /// Assigning times, rooms, and students.
    Assigning,
    /// Rebalancing section sizes.
    Optimizing,
    /// Schedule finalized.
    Complete,
}

/// Optional counters attached to a progress event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressCounters {
    /// Students enrolled so far.
    pub students_assigned: Option<usize>,
    /// Sections materialized so far.
    pub sections_created: Option<usize>,
}

/// A single progress event.
#[derive(Debug, Clone)]
pub struct ProgressEvent {
    /// Coarse phase.
    pub phase: ProgressPhase,
    /// Completion estimate in `[0, 100]`, monotonic within one solve.
    pub percent: u32,
    /// Free-text description of the current operation.
    pub operation: String,
    /// Optional counters.
    pub counters: Option<ProgressCounters>,
}

/// Inline progress callback.
pub type ProgressCallback = Box<dyn Fn(&ProgressEvent)>;

/// Forwards events to an optional callback, keeping percents monotonic.
///
/// Components report their local completion estimates; the reporter
/// clamps each percent to at least the previous one so a consumer never
/// observes progress moving backwards.
pub struct ProgressReporter<'a> {
    callback: Option<&'a ProgressCallback>,
    last_percent: u32,
}

impl<'a> ProgressReporter<'a> {
    /// Creates a reporter over an optional callback.
    pub fn new(callback: Option<&'a ProgressCallback>) -> Self {
        Self {
            callback,
            last_percent: 0,
        }
    }

    /// Emits an event without counters.
    pub fn report(&mut self, phase: ProgressPhase, percent: u32, operation: impl Into<String>) {
        self.emit(phase, percent, operation.into(), None);
    }

    /// Emits an event with counters.
    pub fn report_with_counters(
        &mut self,
        phase: ProgressPhase,
        percent: u32,
        operation: impl Into<String>,
        counters: ProgressCounters,
    ) {
        self.emit(phase, percent, operation.into(), Some(counters));
    }

    fn emit(
        &mut self,
        phase: ProgressPhase,
        percent: u32,
        operation: String,
        counters: Option<ProgressCounters>,
    ) {
        let percent = percent.clamp(self.last_percent, 100);
        self.last_percent = percent;

        if let Some(callback) = self.callback {
            callback(&ProgressEvent {
                phase,
                percent,
                operation,
                counters,
            });
        }
    }
}
