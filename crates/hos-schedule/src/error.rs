use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScheduleError {
    /// Internal accounting bug: overlapping fragments, a gap in a day's
    /// coverage, a negative-length segment.  Fails loudly rather than
    /// emitting a malformed schedule.
    #[error("schedule invariant violation: {0}")]
    Invariant(String),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
