use hos_core::HosError;
use hos_schedule::ScheduleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("invalid trip request: {0}")]
    Request(String),

    #[error("input validation failed: {0}")]
    Input(#[from] HosError),

    #[error("schedule synthesis failed: {0}")]
    Schedule(#[from] ScheduleError),

    #[error("request CSV parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PlanResult<T> = Result<T, PlanError>;
