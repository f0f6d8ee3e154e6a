#[derive(Debug, thiserror::Error)]
pub enum NudgeDataError {
    #[error("data source unavailable: {0}")]
    Unavailable(String),
}

pub type NudgeDataResult<T> = Result<T, NudgeDataError>;
