#[derive(Debug, thiserror::Error)]
pub enum NudgeAiError {
    #[error("API key is not configured")]
    Configuration,

    #[error("API call failed with status: {0}")]
    Upstream(u16),

    #[error("Invalid response from the model API")]
    InvalidResponse,

    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type NudgeAiResult<T> = Result<T, NudgeAiError>;
