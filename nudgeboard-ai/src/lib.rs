pub mod gemini;
mod error;
mod prompt;

pub use error::*;
pub use prompt::build_prompt;


/// Inputs for one generated nudge: who completed what.
pub struct NudgeContext {
    pub client_name: String,
    pub task: String,
}

pub trait PromptGenerator {
    fn generate(&self, context: NudgeContext)
    -> impl Future<Output = NudgeAiResult<String>> + Send;
}
