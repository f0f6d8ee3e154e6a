#[derive(serde::Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
}

#[derive(serde::Serialize)]
pub struct GeminiContent {
    pub role: String,
    pub parts: Vec<GeminiPart>,
}

#[derive(serde::Serialize)]
pub struct GeminiPart {
    pub text: String,
}

// Every level is optional so a shape change on the API side surfaces as a
// missing-text error instead of a deserialization failure.
#[derive(serde::Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(serde::Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(serde::Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(serde::Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: Option<String>,
}

impl GeminiResponse {
    /// Extract `candidates[0].content.parts[0].text`, if present.
    pub fn into_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()?
            .text
    }
}
