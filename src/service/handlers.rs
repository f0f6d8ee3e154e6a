use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use nudgeboard_ai::{NudgeAiError, NudgeContext, PromptGenerator};
use nudgeboard_data::models::DashboardSnapshot;
use nudgeboard_data::{DashboardSource, NudgeDataError};

use crate::service::AppState;

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PromptRequest {
    pub client_name: String,
    pub task: String,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PromptResult {
    pub generated_message: String,
}

#[derive(serde::Serialize)]
pub(crate) struct ProxyError {
    pub error: String,
}

pub(crate) enum ApiError {
    Ai(NudgeAiError),
    Data(NudgeDataError),
}

impl From<NudgeAiError> for ApiError {
    fn from(error: NudgeAiError) -> Self {
        ApiError::Ai(error)
    }
}

impl From<NudgeDataError> for ApiError {
    fn from(error: NudgeDataError) -> Self {
        ApiError::Data(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = match self {
            ApiError::Ai(error) => {
                tracing::error!(%error, "prompt generation failed");
                error.to_string()
            }
            ApiError::Data(error) => {
                tracing::error!(%error, "dashboard fetch failed");
                error.to_string()
            }
        };

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ProxyError { error }),
        )
            .into_response()
    }
}

pub(crate) async fn generate_prompt<G, D>(
    State(state): State<AppState<G, D>>,
    Json(request): Json<PromptRequest>,
) -> Result<Json<PromptResult>, ApiError>
where
    G: PromptGenerator + Send + Sync + 'static,
    D: DashboardSource + Send + Sync + 'static,
{
    let context = NudgeContext {
        client_name: request.client_name,
        task: request.task,
    };

    let generated_message = state.generator.generate(context).await?;

    Ok(Json(PromptResult { generated_message }))
}

pub(crate) async fn dashboard<G, D>(
    State(state): State<AppState<G, D>>,
) -> Result<Json<DashboardSnapshot>, ApiError>
where
    G: PromptGenerator + Send + Sync + 'static,
    D: DashboardSource + Send + Sync + 'static,
{
    let snapshot = state.data.fetch().await?;

    Ok(Json(snapshot))
}
