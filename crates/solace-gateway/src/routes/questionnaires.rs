use axum::extract::Path;
use axum::Json;
use serde::Serialize;

use solace_core::models::assessment::QuestionnaireKind;
use solace_instruments::scoring::{ANSWER_SCALE, AnswerScale};
use solace_instruments::{all_questionnaires, get_questionnaire};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct QuestionnaireSummary {
    id: String,
    name: String,
    kind: QuestionnaireKind,
}

#[derive(Serialize)]
pub struct QuestionnaireDetail {
    id: String,
    name: String,
    kind: QuestionnaireKind,
    prompts: Vec<String>,
    scale: AnswerScale,
    canonical_max: u8,
}

pub async fn list_questionnaires() -> Json<Vec<QuestionnaireSummary>> {
    let questionnaires: Vec<QuestionnaireSummary> = all_questionnaires()
        .iter()
        .map(|q| QuestionnaireSummary {
            id: q.id().to_string(),
            name: q.name().to_string(),
            kind: q.kind(),
        })
        .collect();
    Json(questionnaires)
}

pub async fn get_questionnaire_detail(
    Path(id): Path<String>,
) -> Result<Json<QuestionnaireDetail>, ApiError> {
    let questionnaire = get_questionnaire(&id)
        .ok_or_else(|| ApiError::NotFound(format!("questionnaire not found: {id}")))?;

    Ok(Json(QuestionnaireDetail {
        id: questionnaire.id().to_string(),
        name: questionnaire.name().to_string(),
        kind: questionnaire.kind(),
        prompts: questionnaire.prompts().iter().map(|p| p.to_string()).collect(),
        scale: ANSWER_SCALE,
        canonical_max: questionnaire.kind().canonical_max(),
    }))
}
