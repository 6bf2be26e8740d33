use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::interview::{evaluate_answer, select_questions, AnswerFeedback};
use crate::positions::Question;
use crate::screening::ScreeningError;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionsResponse {
    pub position: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub answer: String,
    pub keywords: Vec<String>,
}

/// GET /api/v1/positions/:name/questions
pub async fn handle_sample_questions(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let position = state
        .positions
        .get(&name)
        .await
        .ok_or_else(|| ScreeningError::UnknownPosition(name.clone()))?;

    let mut rng = fastrand::Rng::new();
    let questions = select_questions(
        &name,
        &position,
        state.config.interview_question_count,
        &mut rng,
    )?;

    Ok(Json(QuestionsResponse {
        position: name,
        questions,
    }))
}

/// POST /api/v1/interviews/answers
pub async fn handle_evaluate_answer(Json(req): Json<AnswerRequest>) -> Json<AnswerFeedback> {
    Json(evaluate_answer(&req.answer, &req.keywords))
}
