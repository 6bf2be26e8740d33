// Interview support: question sampling and keyword feedback on answers.

pub mod handlers;

use serde::{Deserialize, Serialize};

use crate::positions::{PositionConfig, Question};
use crate::screening::ScreeningError;

/// Keywords an answer did and did not mention, in configured order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerFeedback {
    pub covered: Vec<String>,
    pub missing: Vec<String>,
}

/// Samples up to `count` distinct questions from the position's technical and
/// behavioral pools, without replacement.
pub fn select_questions(
    position_name: &str,
    position: &PositionConfig,
    count: usize,
    rng: &mut fastrand::Rng,
) -> Result<Vec<Question>, ScreeningError> {
    let mut pool: Vec<&Question> = position.all_questions().collect();
    if pool.is_empty() {
        return Err(ScreeningError::NoQuestions(position_name.to_string()));
    }

    rng.shuffle(&mut pool);
    Ok(pool.into_iter().take(count).cloned().collect())
}

/// Case-insensitive substring check of each keyword against the answer.
pub fn evaluate_answer(answer: &str, keywords: &[String]) -> AnswerFeedback {
    let answer = answer.to_lowercase();
    let (covered, missing): (Vec<String>, Vec<String>) = keywords
        .iter()
        .cloned()
        .partition(|kw| answer.contains(&kw.to_lowercase()));

    AnswerFeedback { covered, missing }
}
