use std::collections::{HashMap, HashSet};

#[cfg(test)]
use mockall::automock;

use crate::{
    errors::{AppError, AppResult},
    models::{domain::Exam, domain::ExamQuestion, dto::request::ExamAnswer},
};

/// Seam to the quiz-scoring subsystem: turns submitted answers into a
/// percentage score.
#[cfg_attr(test, automock)]
pub trait ExamScorer: Send + Sync {
    fn score(&self, exam: &Exam, answers: &[ExamAnswer]) -> AppResult<u8>;
}

/// Every question weighs the same; a question is correct when exactly its
/// correct options are selected.
pub struct PercentageScorer;

impl PercentageScorer {
    fn grade_question(question: &ExamQuestion, selected_option_ids: &[String]) -> bool {
        let correct: HashSet<&str> = question.correct_option_ids().into_iter().collect();
        if correct.is_empty() {
            return false;
        }

        let selected: HashSet<&str> = selected_option_ids.iter().map(String::as_str).collect();
        selected == correct
    }
}

impl ExamScorer for PercentageScorer {
    fn score(&self, exam: &Exam, answers: &[ExamAnswer]) -> AppResult<u8> {
        if exam.questions.is_empty() {
            return Ok(100);
        }

        let question_map: HashMap<&str, &ExamQuestion> = exam
            .questions
            .iter()
            .map(|q| (q.id.as_str(), q))
            .collect();

        let mut graded: HashSet<&str> = HashSet::new();
        let mut correct_count: usize = 0;

        for answer in answers {
            let question = question_map.get(answer.question_id.as_str()).ok_or_else(|| {
                AppError::ValidationError(format!(
                    "Question '{}' is not part of this exam",
                    answer.question_id
                ))
            })?;

            // First answer for a question wins.
            if !graded.insert(question.id.as_str()) {
                continue;
            }

            if Self::grade_question(question, &answer.selected_option_ids) {
                correct_count += 1;
            }
        }

        let percentage = correct_count * 100 / exam.questions.len();
        Ok(percentage as u8)
    }
}
