use std::sync::Arc;

use chrono::Utc;

use crate::{
    auth::Session,
    errors::{AppError, AppResult},
    models::{
        domain::ExamAttempt,
        dto::{
            request::ExamAnswer,
            response::{CertificateResponse, ExamFailedResponse, ExamForTaking},
        },
    },
    repositories::{CourseRepository, ExamAttemptRepository, ExamRepository},
    routes,
    services::{
        exam_flow::{ExamFlowEvent, ExamFlowState},
        exam_scorer::ExamScorer,
    },
};

#[derive(Debug)]
pub enum ExamStart {
    Redirect(String),
    Take(ExamForTaking),
}

#[derive(Debug)]
pub enum ExamSubmission {
    Redirect(String),
    Failed(ExamFailedResponse),
}

#[derive(Debug)]
pub enum CertificateOutcome {
    Redirect(String),
    Issued(CertificateResponse),
}

pub struct ExamService {
    courses: Arc<dyn CourseRepository>,
    exams: Arc<dyn ExamRepository>,
    attempts: Arc<dyn ExamAttemptRepository>,
    scorer: Arc<dyn ExamScorer>,
}

impl ExamService {
    pub fn new(
        courses: Arc<dyn CourseRepository>,
        exams: Arc<dyn ExamRepository>,
        attempts: Arc<dyn ExamAttemptRepository>,
        scorer: Arc<dyn ExamScorer>,
    ) -> Self {
        Self {
            courses,
            exams,
            attempts,
            scorer,
        }
    }

    async fn load(&self, course_id: &str) -> AppResult<ExamFlowState> {
        let exam = self.exams.find_by_course(course_id).await?;
        ExamFlowState::Loading.apply(ExamFlowEvent::Loaded(exam))
    }

    /// A course without an exam is complete: straight to the certificate.
    pub async fn start(&self, course_id: &str) -> AppResult<ExamStart> {
        match self.load(course_id).await? {
            ExamFlowState::InProgress { exam } => Ok(ExamStart::Take(ExamForTaking::from_exam(&exam))),
            other => {
                other.apply(ExamFlowEvent::Continue)?;
                Ok(ExamStart::Redirect(routes::certificate(course_id)))
            }
        }
    }

    pub async fn submit(
        &self,
        course_id: &str,
        session: &Session,
        answers: &[ExamAnswer],
    ) -> AppResult<ExamSubmission> {
        let exam = match self.load(course_id).await? {
            ExamFlowState::InProgress { exam } => exam,
            other => {
                other.apply(ExamFlowEvent::Continue)?;
                return Ok(ExamSubmission::Redirect(routes::certificate(course_id)));
            }
        };

        let score = self.scorer.score(&exam, answers)?;
        let attempt_number = self
            .attempts
            .count_for(&session.user_id, course_id)
            .await?
            .saturating_add(1);

        let attempt = ExamAttempt::new(
            &session.user_id,
            course_id,
            &exam.id,
            score,
            exam.pass_score,
            attempt_number,
        );
        self.attempts.create(attempt).await?;

        log::info!(
            "User {} scored {} (pass {}) on exam {}, attempt {}",
            session.user_id,
            score,
            exam.pass_score,
            exam.id,
            attempt_number
        );

        match (ExamFlowState::InProgress { exam }).apply(ExamFlowEvent::Scored(score))? {
            ExamFlowState::Failed { exam, score } => Ok(ExamSubmission::Failed(ExamFailedResponse {
                state: "failed",
                score,
                pass_score: exam.pass_score,
                attempt_number,
                retry_path: routes::exam(course_id),
            })),
            passed => {
                passed.apply(ExamFlowEvent::Continue)?;
                Ok(ExamSubmission::Redirect(routes::certificate(course_id)))
            }
        }
    }

    /// Certificate for an enrolled user. With an exam in place, a passing
    /// attempt is required first.
    pub async fn certificate(
        &self,
        course_id: &str,
        session: &Session,
    ) -> AppResult<CertificateOutcome> {
        let course = self
            .courses
            .find_by_id(course_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Course with id '{}' not found", course_id)))?;

        let passing_attempt = match self.exams.find_by_course(course_id).await? {
            None => None,
            Some(_) => {
                match self
                    .attempts
                    .find_latest_passed(&session.user_id, course_id)
                    .await?
                {
                    Some(attempt) => Some(attempt),
                    None => return Ok(CertificateOutcome::Redirect(routes::exam(course_id))),
                }
            }
        };

        Ok(CertificateOutcome::Issued(CertificateResponse {
            course_id: course.id,
            course_title: course.title,
            user_id: session.user_id.clone(),
            email: session.email.clone(),
            score: passing_attempt.as_ref().map(|a| a.score),
            issued_at: passing_attempt
                .map(|a| a.submitted_at)
                .unwrap_or_else(Utc::now),
        }))
    }
}
