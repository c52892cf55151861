//! States of a student's way through a course's final exam.
//!
//! ```text
//! Loading ─┬─ NoExam ───────────────────────────────┬─> CertificateRedirect
//!          └─ InProgress ─┬─ Passed ────────────────┘
//!               ^         └─ Failed ─(retry)─┐
//!               └────────────────────────────┘
//! ```
//!
//! Failing never ends the flow and there is no attempt limit.

use crate::{
    errors::{AppError, AppResult},
    models::domain::{exam_attempt::is_passing, Exam},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExamFlowState {
    Loading,
    NoExam,
    InProgress { exam: Exam },
    Passed { score: u8, pass_score: u8 },
    Failed { exam: Exam, score: u8 },
    CertificateRedirect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExamFlowEvent {
    Loaded(Option<Exam>),
    Scored(u8),
    Retry,
    Continue,
}

impl ExamFlowState {
    pub fn name(&self) -> &'static str {
        match self {
            ExamFlowState::Loading => "loading",
            ExamFlowState::NoExam => "no_exam",
            ExamFlowState::InProgress { .. } => "in_progress",
            ExamFlowState::Passed { .. } => "passed",
            ExamFlowState::Failed { .. } => "failed",
            ExamFlowState::CertificateRedirect => "certificate_redirect",
        }
    }

    pub fn apply(self, event: ExamFlowEvent) -> AppResult<Self> {
        let from = self.name();

        match (self, event) {
            (ExamFlowState::Loading, ExamFlowEvent::Loaded(None)) => Ok(ExamFlowState::NoExam),
            (ExamFlowState::Loading, ExamFlowEvent::Loaded(Some(exam))) => {
                Ok(ExamFlowState::InProgress { exam })
            }
            (ExamFlowState::InProgress { exam }, ExamFlowEvent::Scored(score)) => {
                if is_passing(score, exam.pass_score) {
                    Ok(ExamFlowState::Passed {
                        score,
                        pass_score: exam.pass_score,
                    })
                } else {
                    Ok(ExamFlowState::Failed { exam, score })
                }
            }
            (ExamFlowState::Failed { exam, .. }, ExamFlowEvent::Retry) => {
                Ok(ExamFlowState::InProgress { exam })
            }
            (ExamFlowState::NoExam, ExamFlowEvent::Continue)
            | (ExamFlowState::Passed { .. }, ExamFlowEvent::Continue) => {
                Ok(ExamFlowState::CertificateRedirect)
            }
            (_, event) => Err(AppError::ValidationError(format!(
                "Exam flow cannot handle {} while {}",
                event_name(&event),
                from
            ))),
        }
    }
}

fn event_name(event: &ExamFlowEvent) -> &'static str {
    match event {
        ExamFlowEvent::Loaded(_) => "loaded",
        ExamFlowEvent::Scored(_) => "scored",
        ExamFlowEvent::Retry => "retry",
        ExamFlowEvent::Continue => "continue",
    }
}
