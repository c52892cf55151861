pub mod course_service;
pub mod exam_flow;
pub mod exam_scorer;
pub mod exam_service;
pub mod lesson_service;

pub use course_service::CourseService;
pub use exam_scorer::{ExamScorer, PercentageScorer};
pub use exam_service::{CertificateOutcome, ExamService, ExamStart, ExamSubmission};
pub use lesson_service::LessonService;
