pub mod course;
pub mod enrollment;
pub mod exam;
pub mod exam_attempt;
pub mod lesson;
pub mod profile;

pub use course::Course;
pub use enrollment::Enrollment;
pub use exam::{Exam, ExamOption, ExamQuestion};
pub use exam_attempt::ExamAttempt;
pub use lesson::Lesson;
pub use profile::{Profile, Role};
