pub mod account_handler;
pub mod admin_handler;
pub mod course_handler;
pub mod exam_handler;
pub mod health_handler;
pub mod lesson_handler;

pub use account_handler::{dashboard, login_view, me};
pub use admin_handler::{admin_lessons, create_lesson};
pub use course_handler::{catalog, course_entry, course_landing, enroll};
pub use exam_handler::{certificate, start_exam, submit_exam};
pub use health_handler::{health_check, health_check_ready};
pub use lesson_handler::lesson_detail;
