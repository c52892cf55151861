use mongodb::{
    bson::{doc, Document},
    options::IndexOptions,
    IndexModel,
};

use crate::repositories::{
    course_repository::COURSES_COLLECTION, enrollment_repository::ENROLLMENTS_COLLECTION,
    exam_attempt_repository::EXAM_ATTEMPTS_COLLECTION, exam_repository::EXAMS_COLLECTION,
    lesson_repository::LESSONS_COLLECTION,
};

fn index(keys: Document, name: &str, unique: bool) -> IndexModel {
    IndexModel::builder()
        .keys(keys)
        .options(
            IndexOptions::builder()
                .unique(unique)
                .name(name.to_string())
                .build(),
        )
        .build()
}

/// `(collection, index)` pairs the guards and services depend on.
///
/// `user_course_unique` keeps one enrollment per user and course.
/// `course_order` is not unique; equal `order_index` values inside a course
/// resolve by store order.
pub fn domain_indexes() -> Vec<(&'static str, IndexModel)> {
    vec![
        (COURSES_COLLECTION, index(doc! { "id": 1 }, "id_unique", true)),
        (LESSONS_COLLECTION, index(doc! { "id": 1 }, "id_unique", true)),
        (
            LESSONS_COLLECTION,
            index(doc! { "course_id": 1, "order_index": 1 }, "course_order", false),
        ),
        (
            ENROLLMENTS_COLLECTION,
            index(doc! { "user_id": 1, "course_id": 1 }, "user_course_unique", true),
        ),
        (EXAMS_COLLECTION, index(doc! { "course_id": 1 }, "course_unique", true)),
        (
            EXAM_ATTEMPTS_COLLECTION,
            index(doc! { "user_id": 1, "course_id": 1 }, "user_course", false),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(
        indexes: &'a [(&'static str, IndexModel)],
        collection: &str,
        name: &str,
    ) -> &'a IndexModel {
        indexes
            .iter()
            .find(|(c, model)| {
                *c == collection
                    && model.options.as_ref().and_then(|o| o.name.as_deref()) == Some(name)
            })
            .map(|(_, model)| model)
            .unwrap_or_else(|| panic!("missing index {}.{}", collection, name))
    }

    fn is_unique(model: &IndexModel) -> bool {
        model.options.as_ref().and_then(|o| o.unique) == Some(true)
    }

    #[test]
    fn test_one_enrollment_per_user_and_course() {
        let indexes = domain_indexes();
        let model = find(&indexes, ENROLLMENTS_COLLECTION, "user_course_unique");
        assert!(is_unique(model));
        assert_eq!(model.keys, doc! { "user_id": 1, "course_id": 1 });
    }

    #[test]
    fn test_one_exam_per_course() {
        let indexes = domain_indexes();
        assert!(is_unique(find(&indexes, EXAMS_COLLECTION, "course_unique")));
    }

    #[test]
    fn test_lesson_order_is_not_unique() {
        let indexes = domain_indexes();
        assert!(!is_unique(find(&indexes, LESSONS_COLLECTION, "course_order")));
    }
}
