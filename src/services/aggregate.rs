//! Pure aggregation over the five record collections.
//!
//! Every function here is a stateless transform: no I/O, no clock access.
//! Missing optional fields always degrade to a default (0, empty, or a
//! placeholder label) instead of failing.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::record::resolve_reference;
use crate::models::{Course, Enrollment, Instructor, Room};

/// Chart label used when an instructor has no name on record.
pub const UNNAMED_INSTRUCTOR: &str = "N/A";

/// The per-instructor chart shows at most this many bars.
pub const INSTRUCTOR_CHART_LIMIT: usize = 6;

/// Enrollment counts partitioned by payment status.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct PaymentSplit {
    pub paid: usize,
    pub open: usize,
}

/// One bar of the courses-per-instructor chart.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct InstructorCourseCount {
    pub label: String,
    pub count: usize,
}

/// Courses currently running: both dates present and
/// `start <= today <= end`, inclusive, at day granularity.
pub fn active_courses<'a>(courses: &'a [Course], today: NaiveDate) -> Vec<&'a Course> {
    courses
        .iter()
        .filter(|c| match (c.fields.start_date, c.fields.end_date) {
            (Some(start), Some(end)) => start <= today && today <= end,
            _ => false,
        })
        .collect()
}

/// Courses starting strictly after `today`.
pub fn upcoming_courses<'a>(courses: &'a [Course], today: NaiveDate) -> Vec<&'a Course> {
    courses
        .iter()
        .filter(|c| c.fields.start_date.is_some_and(|start| start > today))
        .collect()
}

/// Partition all enrollments by the paid flag. `open` is the complement,
/// so the two counts always sum to the total.
pub fn payment_split(enrollments: &[Enrollment]) -> PaymentSplit {
    let paid = enrollments.iter().filter(|e| e.fields.paid).count();
    PaymentSplit {
        paid,
        open: enrollments.len() - paid,
    }
}

/// Sum the course price over paid enrollments. An enrollment whose course
/// reference does not resolve into `courses`, or whose course has no
/// price, contributes 0.
pub fn total_revenue(enrollments: &[Enrollment], courses: &[Course]) -> f64 {
    let by_id: HashMap<&str, &Course> = courses
        .iter()
        .map(|c| (c.record_id.as_str(), c))
        .collect();

    enrollments
        .iter()
        .filter(|e| e.fields.paid)
        .filter_map(|e| resolve_reference(e.fields.course.as_ref()))
        .filter_map(|course_id| by_id.get(course_id))
        .map(|course| course.fields.price.unwrap_or(0.0))
        .sum()
}

/// Total seat capacity across all rooms; rooms without a recorded
/// capacity count as 0.
pub fn total_capacity(rooms: &[Room]) -> i64 {
    rooms
        .iter()
        .map(|r| r.fields.capacity.unwrap_or(0))
        .sum()
}

/// Course counts per instructor for the bar chart, in instructor input
/// order. Instructors with no courses are dropped and the result is
/// capped at [`INSTRUCTOR_CHART_LIMIT`] entries. Labels are the
/// instructor's first name token.
pub fn courses_per_instructor(
    instructors: &[Instructor],
    courses: &[Course],
) -> Vec<InstructorCourseCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for course in courses {
        if let Some(id) = resolve_reference(course.fields.instructor.as_ref()) {
            *counts.entry(id).or_default() += 1;
        }
    }

    instructors
        .iter()
        .filter_map(|instructor| {
            let count = counts
                .get(instructor.record_id.as_str())
                .copied()
                .unwrap_or(0);
            if count == 0 {
                return None;
            }
            let label = instructor
                .fields
                .first_name()
                .unwrap_or(UNNAMED_INSTRUCTOR)
                .to_string();
            Some(InstructorCourseCount { label, count })
        })
        .take(INSTRUCTOR_CHART_LIMIT)
        .collect()
}

/// The leading `limit` courses in input order. The upstream service
/// defines the order; no sorting happens here.
pub fn recent_courses(courses: &[Course], limit: usize) -> &[Course] {
    &courses[..courses.len().min(limit)]
}
