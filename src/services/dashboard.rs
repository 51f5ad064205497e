//! Dashboard statistics: joint fetch of the five collections plus
//! view-model assembly for the overview page.

use chrono::NaiveDate;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::record::resolve_reference;
use crate::models::{Course, Enrollment, Instructor, Participant, Room};
use crate::services::aggregate::{
    self, InstructorCourseCount, PaymentSplit,
};
use crate::services::livingapps::LivingAppsClient;

/// The overview table shows this many courses.
pub const RECENT_COURSE_LIMIT: usize = 5;

/// One read of all five collections. Immutable for the duration of one
/// stats derivation.
#[derive(Debug, Default)]
pub struct DashboardSnapshot {
    pub instructors: Vec<Instructor>,
    pub rooms: Vec<Room>,
    pub participants: Vec<Participant>,
    pub courses: Vec<Course>,
    pub enrollments: Vec<Enrollment>,
}

/// Aggregated dashboard statistics for the main overview page.
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub instructor_count: usize,
    pub room_count: usize,
    pub participant_count: usize,
    pub course_count: usize,
    pub enrollment_count: usize,
    pub active_course_count: usize,
    pub upcoming_course_count: usize,
    pub payment_split: PaymentSplit,
    pub total_revenue: f64,
    pub total_capacity: i64,
    pub courses_per_instructor: Vec<InstructorCourseCount>,
    pub recent_courses: Vec<RecentCourse>,
}

/// One row of the recent-courses table, with the instructor reference
/// resolved to a display name.
#[derive(Debug, Serialize)]
pub struct RecentCourse {
    pub record_id: String,
    pub title: Option<String>,
    pub instructor_name: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub price: Option<f64>,
}

/// Fetch all five collections concurrently. A failure of any single
/// fetch fails the whole batch.
pub async fn load_snapshot(client: &LivingAppsClient) -> Result<DashboardSnapshot, AppError> {
    let (instructors, rooms, participants, courses, enrollments) = tokio::try_join!(
        client.get_instructors(),
        client.get_rooms(),
        client.get_participants(),
        client.get_courses(),
        client.get_enrollments(),
    )?;

    Ok(DashboardSnapshot {
        instructors,
        rooms,
        participants,
        courses,
        enrollments,
    })
}

/// Load and aggregate the dashboard statistics.
///
/// A failed batch load is logged and served as the empty aggregate; the
/// overview page then shows its no-data states rather than an error.
pub async fn get_stats(client: &LivingAppsClient, today: NaiveDate) -> DashboardStats {
    let snapshot = match load_snapshot(client).await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load dashboard data");
            DashboardSnapshot::default()
        }
    };
    build_stats(&snapshot, today)
}

/// Derive the full view-model from one snapshot. Pure.
pub fn build_stats(snapshot: &DashboardSnapshot, today: NaiveDate) -> DashboardStats {
    DashboardStats {
        instructor_count: snapshot.instructors.len(),
        room_count: snapshot.rooms.len(),
        participant_count: snapshot.participants.len(),
        course_count: snapshot.courses.len(),
        enrollment_count: snapshot.enrollments.len(),
        active_course_count: aggregate::active_courses(&snapshot.courses, today).len(),
        upcoming_course_count: aggregate::upcoming_courses(&snapshot.courses, today).len(),
        payment_split: aggregate::payment_split(&snapshot.enrollments),
        total_revenue: aggregate::total_revenue(&snapshot.enrollments, &snapshot.courses),
        total_capacity: aggregate::total_capacity(&snapshot.rooms),
        courses_per_instructor: aggregate::courses_per_instructor(
            &snapshot.instructors,
            &snapshot.courses,
        ),
        recent_courses: recent_course_rows(snapshot),
    }
}

/// Resolve the leading courses into table rows with instructor names.
fn recent_course_rows(snapshot: &DashboardSnapshot) -> Vec<RecentCourse> {
    aggregate::recent_courses(&snapshot.courses, RECENT_COURSE_LIMIT)
        .iter()
        .map(|course| {
            let instructor_name = resolve_reference(course.fields.instructor.as_ref())
                .and_then(|id| {
                    snapshot
                        .instructors
                        .iter()
                        .find(|i| i.record_id == id)
                })
                .and_then(|i| i.fields.name.clone());

            RecentCourse {
                record_id: course.record_id.clone(),
                title: course.fields.title.clone(),
                instructor_name,
                start_date: course.fields.start_date,
                end_date: course.fields.end_date,
                price: course.fields.price,
            }
        })
        .collect()
}
