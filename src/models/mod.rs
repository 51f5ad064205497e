//! Typed views of the five LivingApps record collections.

pub mod course;
pub mod enrollment;
pub mod instructor;
pub mod participant;
pub mod record;
pub mod room;

pub use course::Course;
pub use enrollment::Enrollment;
pub use instructor::Instructor;
pub use participant::Participant;
pub use record::{Record, RecordRef};
pub use room::Room;
