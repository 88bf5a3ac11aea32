//! Domain models for the school-management persistence layer
//!
//! One struct per table. Identifiers are engine-assigned surrogate integers
//! (0 until the row has been persisted); `created_at`/`updated_at` are set at
//! construction and refreshed by the repository on write. Associations are
//! carried as foreign-key fields (`course_id`, `student_id`, …) and
//! traversed with repository predicates rather than materialized object
//! links.

pub mod assessment;
pub mod attendance;
pub mod course;
pub mod degree;
pub mod period;
pub mod platform;
pub mod student;
pub mod teacher;
pub mod unit;
pub mod user;

pub use assessment::{EvaluationComponent, Grade, SubmissionStatus, Task, TaskSubmission};
pub use attendance::{Attendance, AttendanceStatus};
pub use course::{Course, CourseEnrollment, CourseStatus, EnrollmentStatus};
pub use degree::Degree;
pub use period::{AcademicPeriod, PeriodStatus};
pub use platform::Platform;
pub use student::Student;
pub use teacher::Teacher;
pub use unit::{Topic, Unit};
pub use user::{Role, User, UserRole};
