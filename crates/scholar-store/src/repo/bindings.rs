//! Schema bindings for the domain models
//!
//! One [`Entity`] implementation per table. Hydration order must match the
//! `COLUMNS` list exactly; timestamps travel as epoch seconds and calendar
//! dates as ISO-8601 text.

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::Row;
use scholar_core::model::{
    AcademicPeriod, Attendance, AttendanceStatus, Course, CourseEnrollment, CourseStatus, Degree,
    EnrollmentStatus, EvaluationComponent, Grade, PeriodStatus, Platform, Role, Student,
    SubmissionStatus, Task, TaskSubmission, Teacher, Topic, Unit, User, UserRole,
};
use scholar_core::rules;

use crate::repo::predicate::SqlValue;
use crate::repo::repository::{Entity, SoftDelete};

fn dt(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_else(Utc::now)
}

fn opt_dt(secs: Option<i64>) -> Option<DateTime<Utc>> {
    secs.map(dt)
}

fn date(text: &str) -> NaiveDate {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").unwrap_or_default()
}

fn opt_date(text: Option<String>) -> Option<NaiveDate> {
    text.map(|t| date(&t))
}

/// Conversion failure for a stored value no model variant covers
fn bad_value(index: usize, raw: &str) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        index,
        rusqlite::types::Type::Text,
        Box::<dyn std::error::Error + Send + Sync>::from(format!("unrecognised value '{}'", raw)),
    )
}

impl Entity for User {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "fullname",
        "username",
        "email",
        "password",
        "created_at",
        "updated_at",
    ];
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "fullname",
        "username",
        "email",
        "password",
        "created_at",
        "updated_at",
    ];

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(User {
            id: row.get(0)?,
            fullname: row.get(1)?,
            username: row.get(2)?,
            email: row.get(3)?,
            password: row.get(4)?,
            created_at: dt(row.get(5)?),
            updated_at: dt(row.get(6)?),
        })
    }

    fn insert_values(&self) -> Vec<SqlValue> {
        vec![
            self.fullname.clone().into(),
            self.username.clone().into(),
            self.email.clone().into(),
            self.password.clone().into(),
            self.created_at.into(),
            self.updated_at.into(),
        ]
    }

    fn validate(&self) -> scholar_core::Result<()> {
        rules::validate_user(self)
    }
}

impl Entity for Role {
    const TABLE: &'static str = "roles";
    const COLUMNS: &'static [&'static str] = &["id", "name", "created_at", "updated_at"];
    const INSERT_COLUMNS: &'static [&'static str] = &["name", "created_at", "updated_at"];

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Role {
            id: row.get(0)?,
            name: row.get(1)?,
            created_at: dt(row.get(2)?),
            updated_at: dt(row.get(3)?),
        })
    }

    fn insert_values(&self) -> Vec<SqlValue> {
        vec![
            self.name.clone().into(),
            self.created_at.into(),
            self.updated_at.into(),
        ]
    }

    fn validate(&self) -> scholar_core::Result<()> {
        rules::validate_role(self)
    }
}

impl Entity for UserRole {
    const TABLE: &'static str = "roles_users";
    const COLUMNS: &'static [&'static str] = &["user_id", "role_id"];
    const INSERT_COLUMNS: &'static [&'static str] = &["user_id", "role_id"];
    const TIMESTAMPS: bool = false;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(UserRole {
            user_id: row.get(0)?,
            role_id: row.get(1)?,
        })
    }

    fn insert_values(&self) -> Vec<SqlValue> {
        vec![self.user_id.into(), self.role_id.into()]
    }
}

impl Entity for Degree {
    const TABLE: &'static str = "degrees";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "description",
        "created_at",
        "updated_at",
        "deleted_at",
    ];
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "name",
        "description",
        "created_at",
        "updated_at",
        "deleted_at",
    ];

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Degree {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
            created_at: dt(row.get(3)?),
            updated_at: dt(row.get(4)?),
            deleted_at: opt_dt(row.get(5)?),
        })
    }

    fn insert_values(&self) -> Vec<SqlValue> {
        vec![
            self.name.clone().into(),
            self.description.clone().into(),
            self.created_at.into(),
            self.updated_at.into(),
            self.deleted_at.into(),
        ]
    }

    fn validate(&self) -> scholar_core::Result<()> {
        rules::validate_degree(self)
    }
}

impl SoftDelete for Degree {}

impl Entity for AcademicPeriod {
    const TABLE: &'static str = "academic_periods";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "start_date",
        "end_date",
        "status",
        "created_at",
        "updated_at",
    ];
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "name",
        "start_date",
        "end_date",
        "status",
        "created_at",
        "updated_at",
    ];

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let raw: String = row.get(4)?;
        let status = PeriodStatus::parse(&raw).ok_or_else(|| bad_value(4, &raw))?;
        Ok(AcademicPeriod {
            id: row.get(0)?,
            name: row.get(1)?,
            start_date: date(&row.get::<_, String>(2)?),
            end_date: date(&row.get::<_, String>(3)?),
            status,
            created_at: dt(row.get(5)?),
            updated_at: dt(row.get(6)?),
        })
    }

    fn insert_values(&self) -> Vec<SqlValue> {
        vec![
            self.name.clone().into(),
            self.start_date.into(),
            self.end_date.into(),
            self.status.as_str().into(),
            self.created_at.into(),
            self.updated_at.into(),
        ]
    }

    fn validate(&self) -> scholar_core::Result<()> {
        rules::validate_period(self)
    }
}

impl Entity for Teacher {
    const TABLE: &'static str = "teachers";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "user_id",
        "specialization",
        "created_at",
        "updated_at",
        "deleted_at",
    ];
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "user_id",
        "specialization",
        "created_at",
        "updated_at",
        "deleted_at",
    ];

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Teacher {
            id: row.get(0)?,
            user_id: row.get(1)?,
            specialization: row.get(2)?,
            created_at: dt(row.get(3)?),
            updated_at: dt(row.get(4)?),
            deleted_at: opt_dt(row.get(5)?),
        })
    }

    fn insert_values(&self) -> Vec<SqlValue> {
        vec![
            self.user_id.into(),
            self.specialization.clone().into(),
            self.created_at.into(),
            self.updated_at.into(),
            self.deleted_at.into(),
        ]
    }

    fn validate(&self) -> scholar_core::Result<()> {
        rules::validate_teacher(self)
    }
}

impl SoftDelete for Teacher {}

impl Entity for Student {
    const TABLE: &'static str = "students";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "user_id",
        "degree_id",
        "key_registration",
        "created_at",
        "updated_at",
        "deleted_at",
    ];
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "user_id",
        "degree_id",
        "key_registration",
        "created_at",
        "updated_at",
        "deleted_at",
    ];

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Student {
            id: row.get(0)?,
            user_id: row.get(1)?,
            degree_id: row.get(2)?,
            key_registration: row.get(3)?,
            created_at: dt(row.get(4)?),
            updated_at: dt(row.get(5)?),
            deleted_at: opt_dt(row.get(6)?),
        })
    }

    fn insert_values(&self) -> Vec<SqlValue> {
        vec![
            self.user_id.into(),
            self.degree_id.into(),
            self.key_registration.clone().into(),
            self.created_at.into(),
            self.updated_at.into(),
            self.deleted_at.into(),
        ]
    }

    fn validate(&self) -> scholar_core::Result<()> {
        rules::validate_student(self)
    }
}

impl SoftDelete for Student {}

impl Entity for Course {
    const TABLE: &'static str = "courses";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "code",
        "teacher_id",
        "period_id",
        "description",
        "status",
        "created_at",
        "updated_at",
        "deleted_at",
    ];
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "name",
        "code",
        "teacher_id",
        "period_id",
        "description",
        "status",
        "created_at",
        "updated_at",
        "deleted_at",
    ];

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let raw: String = row.get(6)?;
        let status = CourseStatus::parse(&raw).ok_or_else(|| bad_value(6, &raw))?;
        Ok(Course {
            id: row.get(0)?,
            name: row.get(1)?,
            code: row.get(2)?,
            teacher_id: row.get(3)?,
            period_id: row.get(4)?,
            description: row.get(5)?,
            status,
            created_at: dt(row.get(7)?),
            updated_at: dt(row.get(8)?),
            deleted_at: opt_dt(row.get(9)?),
        })
    }

    fn insert_values(&self) -> Vec<SqlValue> {
        vec![
            self.name.clone().into(),
            self.code.clone().into(),
            self.teacher_id.into(),
            self.period_id.into(),
            self.description.clone().into(),
            self.status.as_str().into(),
            self.created_at.into(),
            self.updated_at.into(),
            self.deleted_at.into(),
        ]
    }
}

impl SoftDelete for Course {}

impl Entity for CourseEnrollment {
    const TABLE: &'static str = "course_enrollments";
    const COLUMNS: &'static [&'static str] = &[
        "student_id",
        "course_id",
        "enrollment_date",
        "status",
        "created_at",
        "updated_at",
    ];
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "student_id",
        "course_id",
        "enrollment_date",
        "status",
        "created_at",
        "updated_at",
    ];

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let raw: String = row.get(3)?;
        let status = EnrollmentStatus::parse(&raw).ok_or_else(|| bad_value(3, &raw))?;
        Ok(CourseEnrollment {
            student_id: row.get(0)?,
            course_id: row.get(1)?,
            enrollment_date: dt(row.get(2)?),
            status,
            created_at: dt(row.get(4)?),
            updated_at: dt(row.get(5)?),
        })
    }

    fn insert_values(&self) -> Vec<SqlValue> {
        vec![
            self.student_id.into(),
            self.course_id.into(),
            self.enrollment_date.into(),
            self.status.as_str().into(),
            self.created_at.into(),
            self.updated_at.into(),
        ]
    }
}

impl Entity for Unit {
    const TABLE: &'static str = "units";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "course_id",
        "name",
        "description",
        "order_index",
        "start_date",
        "end_date",
        "created_at",
        "updated_at",
    ];
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "course_id",
        "name",
        "description",
        "order_index",
        "start_date",
        "end_date",
        "created_at",
        "updated_at",
    ];

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Unit {
            id: row.get(0)?,
            course_id: row.get(1)?,
            name: row.get(2)?,
            description: row.get(3)?,
            order_index: row.get(4)?,
            start_date: opt_date(row.get(5)?),
            end_date: opt_date(row.get(6)?),
            created_at: dt(row.get(7)?),
            updated_at: dt(row.get(8)?),
        })
    }

    fn insert_values(&self) -> Vec<SqlValue> {
        vec![
            self.course_id.into(),
            self.name.clone().into(),
            self.description.clone().into(),
            self.order_index.into(),
            self.start_date.into(),
            self.end_date.into(),
            self.created_at.into(),
            self.updated_at.into(),
        ]
    }

    fn validate(&self) -> scholar_core::Result<()> {
        rules::validate_unit(self)
    }
}

impl Entity for Topic {
    const TABLE: &'static str = "topics";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "unit_id",
        "name",
        "description",
        "order_index",
        "created_at",
        "updated_at",
    ];
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "unit_id",
        "name",
        "description",
        "order_index",
        "created_at",
        "updated_at",
    ];

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Topic {
            id: row.get(0)?,
            unit_id: row.get(1)?,
            name: row.get(2)?,
            description: row.get(3)?,
            order_index: row.get(4)?,
            created_at: dt(row.get(5)?),
            updated_at: dt(row.get(6)?),
        })
    }

    fn insert_values(&self) -> Vec<SqlValue> {
        vec![
            self.unit_id.into(),
            self.name.clone().into(),
            self.description.clone().into(),
            self.order_index.into(),
            self.created_at.into(),
            self.updated_at.into(),
        ]
    }
}

impl Entity for Platform {
    const TABLE: &'static str = "platforms";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "name",
        "base_url",
        "api_config",
        "is_active",
        "created_at",
        "updated_at",
    ];
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "name",
        "base_url",
        "api_config",
        "is_active",
        "created_at",
        "updated_at",
    ];

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let api_config: Option<String> = row.get(3)?;
        Ok(Platform {
            id: row.get(0)?,
            name: row.get(1)?,
            base_url: row.get(2)?,
            api_config: api_config.and_then(|raw| serde_json::from_str(&raw).ok()),
            is_active: row.get::<_, i64>(4)? != 0,
            created_at: dt(row.get(5)?),
            updated_at: dt(row.get(6)?),
        })
    }

    fn insert_values(&self) -> Vec<SqlValue> {
        vec![
            self.name.clone().into(),
            self.base_url.clone().into(),
            self.api_config.as_ref().map(|v| v.to_string()).into(),
            self.is_active.into(),
            self.created_at.into(),
            self.updated_at.into(),
        ]
    }
}

impl Entity for EvaluationComponent {
    const TABLE: &'static str = "evaluation_components";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "course_id",
        "name",
        "weight",
        "is_default",
        "platform_id",
        "created_at",
        "updated_at",
    ];
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "course_id",
        "name",
        "weight",
        "is_default",
        "platform_id",
        "created_at",
        "updated_at",
    ];

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(EvaluationComponent {
            id: row.get(0)?,
            course_id: row.get(1)?,
            name: row.get(2)?,
            weight: row.get(3)?,
            is_default: row.get::<_, i64>(4)? != 0,
            platform_id: row.get(5)?,
            created_at: dt(row.get(6)?),
            updated_at: dt(row.get(7)?),
        })
    }

    fn insert_values(&self) -> Vec<SqlValue> {
        vec![
            self.course_id.into(),
            self.name.clone().into(),
            self.weight.into(),
            self.is_default.into(),
            self.platform_id.into(),
            self.created_at.into(),
            self.updated_at.into(),
        ]
    }

    fn validate(&self) -> scholar_core::Result<()> {
        rules::validate_component(self)
    }
}

impl Entity for Task {
    const TABLE: &'static str = "tasks";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "course_id",
        "unit_id",
        "component_id",
        "platform_id",
        "name",
        "description",
        "max_score",
        "weight",
        "external_url",
        "external_id",
        "due_date",
        "created_at",
        "updated_at",
    ];
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "course_id",
        "unit_id",
        "component_id",
        "platform_id",
        "name",
        "description",
        "max_score",
        "weight",
        "external_url",
        "external_id",
        "due_date",
        "created_at",
        "updated_at",
    ];

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Task {
            id: row.get(0)?,
            course_id: row.get(1)?,
            unit_id: row.get(2)?,
            component_id: row.get(3)?,
            platform_id: row.get(4)?,
            name: row.get(5)?,
            description: row.get(6)?,
            max_score: row.get(7)?,
            weight: row.get(8)?,
            external_url: row.get(9)?,
            external_id: row.get(10)?,
            due_date: dt(row.get(11)?),
            created_at: dt(row.get(12)?),
            updated_at: dt(row.get(13)?),
        })
    }

    fn insert_values(&self) -> Vec<SqlValue> {
        vec![
            self.course_id.into(),
            self.unit_id.into(),
            self.component_id.into(),
            self.platform_id.into(),
            self.name.clone().into(),
            self.description.clone().into(),
            self.max_score.into(),
            self.weight.into(),
            self.external_url.clone().into(),
            self.external_id.clone().into(),
            self.due_date.into(),
            self.created_at.into(),
            self.updated_at.into(),
        ]
    }

    fn validate(&self) -> scholar_core::Result<()> {
        rules::validate_task(self)
    }
}

impl Entity for TaskSubmission {
    const TABLE: &'static str = "task_submissions";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "task_id",
        "student_id",
        "submission_url",
        "submission_text",
        "submitted_at",
        "status",
        "created_at",
        "updated_at",
    ];
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "task_id",
        "student_id",
        "submission_url",
        "submission_text",
        "submitted_at",
        "status",
        "created_at",
        "updated_at",
    ];

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let raw: String = row.get(6)?;
        let status = SubmissionStatus::parse(&raw).ok_or_else(|| bad_value(6, &raw))?;
        Ok(TaskSubmission {
            id: row.get(0)?,
            task_id: row.get(1)?,
            student_id: row.get(2)?,
            submission_url: row.get(3)?,
            submission_text: row.get(4)?,
            submitted_at: dt(row.get(5)?),
            status,
            created_at: dt(row.get(7)?),
            updated_at: dt(row.get(8)?),
        })
    }

    fn insert_values(&self) -> Vec<SqlValue> {
        vec![
            self.task_id.into(),
            self.student_id.into(),
            self.submission_url.clone().into(),
            self.submission_text.clone().into(),
            self.submitted_at.into(),
            self.status.as_str().into(),
            self.created_at.into(),
            self.updated_at.into(),
        ]
    }
}

impl Entity for Grade {
    const TABLE: &'static str = "grades";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "submission_id",
        "grade",
        "feedback",
        "graded_by",
        "created_at",
        "updated_at",
    ];
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "submission_id",
        "grade",
        "feedback",
        "graded_by",
        "created_at",
        "updated_at",
    ];

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Grade {
            id: row.get(0)?,
            submission_id: row.get(1)?,
            grade: row.get(2)?,
            feedback: row.get(3)?,
            graded_by: row.get(4)?,
            created_at: dt(row.get(5)?),
            updated_at: dt(row.get(6)?),
        })
    }

    fn insert_values(&self) -> Vec<SqlValue> {
        vec![
            self.submission_id.into(),
            self.grade.into(),
            self.feedback.clone().into(),
            self.graded_by.into(),
            self.created_at.into(),
            self.updated_at.into(),
        ]
    }

    fn validate(&self) -> scholar_core::Result<()> {
        rules::validate_grade(self)
    }
}

impl Entity for Attendance {
    const TABLE: &'static str = "attendance";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "course_id",
        "student_id",
        "date",
        "status",
        "notes",
        "created_at",
        "updated_at",
    ];
    const INSERT_COLUMNS: &'static [&'static str] = &[
        "course_id",
        "student_id",
        "date",
        "status",
        "notes",
        "created_at",
        "updated_at",
    ];

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let raw: String = row.get(4)?;
        let status = AttendanceStatus::parse(&raw).ok_or_else(|| bad_value(4, &raw))?;
        Ok(Attendance {
            id: row.get(0)?,
            course_id: row.get(1)?,
            student_id: row.get(2)?,
            date: dt(row.get(3)?),
            status,
            notes: row.get(5)?,
            created_at: dt(row.get(6)?),
            updated_at: dt(row.get(7)?),
        })
    }

    fn insert_values(&self) -> Vec<SqlValue> {
        vec![
            self.course_id.into(),
            self.student_id.into(),
            self.date.into(),
            self.status.as_str().into(),
            self.notes.clone().into(),
            self.created_at.into(),
            self.updated_at.into(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_value_counts_match_columns() {
        let user = User::new("Ada Lovelace", "alovelace", "ada@example.com", "s3cr3t-pw");
        assert_eq!(user.insert_values().len(), User::INSERT_COLUMNS.len());

        let course = Course::new("Databases", "DB-101", 1, 1);
        assert_eq!(course.insert_values().len(), Course::INSERT_COLUMNS.len());

        let task = Task::new(1, 1, 1, "Homework 1", Utc::now());
        assert_eq!(task.insert_values().len(), Task::INSERT_COLUMNS.len());
    }

    #[test]
    fn test_date_hydration_is_lenient() {
        assert_eq!(date("2026-02-01"), NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
        // Malformed stored text falls back instead of panicking
        assert_eq!(date("not-a-date"), NaiveDate::default());
    }
}
