//! Evaluation components, tasks, submissions, and grades

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A weighted bucket of a course's final grade (exams, homework, project…)
///
/// Weights are percentages in `[0, 100]`. A component may be tied to an
/// external [`super::Platform`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationComponent {
    /// Engine-assigned identifier (0 until persisted)
    pub id: i64,

    pub course_id: i64,

    pub name: String,

    /// Share of the course grade, in `[0, 100]`
    pub weight: f64,

    /// Whether tasks land in this component when none is chosen explicitly
    pub is_default: bool,

    pub platform_id: Option<i64>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EvaluationComponent {
    /// Create a new unpersisted component
    pub fn new(course_id: i64, name: impl Into<String>, weight: f64) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            course_id,
            name: name.into(),
            weight,
            is_default: false,
            platform_id: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// An assignment students must submit work for
///
/// Belongs to a course, a unit, and an evaluation component, and may live on
/// an external platform (tracked via `external_url`/`external_id`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Engine-assigned identifier (0 until persisted)
    pub id: i64,

    pub course_id: i64,
    pub unit_id: i64,
    pub component_id: i64,
    pub platform_id: Option<i64>,

    pub name: String,
    pub description: Option<String>,

    /// Best achievable score, strictly positive
    pub max_score: f64,

    /// Weight within the component, in `[0, 100]`
    pub weight: f64,

    /// Link to the task on its external platform, if any
    pub external_url: Option<String>,
    /// Identifier of the task on its external platform, if any
    pub external_id: Option<String>,

    pub due_date: DateTime<Utc>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new unpersisted task with the catalog defaults
    /// (`max_score = 100`, `weight = 1`)
    pub fn new(
        course_id: i64,
        unit_id: i64,
        component_id: i64,
        name: impl Into<String>,
        due_date: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            course_id,
            unit_id,
            component_id,
            platform_id: None,
            name: name.into(),
            description: None,
            max_score: 100.0,
            weight: 1.0,
            external_url: None,
            external_id: None,
            due_date,
            created_at: now,
            updated_at: now,
        }
    }
}

/// State of a task submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Draft,
    Submitted,
    Late,
    Graded,
    Returned,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Draft => "draft",
            SubmissionStatus::Submitted => "submitted",
            SubmissionStatus::Late => "late",
            SubmissionStatus::Graded => "graded",
            SubmissionStatus::Returned => "returned",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "draft" => Some(SubmissionStatus::Draft),
            "submitted" => Some(SubmissionStatus::Submitted),
            "late" => Some(SubmissionStatus::Late),
            "graded" => Some(SubmissionStatus::Graded),
            "returned" => Some(SubmissionStatus::Returned),
            _ => None,
        }
    }
}

/// A student's submission for a task
///
/// Work arrives either as an URL or inline text; a submission receives at
/// most one [`Grade`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskSubmission {
    /// Engine-assigned identifier (0 until persisted)
    pub id: i64,

    pub task_id: i64,
    pub student_id: i64,

    pub submission_url: Option<String>,
    pub submission_text: Option<String>,

    pub submitted_at: DateTime<Utc>,

    pub status: SubmissionStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TaskSubmission {
    /// Create a new unpersisted submission, `submitted` as of now
    pub fn new(task_id: i64, student_id: i64) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            task_id,
            student_id,
            submission_url: None,
            submission_text: None,
            submitted_at: now,
            status: SubmissionStatus::Submitted,
            created_at: now,
            updated_at: now,
        }
    }
}

/// The grade a submission received
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grade {
    /// Engine-assigned identifier (0 until persisted)
    pub id: i64,

    pub submission_id: i64,

    /// Awarded value, in `[0, 100]`
    pub grade: f64,

    pub feedback: Option<String>,

    /// User (normally the course teacher) who graded the submission
    pub graded_by: i64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Grade {
    /// Create a new unpersisted grade
    pub fn new(submission_id: i64, grade: f64, graded_by: i64) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            submission_id,
            grade,
            feedback: None,
            graded_by,
            created_at: now,
            updated_at: now,
        }
    }
}
