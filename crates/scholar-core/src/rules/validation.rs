//! Per-entity validation checks

use std::sync::OnceLock;

use regex::Regex;

use crate::errors::{Result, ScError, ScErrorKind};
use crate::model::{
    AcademicPeriod, Degree, EvaluationComponent, Grade, Role, Student, Task, Teacher, Unit, User,
};

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$")
            .expect("email pattern is a valid regex")
    })
}

fn violation(entity: &'static str, message: String) -> ScError {
    ScError::new(ScErrorKind::ConstraintViolation)
        .with_entity(entity)
        .with_op("validate")
        .with_message(message)
}

/// Validate a User: username length, password length, email format
pub fn validate_user(user: &User) -> Result<()> {
    if user.username.chars().count() <= 3 {
        return Err(violation(
            "users",
            format!("username '{}' must be longer than 3 characters", user.username),
        ));
    }
    if user.password.chars().count() <= 6 {
        return Err(violation(
            "users",
            "password must be longer than 6 characters".to_string(),
        ));
    }
    if !email_regex().is_match(&user.email) {
        return Err(violation(
            "users",
            format!("'{}' is not a valid email address", user.email),
        ));
    }
    Ok(())
}

/// Validate a Role: name length
pub fn validate_role(role: &Role) -> Result<()> {
    if role.name.chars().count() <= 3 {
        return Err(violation(
            "roles",
            format!("role name '{}' must be longer than 3 characters", role.name),
        ));
    }
    Ok(())
}

/// Validate a Degree: name length, description length when present
pub fn validate_degree(degree: &Degree) -> Result<()> {
    if degree.name.chars().count() <= 3 {
        return Err(violation(
            "degrees",
            format!("degree name '{}' must be longer than 3 characters", degree.name),
        ));
    }
    if let Some(description) = &degree.description {
        if description.chars().count() <= 3 {
            return Err(violation(
                "degrees",
                "description must be longer than 3 characters".to_string(),
            ));
        }
    }
    Ok(())
}

/// Validate an AcademicPeriod: end date on or after start date
pub fn validate_period(period: &AcademicPeriod) -> Result<()> {
    if period.end_date < period.start_date {
        return Err(violation(
            "academic_periods",
            format!(
                "end_date {} precedes start_date {}",
                period.end_date, period.start_date
            ),
        ));
    }
    Ok(())
}

/// Validate a Teacher: specialization length when present
pub fn validate_teacher(teacher: &Teacher) -> Result<()> {
    if let Some(specialization) = &teacher.specialization {
        if specialization.chars().count() <= 3 {
            return Err(violation(
                "teachers",
                "specialization must be longer than 3 characters".to_string(),
            ));
        }
    }
    Ok(())
}

/// Validate a Student: registration key length
pub fn validate_student(student: &Student) -> Result<()> {
    if student.key_registration.chars().count() < 5 {
        return Err(violation(
            "students",
            format!(
                "key_registration '{}' must be at least 5 characters",
                student.key_registration
            ),
        ));
    }
    Ok(())
}

/// Validate a Unit: end date on or after start date, when both are scheduled
pub fn validate_unit(unit: &Unit) -> Result<()> {
    if let (Some(start), Some(end)) = (unit.start_date, unit.end_date) {
        if end < start {
            return Err(violation(
                "units",
                format!("end_date {} precedes start_date {}", end, start),
            ));
        }
    }
    Ok(())
}

/// Validate an EvaluationComponent: weight within `[0, 100]`
pub fn validate_component(component: &EvaluationComponent) -> Result<()> {
    if !(0.0..=100.0).contains(&component.weight) {
        return Err(violation(
            "evaluation_components",
            format!("weight {} outside [0, 100]", component.weight),
        ));
    }
    Ok(())
}

/// Validate a Task: positive max score, weight within `[0, 100]`
pub fn validate_task(task: &Task) -> Result<()> {
    if task.max_score <= 0.0 {
        return Err(violation(
            "tasks",
            format!("max_score {} must be positive", task.max_score),
        ));
    }
    if !(0.0..=100.0).contains(&task.weight) {
        return Err(violation(
            "tasks",
            format!("weight {} outside [0, 100]", task.weight),
        ));
    }
    Ok(())
}

/// Validate a Grade: value within `[0, 100]`
pub fn validate_grade(grade: &Grade) -> Result<()> {
    if !(0.0..=100.0).contains(&grade.grade) {
        return Err(violation(
            "grades",
            format!("grade {} outside [0, 100]", grade.grade),
        ));
    }
    Ok(())
}
