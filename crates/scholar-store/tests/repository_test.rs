// Integration tests for the generic repository contract:
// get / get_all / add / update / delete over live schema tables.

use chrono::NaiveDate;
use rusqlite::Connection;
use scholar_core::errors::ScErrorKind;
use scholar_core::model::{
    AcademicPeriod, Course, CourseEnrollment, Degree, EnrollmentStatus, Platform, Student, Task,
    Teacher, Unit, User,
};
use scholar_store::{db, migrations, Changes, Predicate, Repository};

fn setup_test_db() -> Connection {
    let mut conn = db::open_in_memory().expect("Failed to create in-memory database");
    db::configure(&conn).expect("Failed to configure connection");
    migrations::apply_migrations(&mut conn).expect("Failed to apply migrations");
    conn
}

fn seed_user(conn: &Connection, tag: &str) -> User {
    let user = User::new(
        format!("User {}", tag),
        format!("user_{}", tag),
        format!("{}@example.com", tag),
        "s3cr3t-pw",
    );
    Repository::<User>::new(conn).add(&user).unwrap()
}

fn seed_degree(conn: &Connection, tag: &str) -> Degree {
    let degree = Degree::new(format!("Degree {}", tag), None);
    Repository::<Degree>::new(conn).add(&degree).unwrap()
}

fn seed_period(conn: &Connection, name: &str) -> AcademicPeriod {
    let period = AcademicPeriod::new(
        name,
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
    );
    Repository::<AcademicPeriod>::new(conn).add(&period).unwrap()
}

fn seed_course(conn: &Connection, tag: &str) -> Course {
    let user = seed_user(conn, &format!("t_{}", tag));
    let teacher = Repository::<Teacher>::new(conn)
        .add(&Teacher::new(user.id, Some("Databases".to_string())))
        .unwrap();
    let period = seed_period(conn, &format!("2026-{}", tag));
    Repository::<Course>::new(conn)
        .add(&Course::new(
            format!("Course {}", tag),
            format!("C-{}", tag),
            teacher.id,
            period.id,
        ))
        .unwrap()
}

fn seed_student(conn: &Connection, tag: &str) -> Student {
    let user = seed_user(conn, &format!("s_{}", tag));
    let degree = seed_degree(conn, &format!("d_{}", tag));
    Repository::<Student>::new(conn)
        .add(&Student::new(user.id, degree.id, format!("REG-{}", tag)))
        .unwrap()
}

#[test]
fn test_add_then_get_round_trip() {
    let conn = setup_test_db();
    let users = Repository::<User>::new(&conn);

    // Given: A new unpersisted user
    let draft = User::new("Ada Lovelace", "alovelace", "ada@example.com", "s3cr3t-pw");

    // When: It is added and fetched back by its assigned id
    let added = users.add(&draft).unwrap();
    let fetched = users.get(&[Predicate::eq("id", added.id)]).unwrap();

    // Then: The id was generated and the write-back equals the fetch
    assert!(added.id > 0);
    assert_eq!(added.fullname, draft.fullname);
    assert_eq!(added.username, draft.username);
    assert_eq!(added.email, draft.email);
    assert_eq!(fetched, Some(added));
}

#[test]
fn test_get_returns_none_when_nothing_matches() {
    let conn = setup_test_db();
    let users = Repository::<User>::new(&conn);
    let found = users.get(&[Predicate::eq("id", 9999_i64)]).unwrap();
    assert_eq!(found, None);
}

#[test]
fn test_get_with_multiple_matches_is_ambiguous() {
    let conn = setup_test_db();
    seed_user(&conn, "amb_one");
    seed_user(&conn, "amb_two");

    let users = Repository::<User>::new(&conn);
    let err = users
        .get(&[Predicate::like("username", "user_amb_%")])
        .unwrap_err();
    assert_eq!(err.kind(), ScErrorKind::AmbiguousMatch);
    assert_eq!(err.entity(), Some("users"));
}

#[test]
fn test_get_combines_predicates_with_and() {
    let conn = setup_test_db();
    seed_user(&conn, "and_one");
    let target = seed_user(&conn, "and_two");

    let users = Repository::<User>::new(&conn);
    let found = users
        .get(&[
            Predicate::like("username", "user_and_%"),
            Predicate::eq("email", "and_two@example.com"),
        ])
        .unwrap();
    assert_eq!(found, Some(target));
}

#[test]
fn test_get_all_without_predicates_returns_all_rows() {
    let conn = setup_test_db();
    for tag in ["all_a", "all_b", "all_c"] {
        seed_user(&conn, tag);
    }

    let users = Repository::<User>::new(&conn);
    assert_eq!(users.get_all(&[]).unwrap().len(), 3);
}

#[test]
fn test_get_all_filters_by_all_predicates() {
    let conn = setup_test_db();
    let course = seed_course(&conn, "flt");
    let units = Repository::<Unit>::new(&conn);
    for index in 1..=4 {
        units
            .add(&Unit::new(course.id, format!("Unit {}", index), index))
            .unwrap();
    }

    let matching = units
        .get_all(&[
            Predicate::eq("course_id", course.id),
            Predicate::gt("order_index", 2_i64),
        ])
        .unwrap();
    assert_eq!(matching.len(), 2);
    assert!(matching.iter().all(|u| u.order_index > 2));
}

#[test]
fn test_get_all_ordered() {
    let conn = setup_test_db();
    let course = seed_course(&conn, "ord");
    let units = Repository::<Unit>::new(&conn);
    for index in [3_i64, 1, 2] {
        units
            .add(&Unit::new(course.id, format!("Unit {}", index), index))
            .unwrap();
    }

    let ordered = units
        .get_all_ordered(&[Predicate::eq("course_id", course.id)], "order_index")
        .unwrap();
    let indexes: Vec<i64> = ordered.iter().map(|u| u.order_index).collect();
    assert_eq!(indexes, vec![1, 2, 3]);
}

#[test]
fn test_get_all_ordered_rejects_unknown_column() {
    let conn = setup_test_db();
    let units = Repository::<Unit>::new(&conn);
    let err = units.get_all_ordered(&[], "no_such_column").unwrap_err();
    assert_eq!(err.kind(), ScErrorKind::InvalidInput);
}

#[test]
fn test_update_applies_values_and_refreshes_updated_at() {
    let conn = setup_test_db();
    let degree = seed_degree(&conn, "upd");
    let degrees = Repository::<Degree>::new(&conn);

    let updated = degrees
        .update(
            &[Predicate::eq("id", degree.id)],
            Changes::new().set("name", "Renamed Degree"),
        )
        .unwrap()
        .expect("row should match");

    assert_eq!(updated.id, degree.id);
    assert_eq!(updated.name, "Renamed Degree");
    // Only the named field changed; timestamps move forward
    assert_eq!(updated.description, degree.description);
    assert_eq!(updated.created_at, degree.created_at);
    assert!(updated.updated_at >= degree.updated_at);
}

#[test]
fn test_update_nonexistent_returns_none() {
    let conn = setup_test_db();
    let degrees = Repository::<Degree>::new(&conn);
    let updated = degrees
        .update(
            &[Predicate::eq("id", 9999_i64)],
            Changes::new().set("name", "Ghost Degree"),
        )
        .unwrap();
    assert_eq!(updated, None);
}

#[test]
fn test_update_with_empty_value_map_is_rejected() {
    let conn = setup_test_db();
    let degrees = Repository::<Degree>::new(&conn);
    let err = degrees
        .update(&[Predicate::eq("id", 1_i64)], Changes::new())
        .unwrap_err();
    assert_eq!(err.kind(), ScErrorKind::InvalidInput);
}

#[test]
fn test_update_affects_every_matching_row() {
    let conn = setup_test_db();
    let course = seed_course(&conn, "multi");
    let units = Repository::<Unit>::new(&conn);
    units.add(&Unit::new(course.id, "Unit A", 1)).unwrap();
    units.add(&Unit::new(course.id, "Unit B", 2)).unwrap();

    let first = units
        .update(
            &[Predicate::eq("course_id", course.id)],
            Changes::new().set("description", "rescheduled"),
        )
        .unwrap();
    assert!(first.is_some());

    let all = units
        .get_all(&[Predicate::eq("course_id", course.id)])
        .unwrap();
    assert_eq!(all.len(), 2);
    assert!(all
        .iter()
        .all(|u| u.description.as_deref() == Some("rescheduled")));
}

#[test]
fn test_delete_then_get_is_empty() {
    let conn = setup_test_db();
    let user = seed_user(&conn, "gone");
    let users = Repository::<User>::new(&conn);

    let removed = users.delete(&[Predicate::eq("id", user.id)]).unwrap();
    assert!(removed);

    let found = users.get(&[Predicate::eq("id", user.id)]).unwrap();
    assert_eq!(found, None);
}

#[test]
fn test_delete_without_match_returns_false() {
    let conn = setup_test_db();
    let users = Repository::<User>::new(&conn);
    let removed = users.delete(&[Predicate::eq("id", 9999_i64)]).unwrap();
    assert!(!removed);
}

#[test]
fn test_delete_removes_every_matching_row() {
    let conn = setup_test_db();
    for tag in ["bulk_a", "bulk_b"] {
        seed_user(&conn, tag);
    }
    let keeper = seed_user(&conn, "keeper");

    let users = Repository::<User>::new(&conn);
    let removed = users
        .delete(&[Predicate::like("username", "user_bulk_%")])
        .unwrap();
    assert!(removed);

    let remaining = users.get_all(&[]).unwrap();
    assert_eq!(remaining, vec![keeper]);
}

#[test]
fn test_composite_key_enrollment_round_trip() {
    let conn = setup_test_db();
    let course = seed_course(&conn, "enr");
    let student = seed_student(&conn, "enr");

    let enrollments = Repository::<CourseEnrollment>::new(&conn);
    let added = enrollments
        .add(&CourseEnrollment::new(student.id, course.id))
        .unwrap();
    assert_eq!(added.status, EnrollmentStatus::Active);

    let fetched = enrollments
        .get(&[
            Predicate::eq("student_id", student.id),
            Predicate::eq("course_id", course.id),
        ])
        .unwrap();
    assert_eq!(fetched, Some(added));

    // Updating through the composite key works like any other predicate set
    let dropped = enrollments
        .update(
            &[
                Predicate::eq("student_id", student.id),
                Predicate::eq("course_id", course.id),
            ],
            Changes::new().set("status", "dropped"),
        )
        .unwrap()
        .unwrap();
    assert_eq!(dropped.status, EnrollmentStatus::Dropped);
}

#[test]
fn test_platform_api_config_round_trip() {
    let conn = setup_test_db();
    let platforms = Repository::<Platform>::new(&conn);

    let mut platform = Platform::new("Moodle");
    platform.base_url = Some("https://moodle.example.com".to_string());
    platform.api_config = Some(serde_json::json!({
        "token_endpoint": "/oauth/token",
        "page_size": 50,
    }));

    let added = platforms.add(&platform).unwrap();
    let fetched = platforms
        .get(&[Predicate::eq("id", added.id)])
        .unwrap()
        .unwrap();
    assert_eq!(fetched.api_config, platform.api_config);
    assert!(fetched.is_active);
}

#[test]
fn test_task_defaults_survive_write_back() {
    let conn = setup_test_db();
    let course = seed_course(&conn, "dflt");
    let unit = Repository::<Unit>::new(&conn)
        .add(&Unit::new(course.id, "Unit 1", 1))
        .unwrap();
    let component = Repository::<scholar_core::model::EvaluationComponent>::new(&conn)
        .add(&scholar_core::model::EvaluationComponent::new(
            course.id, "Homework", 40.0,
        ))
        .unwrap();

    let tasks = Repository::<Task>::new(&conn);
    let added = tasks
        .add(&Task::new(
            course.id,
            unit.id,
            component.id,
            "Homework 1",
            chrono::Utc::now(),
        ))
        .unwrap();
    assert_eq!(added.max_score, 100.0);
    assert_eq!(added.weight, 1.0);
    assert_eq!(added.platform_id, None);
}
