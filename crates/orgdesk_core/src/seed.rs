//! Deterministic mock record sets used by mock mode.
//!
//! # Invariants
//! - Keys are unique per entity kind.
//! - Foreign keys point at records present in the sibling sets.
//! - Seed audit columns use the `system` actor with fixed timestamps.

use crate::model::competency::Competency;
use crate::model::course::Course;
use crate::model::course_event::CourseEvent;
use crate::model::department::Department;
use crate::model::employee::Employee;
use crate::model::record::AuditInfo;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

const SEED_ACTOR: &str = "system";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed date is valid")
}

fn seeded_at(offset_days: i64) -> DateTime<Utc> {
    let base = Utc
        .with_ymd_and_hms(2024, 1, 1, 9, 0, 0)
        .single()
        .expect("seed timestamp is valid");
    base + Duration::days(offset_days)
}

fn audit(offset_days: i64) -> AuditInfo {
    AuditInfo::created(SEED_ACTOR, seeded_at(offset_days))
}

pub fn departments() -> Vec<Department> {
    [
        ("HQ", "Headquarters", "Executive office", None, true),
        ("ENG", "Engineering", "Product and platform engineering", Some("HQ"), true),
        ("QA", "Quality Assurance", "Testing and release quality", Some("ENG"), true),
        ("OPS", "Operations", "Infrastructure and reliability", Some("ENG"), true),
        ("HR", "Human Resources", "People and learning", Some("HQ"), true),
        ("FIN", "Finance", "Accounting and controlling", Some("HQ"), true),
        ("SALES", "Sales", "Field and inside sales", Some("HQ"), false),
    ]
    .into_iter()
    .enumerate()
    .map(|(index, (code, name, description, parent, active))| Department {
        department_code: code.to_string(),
        department_name: name.to_string(),
        description: description.to_string(),
        parent_code: parent.map(str::to_string),
        is_active: active,
        audit: audit(index as i64),
    })
    .collect()
}

/// Twenty job roles, five of them inactive.
pub fn competencies() -> Vec<Competency> {
    [
        ("DEV001", "Junior Developer", "Builds features under guidance", "ENG", 1, true),
        ("DEV002", "Developer", "Delivers features independently", "ENG", 2, true),
        ("DEV003", "Senior Developer", "Owns components and mentors", "ENG", 3, true),
        ("DEV004", "Lead Developer", "Leads a development team", "ENG", 4, false),
        ("ARC001", "Solution Architect", "Designs cross-team solutions", "ENG", 5, true),
        ("QA001", "QA Analyst", "Designs and runs manual test plans", "QA", 1, true),
        ("QA002", "Test Automation Engineer", "Builds automated test suites", "QA", 2, true),
        ("QA003", "QA Lead", "Owns the release quality process", "QA", 4, false),
        ("OPS001", "Site Reliability Engineer", "Keeps production healthy", "OPS", 3, true),
        ("OPS002", "Platform Engineer", "Builds internal developer platforms", "OPS", 3, true),
        ("OPS003", "Infrastructure Manager", "Manages infrastructure budget and staff", "OPS", 4, false),
        ("HR001", "HR Generalist", "Handles day-to-day people operations", "HR", 2, true),
        ("HR002", "Talent Acquisition Partner", "Runs hiring pipelines", "HR", 2, true),
        ("HR003", "Learning Lead", "Plans training and course events", "HR", 4, true),
        ("FIN001", "Financial Analyst", "Prepares reports and forecasts", "FIN", 2, true),
        ("FIN002", "Controller", "Owns accounting close", "FIN", 4, false),
        ("SAL001", "Account Executive", "Closes new business", "SALES", 2, true),
        ("SAL002", "Sales Engineer", "Supports technical sales", "SALES", 3, true),
        ("SAL003", "Sales Director", "Leads the sales organization", "SALES", 5, false),
        ("DAT001", "Data Analyst", "Builds dashboards and analyses", "ENG", 2, true),
    ]
    .into_iter()
    .enumerate()
    .map(
        |(index, (code, name, description, department, level, active))| Competency {
            job_role_code: code.to_string(),
            job_role_name: name.to_string(),
            description: description.to_string(),
            department_code: Some(department.to_string()),
            level,
            is_active: active,
            audit: audit(index as i64),
        },
    )
    .collect()
}

pub fn courses() -> Vec<Course> {
    [
        ("RUST101", "Rust Fundamentals", "Ownership, borrowing and traits", "Engineering", 16, true),
        ("RUST201", "Advanced Rust", "Async, unsafe and macros", "Engineering", 24, true),
        ("TEST101", "Testing Essentials", "Unit and integration testing", "Quality", 8, true),
        ("SRE101", "Reliability Basics", "SLOs, alerting and incident response", "Operations", 12, true),
        ("LEAD101", "First-time Managers", "Feedback, delegation and 1:1s", "Leadership", 12, true),
        ("FIN101", "Budgeting 101", "Planning and tracking budgets", "Finance", 6, false),
        ("SEC101", "Security Awareness", "Phishing, passwords and data handling", "Compliance", 2, true),
        ("SALES101", "Consultative Selling", "Discovery and value selling", "Sales", 10, false),
    ]
    .into_iter()
    .enumerate()
    .map(
        |(index, (code, name, description, category, hours, active))| Course {
            course_code: code.to_string(),
            course_name: name.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            duration_hours: hours,
            is_active: active,
            audit: audit(index as i64),
        },
    )
    .collect()
}

pub fn course_events() -> Vec<CourseEvent> {
    [
        ("RUST101", "Rust Fundamentals - Spring", "Berlin", date(2024, 3, 4), date(2024, 3, 5), 20, true),
        ("RUST101", "Rust Fundamentals - Autumn", "Online", date(2024, 9, 16), date(2024, 9, 17), 40, true),
        ("RUST201", "Advanced Rust - Q2", "Berlin", date(2024, 5, 13), date(2024, 5, 15), 12, true),
        ("TEST101", "Testing Essentials - March", "Online", date(2024, 3, 18), date(2024, 3, 18), 30, true),
        ("SRE101", "Reliability Basics - April", "Munich", date(2024, 4, 8), date(2024, 4, 9), 16, true),
        ("LEAD101", "First-time Managers - Cohort 1", "Hamburg", date(2024, 2, 12), date(2024, 2, 13), 10, false),
        ("LEAD101", "First-time Managers - Cohort 2", "Hamburg", date(2024, 10, 7), date(2024, 10, 8), 10, true),
        ("SEC101", "Security Awareness - Annual", "Online", date(2024, 1, 22), date(2024, 1, 22), 200, true),
        ("FIN101", "Budgeting 101 - Q3", "Berlin", date(2024, 7, 1), date(2024, 7, 1), 15, false),
        ("TEST101", "Testing Essentials - November", "Munich", date(2024, 11, 4), date(2024, 11, 4), 25, true),
    ]
    .into_iter()
    .enumerate()
    .map(
        |(index, (course, name, location, start, end, capacity, active))| CourseEvent {
            event_id: format!("00000000-0000-4000-8000-{:012}", index + 1),
            course_code: course.to_string(),
            event_name: name.to_string(),
            location: location.to_string(),
            start_date: start,
            end_date: end,
            capacity,
            is_active: active,
            audit: audit(index as i64),
        },
    )
    .collect()
}

pub fn employees() -> Vec<Employee> {
    [
        ("E1001", "Alex Morgan", "alex.morgan@example.com", "ENG", "DEV003", date(2019, 4, 1), true),
        ("E1002", "Sam Lee", "sam.lee@example.com", "ENG", "DEV001", date(2023, 9, 1), true),
        ("E1003", "Jordan Kim", "jordan.kim@example.com", "ENG", "ARC001", date(2016, 2, 15), true),
        ("E1004", "Taylor Brooks", "taylor.brooks@example.com", "QA", "QA002", date(2021, 6, 7), true),
        ("E1005", "Riley Chen", "riley.chen@example.com", "QA", "QA001", date(2022, 1, 10), false),
        ("E1006", "Casey Novak", "casey.novak@example.com", "OPS", "OPS001", date(2020, 11, 2), true),
        ("E1007", "Morgan Diaz", "morgan.diaz@example.com", "OPS", "OPS002", date(2022, 8, 22), true),
        ("E1008", "Jamie Patel", "jamie.patel@example.com", "HR", "HR003", date(2018, 5, 14), true),
        ("E1009", "Avery Schmidt", "avery.schmidt@example.com", "HR", "HR002", date(2023, 3, 6), true),
        ("E1010", "Quinn Walker", "quinn.walker@example.com", "FIN", "FIN001", date(2021, 10, 18), true),
        ("E1011", "Drew Fischer", "drew.fischer@example.com", "SALES", "SAL001", date(2020, 7, 1), false),
        ("E1012", "Robin Okafor", "robin.okafor@example.com", "ENG", "DAT001", date(2024, 2, 1), true),
    ]
    .into_iter()
    .enumerate()
    .map(
        |(index, (code, name, email, department, role, hired, active))| Employee {
            employee_code: code.to_string(),
            full_name: name.to_string(),
            email: email.to_string(),
            department_code: department.to_string(),
            job_role_code: role.to_string(),
            hire_date: hired,
            is_active: active,
            audit: audit(index as i64),
        },
    )
    .collect()
}
