//! Plain-text rendering of backend entities

use std::fmt::Display;

use shared::Page;
use shared::models::{
    Classroom, DashboardStats, Event, FeeSummary, Grade, MonthlyFee, Notice, Student, Subject,
    Teacher, User,
};

/// One line per entity in a listing
pub trait Row {
    fn row(&self) -> String;
}

fn or_dash<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn classroom_label(student: &Student) -> Option<String> {
    student
        .classroom_name
        .clone()
        .or_else(|| student.classroom.map(|id| format!("#{id}")))
}

impl Row for Student {
    fn row(&self) -> String {
        format!(
            "#{:<5} {:<32} reg {:<10} class {}{}",
            self.id,
            self.name,
            or_dash(self.registration_number.as_deref()),
            or_dash(classroom_label(self)),
            if self.is_active { "" } else { " (inactive)" }
        )
    }
}

impl Row for Teacher {
    fn row(&self) -> String {
        format!(
            "#{:<5} {:<32} {}",
            self.id,
            self.name,
            or_dash(self.specialization.as_deref())
        )
    }
}

impl Row for Classroom {
    fn row(&self) -> String {
        let shift = self.shift.map(|s| s.as_str());
        format!(
            "#{:<5} {:<20} {} {:<10} {}/{}",
            self.id,
            self.name,
            self.year,
            or_dash(shift),
            or_dash(self.student_count),
            or_dash(self.capacity)
        )
    }
}

impl Row for Subject {
    fn row(&self) -> String {
        format!(
            "#{:<5} {:<8} {:<30} {}h",
            self.id,
            or_dash(self.code.as_deref()),
            self.name,
            or_dash(self.workload_hours)
        )
    }
}

impl Row for Grade {
    fn row(&self) -> String {
        format!(
            "#{:<5} {:<28} {:<20} term {} {}",
            self.id,
            or_dash(self.student_name.as_deref()),
            or_dash(self.subject_name.as_deref()),
            self.term,
            self.value
        )
    }
}

impl Row for Event {
    fn row(&self) -> String {
        let until = self
            .end_date
            .filter(|end| *end != self.start_date)
            .map(|end| format!(" to {end}"))
            .unwrap_or_default();
        format!("#{:<5} {}{} {}", self.id, self.start_date, until, self.title)
    }
}

impl Row for Notice {
    fn row(&self) -> String {
        format!(
            "#{:<5} [{}] {}{}",
            self.id,
            self.audience.as_str(),
            self.title,
            if self.is_published { "" } else { " (draft)" }
        )
    }
}

impl Row for User {
    fn row(&self) -> String {
        format!(
            "#{:<5} {:<20} {:<28} {}",
            self.id,
            self.username,
            self.display_name(),
            or_dash(self.role.as_deref())
        )
    }
}

impl Row for MonthlyFee {
    fn row(&self) -> String {
        format!(
            "#{:<5} {:<28} {} due {} {:>10} {}",
            self.id,
            self.student_name.clone().unwrap_or_else(|| format!("student {}", self.student)),
            self.reference_month.format("%Y-%m"),
            self.due_date,
            self.amount,
            self.status
        )
    }
}

/// Listing with a paging footer
pub fn page<T: Row>(page: &Page<T>) -> String {
    if page.is_empty() {
        return "No results".to_string();
    }
    let mut out: Vec<String> = page.results.iter().map(Row::row).collect();
    let mut footer = format!("{} total", page.count);
    if page.total_pages > 1 {
        footer.push_str(&format!(", page {} of {}", page.current_page, page.total_pages));
    }
    if page.has_next() {
        footer.push_str(", more with --page");
    }
    out.push(footer);
    out.join("\n")
}

pub fn dashboard(stats: &DashboardStats) -> String {
    let percent = |v: Option<f64>| v.map(|v| format!("{v:.1}%")).unwrap_or_else(|| "-".into());
    [
        format!("Students       {} ({} active)", stats.total_students, stats.active_students),
        format!("Teachers       {}", stats.total_teachers),
        format!("Classes        {}", stats.total_classrooms),
        format!("Subjects       {}", stats.total_subjects),
        format!(
            "Average grade  {}",
            stats.average_grade.map(|g| format!("{g:.2}")).unwrap_or_else(|| "-".into())
        ),
        format!("Approval rate  {}", percent(stats.approval_rate)),
        format!("Fees pending   {}", stats.pending_fees),
        format!("Fees overdue   {}", stats.overdue_fees),
        format!("Revenue/month  {}", or_dash(stats.monthly_revenue)),
    ]
    .join("\n")
}

pub fn fee_summary(summary: &FeeSummary) -> String {
    [
        format!("Expected  {:>12}", summary.total_expected),
        format!("Received  {:>12}  ({} paid)", summary.total_received, summary.paid_count),
        format!("Pending   {:>12}  ({} pending)", summary.total_pending, summary.pending_count),
        format!("Overdue   {:>12}  ({} overdue)", summary.total_overdue, summary.overdue_count),
    ]
    .join("\n")
}

pub fn student(s: &Student) -> String {
    [
        format!("#{} {}", s.id, s.name),
        format!("Registration  {}", or_dash(s.registration_number.as_deref())),
        format!("Birth date    {}", or_dash(s.birth_date)),
        format!("Email         {}", or_dash(s.email.as_deref())),
        format!("Phone         {}", or_dash(s.phone.as_deref())),
        format!(
            "Guardian      {} {}",
            or_dash(s.guardian_name.as_deref()),
            s.guardian_phone.as_deref().unwrap_or_default()
        ),
        format!(
            "Class         {}",
            or_dash(classroom_label(s))
        ),
        format!("Active        {}", if s.is_active { "yes" } else { "no" }),
    ]
    .join("\n")
}
