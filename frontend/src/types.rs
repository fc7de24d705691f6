use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    pub fn badge_classes(&self) -> &'static str {
        match self {
            Priority::High => "bg-red-100 text-red-700",
            Priority::Medium => "bg-amber-100 text-amber-700",
            Priority::Low => "bg-emerald-100 text-emerald-700",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Info,
    Warning,
    Urgent,
}

impl NoticeKind {
    pub const ALL: [NoticeKind; 3] = [NoticeKind::Info, NoticeKind::Warning, NoticeKind::Urgent];

    pub fn label(&self) -> &'static str {
        match self {
            NoticeKind::Info => "Info",
            NoticeKind::Warning => "Warning",
            NoticeKind::Urgent => "Urgent",
        }
    }

    pub fn badge_classes(&self) -> &'static str {
        match self {
            NoticeKind::Info => "bg-sky-100 text-sky-700",
            NoticeKind::Warning => "bg-amber-100 text-amber-700",
            NoticeKind::Urgent => "bg-red-100 text-red-700",
        }
    }

    pub fn border_classes(&self) -> &'static str {
        match self {
            NoticeKind::Info => "border-l-4 border-sky-400",
            NoticeKind::Warning => "border-l-4 border-amber-400",
            NoticeKind::Urgent => "border-l-4 border-red-500",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub id: u64,
    pub title: String,
    pub content: String,
    /// Free-form label such as "2 hours ago"; never parsed.
    pub date: String,
    #[serde(rename = "type")]
    pub kind: NoticeKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: u64,
    pub title: String,
    pub date: NaiveDate,
    pub location: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
        }
    }

    pub fn badge_classes(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "bg-amber-100 text-amber-700",
            LeaveStatus::Approved => "bg-emerald-100 text-emerald-700",
            LeaveStatus::Rejected => "bg-red-100 text-red-700",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRequest {
    pub id: u64,
    pub reason: String,
    pub departure_date: String,
    pub return_date: String,
    pub status: LeaveStatus,
    pub applied_date: NaiveDate,
}
