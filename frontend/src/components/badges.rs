use leptos::*;

use crate::types::{LeaveStatus, NoticeKind, Priority};

const BADGE_BASE: &str = "inline-flex items-center rounded-full px-2 py-0.5 text-xs font-medium";

pub fn badge_classes(tone: &str) -> String {
    format!("{} {}", BADGE_BASE, tone)
}

#[component]
pub fn Badge(#[prop(into)] label: String, tone: &'static str) -> impl IntoView {
    view! { <span class=badge_classes(tone)>{label}</span> }
}

#[component]
pub fn PriorityBadge(priority: Priority) -> impl IntoView {
    view! { <Badge label=priority.label() tone=priority.badge_classes() /> }
}

#[component]
pub fn NoticeBadge(kind: NoticeKind) -> impl IntoView {
    view! { <Badge label=kind.label() tone=kind.badge_classes() /> }
}

#[component]
pub fn LeaveStatusBadge(status: LeaveStatus) -> impl IntoView {
    view! { <Badge label=status.label() tone=status.badge_classes() /> }
}
