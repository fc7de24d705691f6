pub mod dashboard;
pub mod events;
pub mod leave;
pub mod notices;
pub mod tasks;

pub use dashboard::DashboardPage;
pub use events::EventsPage;
pub use leave::LeavePage;
pub use notices::NoticesPage;
pub use tasks::TasksPage;
