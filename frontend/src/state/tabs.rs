#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Dashboard,
    Tasks,
    Notices,
    Events,
    Leave,
}

impl Tab {
    pub const ALL: [Tab; 5] = [
        Tab::Dashboard,
        Tab::Tasks,
        Tab::Notices,
        Tab::Events,
        Tab::Leave,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Tasks => "Tasks",
            Tab::Notices => "Notices",
            Tab::Events => "Events",
            Tab::Leave => "Leave",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Tasks => "tasks",
            Tab::Notices => "notices",
            Tab::Events => "events",
            Tab::Leave => "leave",
        }
    }
}
