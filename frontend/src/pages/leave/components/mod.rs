pub mod history;
pub mod leave_form;

pub use history::LeaveHistoryTable;
pub use leave_form::LeaveRequestForm;
