pub mod dashboard;
pub mod header;
pub mod login_form;
pub mod payments;
pub mod student_lookup;

pub use dashboard::Dashboard;
pub use login_form::LoginForm;
