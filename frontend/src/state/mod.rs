pub mod dashboard;
pub mod edit_dialog;
pub mod flows;
pub mod in_flight;
pub mod payment_table;
pub mod session;
pub mod view;

pub use view::ViewState;
