pub mod edit_payment_modal;
pub mod payment_table;

pub use edit_payment_modal::EditPaymentModal;
pub use payment_table::PaymentTableView;
