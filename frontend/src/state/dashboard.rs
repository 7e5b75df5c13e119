use std::rc::Rc;

use shared::{Payment, PaymentId};
use yew::Reducible;

use super::edit_dialog::EditDialog;
use super::payment_table::PaymentTable;

/// Everything the dashboard shows below the header
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    /// Text of the student lookup field
    pub student_id_input: String,
    /// Student whose payments are on screen
    pub student_id: Option<String>,
    /// `None` until a list has been loaded; the history section stays hidden
    pub table: Option<PaymentTable>,
    pub edit: EditDialog,
    pub loading: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardAction {
    StudentIdChanged(String),
    LoadStarted,
    Loaded {
        student_id: String,
        payments: Vec<Payment>,
    },
    LoadFailed,
    EditOpened {
        payment_id: PaymentId,
        amount: f64,
    },
    EditAmountChanged(String),
    EditCancelled,
    /// The update of `payment_id` went through
    EditSaved {
        payment_id: PaymentId,
    },
}

impl DashboardState {
    /// Student the list should be re-fetched for after a mutation
    pub fn current_student(&self) -> Option<&str> {
        self.student_id.as_deref()
    }

    pub fn apply(&mut self, action: DashboardAction) {
        match action {
            DashboardAction::StudentIdChanged(input) => self.student_id_input = input,
            DashboardAction::LoadStarted => self.loading = true,
            DashboardAction::Loaded { student_id, payments } => {
                self.table = Some(PaymentTable::project(&payments));
                self.student_id = Some(student_id);
                self.loading = false;
            }
            // The previous table stays on screen
            DashboardAction::LoadFailed => self.loading = false,
            DashboardAction::EditOpened { payment_id, amount } => {
                self.edit = EditDialog::open(payment_id, amount);
            }
            DashboardAction::EditAmountChanged(input) => {
                self.edit = std::mem::take(&mut self.edit).with_amount_input(input);
            }
            DashboardAction::EditCancelled => self.edit = EditDialog::Closed,
            DashboardAction::EditSaved { payment_id } => {
                self.edit = std::mem::take(&mut self.edit).saved(payment_id);
            }
        }
    }
}

impl Reducible for DashboardState {
    type Action = DashboardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::payment;

    fn reduce_all(actions: Vec<DashboardAction>) -> Rc<DashboardState> {
        actions
            .into_iter()
            .fold(Rc::new(DashboardState::default()), |state, action| state.reduce(action))
    }

    #[test]
    fn test_initial_state_hides_history() {
        let state = DashboardState::default();
        assert!(state.table.is_none());
        assert_eq!(state.edit, EditDialog::Closed);
        assert_eq!(state.current_student(), None);
    }

    #[test]
    fn test_load_projects_table() {
        let state = reduce_all(vec![
            DashboardAction::StudentIdChanged("42".to_string()),
            DashboardAction::LoadStarted,
            DashboardAction::Loaded {
                student_id: "42".to_string(),
                payments: vec![payment(1, 100.0), payment(2, 200.0)],
            },
        ]);

        assert!(!state.loading);
        assert_eq!(state.current_student(), Some("42"));
        assert_eq!(state.table.as_ref().unwrap().rows().len(), 2);
    }

    #[test]
    fn test_failed_load_keeps_previous_table() {
        let state = reduce_all(vec![
            DashboardAction::Loaded { student_id: "42".to_string(), payments: vec![payment(1, 1.0)] },
            DashboardAction::StudentIdChanged("43".to_string()),
            DashboardAction::LoadStarted,
            DashboardAction::LoadFailed,
        ]);

        assert!(!state.loading);
        assert_eq!(state.current_student(), Some("42"));
        assert_eq!(state.student_id_input, "43");
        assert_eq!(state.table.as_ref().unwrap().rows()[0].id, 1);
    }

    #[test]
    fn test_edit_dialog_lifecycle() {
        let opened = reduce_all(vec![
            DashboardAction::EditOpened { payment_id: 7, amount: 20000.0 },
            DashboardAction::EditAmountChanged("18000".to_string()),
        ]);
        let draft = opened.edit.draft().unwrap();
        assert_eq!(draft.payment_id, 7);
        assert_eq!(draft.amount_input, "18000");

        let cancelled = opened.clone().reduce(DashboardAction::EditCancelled);
        assert_eq!(cancelled.edit, EditDialog::Closed);

        let saved = opened.reduce(DashboardAction::EditSaved { payment_id: 7 });
        assert_eq!(saved.edit, EditDialog::Closed);
    }

    #[test]
    fn test_late_save_keeps_other_draft_open() {
        let state = reduce_all(vec![
            DashboardAction::EditOpened { payment_id: 7, amount: 20000.0 },
            DashboardAction::EditAmountChanged("25000".to_string()),
            DashboardAction::EditCancelled,
            DashboardAction::EditOpened { payment_id: 9, amount: 700.0 },
            DashboardAction::EditAmountChanged("650".to_string()),
            DashboardAction::EditSaved { payment_id: 7 },
        ]);

        let draft = state.edit.draft().unwrap();
        assert_eq!(draft.payment_id, 9);
        assert_eq!(draft.amount_input, "650");
    }

    #[test]
    fn test_latest_response_wins() {
        let state = reduce_all(vec![
            DashboardAction::Loaded { student_id: "1".to_string(), payments: vec![payment(1, 1.0)] },
            DashboardAction::Loaded { student_id: "2".to_string(), payments: vec![] },
        ]);

        assert_eq!(state.current_student(), Some("2"));
        assert_eq!(state.table, Some(PaymentTable::Empty));
    }
}
