use shared::PaymentId;

use crate::services::error::ClientError;

/// Client-only edit state for one payment, alive while the dialog is open
#[derive(Debug, Clone, PartialEq)]
pub struct EditDraft {
    pub payment_id: PaymentId,
    /// Current text of the amount field
    pub amount_input: String,
}

impl EditDraft {
    pub fn new(payment_id: PaymentId, amount: f64) -> Self {
        Self {
            payment_id,
            amount_input: amount.to_string(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.amount_input.trim().is_empty()
    }

    /// The amount to submit; must parse as a positive decimal
    pub fn amount(&self) -> Result<f64, ClientError> {
        match self.amount_input.trim().parse::<f64>() {
            Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
            _ => Err(ClientError::Validation(
                "Amount must be a positive number".to_string(),
            )),
        }
    }
}

/// The edit modal: closed, or open over a draft
#[derive(Debug, Clone, Default, PartialEq)]
pub enum EditDialog {
    #[default]
    Closed,
    Open(EditDraft),
}

impl EditDialog {
    pub fn open(payment_id: PaymentId, amount: f64) -> Self {
        EditDialog::Open(EditDraft::new(payment_id, amount))
    }

    pub fn draft(&self) -> Option<&EditDraft> {
        match self {
            EditDialog::Open(draft) => Some(draft),
            EditDialog::Closed => None,
        }
    }

    /// Close once `payment_id` has been saved. A draft for another payment
    /// stays open.
    pub fn saved(self, payment_id: PaymentId) -> Self {
        match self {
            EditDialog::Open(draft) if draft.payment_id == payment_id => EditDialog::Closed,
            other => other,
        }
    }

    /// Replace the amount field text. No effect on a closed dialog.
    pub fn with_amount_input(self, amount_input: String) -> Self {
        match self {
            EditDialog::Open(draft) => EditDialog::Open(EditDraft { amount_input, ..draft }),
            EditDialog::Closed => EditDialog::Closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_captures_id_and_amount() {
        let dialog = EditDialog::open(7, 20000.0);
        let draft = dialog.draft().unwrap();

        assert_eq!(draft.payment_id, 7);
        assert_eq!(draft.amount_input, "20000");
        assert_eq!(draft.amount(), Ok(20000.0));
    }

    #[test]
    fn test_fractional_amount_prefills_field() {
        let dialog = EditDialog::open(3, 150.5);
        assert_eq!(dialog.draft().unwrap().amount_input, "150.5");
    }

    #[test]
    fn test_editing_keeps_payment_id() {
        let dialog = EditDialog::open(7, 20000.0).with_amount_input("25000".to_string());
        let draft = dialog.draft().unwrap();

        assert_eq!(draft.payment_id, 7);
        assert_eq!(draft.amount(), Ok(25000.0));
    }

    #[test]
    fn test_editing_closed_dialog_is_ignored() {
        let dialog = EditDialog::Closed.with_amount_input("5".to_string());
        assert_eq!(dialog, EditDialog::Closed);
        assert!(dialog.draft().is_none());
    }

    #[test]
    fn test_saved_closes_only_its_own_draft() {
        assert_eq!(EditDialog::open(7, 1.0).saved(7), EditDialog::Closed);
        assert_eq!(EditDialog::open(9, 1.0).saved(7), EditDialog::open(9, 1.0));
        assert_eq!(EditDialog::Closed.saved(7), EditDialog::Closed);
    }

    #[test]
    fn test_amount_must_be_positive_number() {
        for input in ["abc", "0", "-5", "NaN", "inf"] {
            let draft = EditDraft { payment_id: 1, amount_input: input.to_string() };
            assert!(
                matches!(draft.amount(), Err(ClientError::Validation(_))),
                "{} should be rejected",
                input
            );
        }
        let draft = EditDraft { payment_id: 1, amount_input: " 12.75 ".to_string() };
        assert_eq!(draft.amount(), Ok(12.75));
    }

    #[test]
    fn test_blank_detection() {
        assert!(EditDraft { payment_id: 1, amount_input: "   ".to_string() }.is_blank());
        assert!(!EditDialog::open(1, 1.0).draft().unwrap().is_blank());
    }
}
