use shared::{Payment, PaymentId};

use crate::services::date_utils::format_created_at;

/// The single informational row shown for a student without payments
pub const EMPTY_NOTICE: &str = "No payments found. Please pay.";

/// Shown in the status column when the backend sent none
pub const MISSING_STATUS: &str = "-";

/// One table row, already formatted for display
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRow {
    pub id: PaymentId,
    /// Raw amount, handed to the edit control
    pub amount: f64,
    pub amount_label: String,
    pub created_on: String,
    pub category: String,
    pub status: String,
    /// Description and billing period, used as the row tooltip
    pub details: Option<String>,
}

impl PaymentRow {
    fn project(payment: &Payment) -> Self {
        let details = match (payment.description.as_deref(), payment.period()) {
            (Some(description), Some(period)) => Some(format!("{} ({})", description, period)),
            (Some(description), None) => Some(description.to_string()),
            (None, Some(period)) => Some(period),
            (None, None) => None,
        };

        Self {
            id: payment.id,
            amount: payment.amount,
            amount_label: payment.amount.to_string(),
            created_on: format_created_at(&payment.created_at),
            category: payment.category.label().to_string(),
            status: payment
                .status
                .clone()
                .filter(|status| !status.is_empty())
                .unwrap_or_else(|| MISSING_STATUS.to_string()),
            details,
        }
    }
}

/// View model for the payments table. Which controls appear depends only on
/// whether the list is empty: payment status never affects them.
#[derive(Debug, Clone, PartialEq)]
pub enum PaymentTable {
    /// One informational row and the pay action
    Empty,
    /// One row per payment, each with edit and delete controls
    Rows {
        caption: Option<String>,
        rows: Vec<PaymentRow>,
    },
}

impl PaymentTable {
    pub fn project(payments: &[Payment]) -> Self {
        if payments.is_empty() {
            return PaymentTable::Empty;
        }

        let caption = payments
            .first()
            .and_then(|payment| payment.student_name.clone())
            .filter(|name| !name.is_empty());

        PaymentTable::Rows {
            caption,
            rows: payments.iter().map(PaymentRow::project).collect(),
        }
    }

    pub fn rows(&self) -> &[PaymentRow] {
        match self {
            PaymentTable::Empty => &[],
            PaymentTable::Rows { rows, .. } => rows,
        }
    }

    pub fn caption(&self) -> Option<&str> {
        match self {
            PaymentTable::Empty => None,
            PaymentTable::Rows { caption, .. } => caption.as_deref(),
        }
    }

    pub fn shows_pay_action(&self) -> bool {
        matches!(self, PaymentTable::Empty)
    }

    /// Rows the table body renders, the informational row included
    #[cfg(test)]
    pub fn rendered_rows(&self) -> usize {
        match self {
            PaymentTable::Empty => 1,
            PaymentTable::Rows { rows, .. } => rows.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::payment;
    use shared::PaymentCategory;

    #[test]
    fn test_empty_list_shows_notice_and_pay_action() {
        let table = PaymentTable::project(&[]);

        assert_eq!(table, PaymentTable::Empty);
        assert_eq!(table.rendered_rows(), 1);
        assert_eq!(table.rows().len(), 0);
        assert!(table.shows_pay_action());
        assert!(table.caption().is_none());
    }

    #[test]
    fn test_rows_carry_controls_and_hide_pay_action() {
        for n in 1..=5 {
            let payments: Vec<Payment> = (1..=n).map(|id| payment(id, 1000.0 * id as f64)).collect();
            let table = PaymentTable::project(&payments);

            assert_eq!(table.rendered_rows(), n as usize);
            assert_eq!(table.rows().len(), n as usize);
            assert!(!table.shows_pay_action());
        }
    }

    #[test]
    fn test_row_keeps_backend_order() {
        let payments = vec![payment(9, 1.0), payment(2, 2.0), payment(5, 3.0)];
        let ids: Vec<PaymentId> = PaymentTable::project(&payments).rows().iter().map(|row| row.id).collect();
        assert_eq!(ids, vec![9, 2, 5]);
    }

    #[test]
    fn test_row_formatting() {
        let mut record = payment(7, 20000.0);
        record.category = PaymentCategory::Cash;
        record.status = Some("PARTIAL".to_string());

        let table = PaymentTable::project(&[record]);
        let row = &table.rows()[0];

        assert_eq!(row.id, 7);
        assert_eq!(row.amount, 20000.0);
        assert_eq!(row.amount_label, "20000");
        assert_eq!(row.created_on, "3/5/2024");
        assert_eq!(row.category, "Cash");
        assert_eq!(row.status, "PARTIAL");
    }

    #[test]
    fn test_missing_status_uses_dash() {
        let mut blank = payment(2, 5.0);
        blank.status = Some(String::new());
        let table = PaymentTable::project(&[payment(1, 5.0), blank]);

        assert!(table.rows().iter().all(|row| row.status == "-"));
    }

    #[test]
    fn test_status_does_not_change_controls() {
        let statuses = [Some("COMPLETED"), Some("PARTIAL"), Some("PENDING"), None];
        let payments: Vec<Payment> = statuses
            .iter()
            .enumerate()
            .map(|(i, status)| {
                let mut record = payment(i as PaymentId + 1, 100.0);
                record.status = status.map(str::to_string);
                record
            })
            .collect();

        let table = PaymentTable::project(&payments);
        assert_eq!(table.rows().len(), statuses.len());
        assert!(!table.shows_pay_action());
    }

    #[test]
    fn test_caption_and_details_from_optional_fields() {
        let mut record = payment(1, 300.0);
        record.student_name = Some("Aziza Karimova".to_string());
        record.description = Some("March fee".to_string());
        record.payment_year = Some(2024);
        record.payment_month = Some(3);

        let table = PaymentTable::project(&[record, payment(2, 10.0)]);

        assert_eq!(table.caption(), Some("Aziza Karimova"));
        assert_eq!(table.rows()[0].details.as_deref(), Some("March fee (2024-03)"));
        assert_eq!(table.rows()[1].details, None);
    }
}
