//! User-triggered sequences on the dashboard. Each runs one request at a
//! time, reports failures through the notifier, and hands state changes to
//! `dispatch`. Mutations are followed by a full re-fetch.

use shared::PaymentId;

use super::dashboard::DashboardAction;
use super::edit_dialog::EditDialog;
use crate::services::api::PaymentGateway;
use crate::services::dialogs::{Confirmer, Notifier};

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this payment?";

pub const PAY_NOT_IMPLEMENTED: &str =
    "Pay functionality not implemented in this demo (focus is on Edit/Delete logic)";

/// Creating a payment. Not designed yet; the pay action goes through here.
pub trait PayFlow {
    fn start(&self, student_id: Option<&str>);
}

/// Tells the user that paying is not available
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderPayFlow<N> {
    notifier: N,
}

impl<N: Notifier> PlaceholderPayFlow<N> {
    pub fn new(notifier: N) -> Self {
        Self { notifier }
    }
}

impl<N: Notifier> PayFlow for PlaceholderPayFlow<N> {
    fn start(&self, student_id: Option<&str>) {
        log::debug!(target: "payments", "Pay requested for {:?}", student_id);
        self.notifier.notify(PAY_NOT_IMPLEMENTED);
    }
}

/// Fetch and show the payments of `student_id`. A blank id is ignored.
pub async fn load_payments<G, N, D>(gateway: &G, notifier: &N, student_id: &str, dispatch: &D)
where
    G: PaymentGateway + ?Sized,
    N: Notifier + ?Sized,
    D: Fn(DashboardAction),
{
    let student_id = student_id.trim();
    if student_id.is_empty() {
        return;
    }

    dispatch(DashboardAction::LoadStarted);
    match gateway.fetch_payments(student_id).await {
        Ok(payments) => {
            log::info!(target: "payments", "Loaded {} payments for student {}", payments.len(), student_id);
            dispatch(DashboardAction::Loaded {
                student_id: student_id.to_string(),
                payments,
            });
        }
        Err(e) => {
            let detail = e.cause().map_or_else(|| e.to_string(), ToString::to_string);
            log::error!(target: "payments", "Failed to fetch payments for student {}: {}", student_id, detail);
            dispatch(DashboardAction::LoadFailed);
            notifier.notify(&e.to_string());
        }
    }
}

/// Submit the open edit dialog. On success the dialog closes and the list of
/// `student_id` is re-fetched; on failure the dialog stays as it is.
pub async fn submit_edit<G, N, D>(
    gateway: &G,
    notifier: &N,
    dialog: &EditDialog,
    student_id: Option<&str>,
    dispatch: &D,
) where
    G: PaymentGateway + ?Sized,
    N: Notifier + ?Sized,
    D: Fn(DashboardAction),
{
    let Some(draft) = dialog.draft() else {
        return;
    };
    if draft.is_blank() {
        return;
    }

    let amount = match draft.amount() {
        Ok(amount) => amount,
        Err(e) => {
            notifier.notify(&e.to_string());
            return;
        }
    };

    match gateway.update_payment(draft.payment_id, amount).await {
        Ok(()) => {
            log::info!(target: "payments", "Updated payment {} to {}", draft.payment_id, amount);
            dispatch(DashboardAction::EditSaved {
                payment_id: draft.payment_id,
            });
            if let Some(student_id) = student_id {
                load_payments(gateway, notifier, student_id, dispatch).await;
            }
        }
        Err(e) => {
            log::debug!(target: "payments", "Update of payment {} rejected: {:?}", draft.payment_id, e.cause());
            notifier.notify(&e.to_string());
        }
    }
}

/// Delete a payment once the user confirms, then re-fetch. Nothing is sent
/// without confirmation.
pub async fn delete_payment<G, C, N, D>(
    gateway: &G,
    confirmer: &C,
    notifier: &N,
    payment_id: PaymentId,
    student_id: Option<&str>,
    dispatch: &D,
) where
    G: PaymentGateway + ?Sized,
    C: Confirmer + ?Sized,
    N: Notifier + ?Sized,
    D: Fn(DashboardAction),
{
    if !confirmer.confirm(DELETE_PROMPT) {
        log::debug!(target: "payments", "Delete of payment {} cancelled", payment_id);
        return;
    }

    match gateway.delete_payment(payment_id).await {
        Ok(()) => {
            log::info!(target: "payments", "Deleted payment {}", payment_id);
            if let Some(student_id) = student_id {
                load_payments(gateway, notifier, student_id, dispatch).await;
            }
        }
        Err(e) => {
            log::debug!(target: "payments", "Delete of payment {} rejected: {:?}", payment_id, e.cause());
            notifier.notify(&e.to_string());
        }
    }
}
