//! In-memory stand-ins for the backend, local storage and browser dialogs

use std::cell::RefCell;

use async_trait::async_trait;
use shared::{LoginRequest, LoginResponse, Payment, PaymentCategory, PaymentId};

use crate::services::api::{Authenticator, PaymentGateway};
use crate::services::dialogs::{Confirmer, Notifier};
use crate::services::error::{Cause, ClientError};
use crate::services::storage::TokenStore;

/// Card payment created 2024-03-05 with no status
pub fn payment(id: PaymentId, amount: f64) -> Payment {
    Payment {
        id,
        amount,
        created_at: "2024-03-05T10:15:30".to_string(),
        category: PaymentCategory::Card,
        status: None,
        description: None,
        student_name: None,
        group_name: None,
        payment_year: None,
        payment_month: None,
    }
}

#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: RefCell::new(Some(token.to_string())),
        }
    }

    pub fn stored(&self) -> Option<String> {
        self.token.borrow().clone()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.stored()
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.borrow_mut() = None;
    }
}

pub struct MockAuthenticator {
    result: Result<LoginResponse, ClientError>,
    calls: RefCell<Vec<LoginRequest>>,
}

impl MockAuthenticator {
    pub fn accepting(token: &str, username: Option<&str>) -> Self {
        Self::answering(Ok(LoginResponse {
            access_token: token.to_string(),
            username: username.map(str::to_string),
        }))
    }

    pub fn rejecting(status: u16) -> Self {
        Self::answering(Err(ClientError::Authentication(Cause::Status(status))))
    }

    pub fn unreachable() -> Self {
        Self::answering(Err(ClientError::Authentication(Cause::Transport(
            "Failed to fetch".to_string(),
        ))))
    }

    fn answering(result: Result<LoginResponse, ClientError>) -> Self {
        Self {
            result,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<LoginRequest> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Authenticator for MockAuthenticator {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError> {
        self.calls.borrow_mut().push(request.clone());
        self.result.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GatewayCall {
    Fetch(String),
    Update(PaymentId, f64),
    Delete(PaymentId),
}

/// Backend double: applies successful mutations to its own list so a
/// re-fetch observes them
pub struct MockGateway {
    payments: RefCell<Vec<Payment>>,
    fetch_error: Option<ClientError>,
    update_error: Option<ClientError>,
    delete_error: Option<ClientError>,
    calls: RefCell<Vec<GatewayCall>>,
}

impl MockGateway {
    pub fn with_payments(payments: Vec<Payment>) -> Self {
        Self {
            payments: RefCell::new(payments),
            fetch_error: None,
            update_error: None,
            delete_error: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn failing_fetch(mut self, error: ClientError) -> Self {
        self.fetch_error = Some(error);
        self
    }

    pub fn failing_update(mut self, error: ClientError) -> Self {
        self.update_error = Some(error);
        self
    }

    pub fn failing_delete(mut self, error: ClientError) -> Self {
        self.delete_error = Some(error);
        self
    }

    pub fn snapshot(&self) -> Vec<Payment> {
        self.payments.borrow().clone()
    }

    pub fn calls(&self) -> Vec<GatewayCall> {
        self.calls.borrow().clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, GatewayCall::Fetch(_)))
            .count()
    }
}

#[async_trait(?Send)]
impl PaymentGateway for MockGateway {
    async fn fetch_payments(&self, student_id: &str) -> Result<Vec<Payment>, ClientError> {
        self.calls.borrow_mut().push(GatewayCall::Fetch(student_id.to_string()));
        match &self.fetch_error {
            Some(error) => Err(error.clone()),
            None => Ok(self.snapshot()),
        }
    }

    async fn update_payment(&self, id: PaymentId, amount: f64) -> Result<(), ClientError> {
        self.calls.borrow_mut().push(GatewayCall::Update(id, amount));
        if let Some(error) = &self.update_error {
            return Err(error.clone());
        }
        for payment in self.payments.borrow_mut().iter_mut().filter(|p| p.id == id) {
            payment.amount = amount;
        }
        Ok(())
    }

    async fn delete_payment(&self, id: PaymentId) -> Result<(), ClientError> {
        self.calls.borrow_mut().push(GatewayCall::Delete(id));
        if let Some(error) = &self.delete_error {
            return Err(error.clone());
        }
        self.payments.borrow_mut().retain(|p| p.id != id);
        Ok(())
    }
}

/// Answers every confirmation with a fixed choice and records what was shown
pub struct RecordingDialogs {
    answer: bool,
    notices: RefCell<Vec<String>>,
    prompts: RefCell<Vec<String>>,
}

impl RecordingDialogs {
    pub fn confirming(answer: bool) -> Self {
        Self {
            answer,
            notices: RefCell::new(Vec::new()),
            prompts: RefCell::new(Vec::new()),
        }
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.borrow().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl Notifier for RecordingDialogs {
    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }
}

impl Confirmer for RecordingDialogs {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_string());
        self.answer
    }
}
