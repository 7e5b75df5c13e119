use async_trait::async_trait;
use gloo::net::http::{Request, RequestBuilder, Response};
use shared::{LoginRequest, LoginResponse, Payment, PaymentId, UpdatePaymentRequest};

use super::config::ClientConfig;
use super::error::{Cause, ClientError, Mutation};
use crate::state::session::Session;

/// Exchanges credentials for a bearer token
#[async_trait(?Send)]
pub trait Authenticator {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError>;
}

/// Authenticated access to a student's payments. Implementations never cache:
/// callers re-fetch to observe the effect of a mutation.
#[async_trait(?Send)]
pub trait PaymentGateway {
    async fn fetch_payments(&self, student_id: &str) -> Result<Vec<Payment>, ClientError>;
    async fn update_payment(&self, id: PaymentId, amount: f64) -> Result<(), ClientError>;
    async fn delete_payment(&self, id: PaymentId) -> Result<(), ClientError>;
}

/// API client for communicating with the payments backend
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a client that talks to the page's own origin
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::with_base_url(config.api_base_url.clone())
    }

    /// Gateway carrying the session's token, or `None` while logged out
    pub fn authorized(&self, session: &Session) -> Option<AuthorizedClient> {
        session.token().map(|token| AuthorizedClient {
            base_url: self.base_url.clone(),
            token: token.to_string(),
        })
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl Authenticator for ApiClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ClientError> {
        let url = format!("{}/api/auth/login", self.base_url);
        log::debug!(target: "api", "POST {}", url);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| ClientError::Authentication(Cause::Malformed(e.to_string())))?
            .send()
            .await
            .map_err(|e| ClientError::Authentication(Cause::Transport(e.to_string())))?;

        if !response.ok() {
            return Err(ClientError::Authentication(Cause::Status(response.status())));
        }

        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| ClientError::Authentication(Cause::Malformed(e.to_string())))
    }
}

/// API client bound to a bearer token
#[derive(Clone, PartialEq)]
pub struct AuthorizedClient {
    base_url: String,
    token: String,
}

impl AuthorizedClient {
    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("Authorization", &format!("Bearer {}", self.token))
            .header("Content-Type", "application/json")
    }

    fn payment_url(&self, id: PaymentId) -> String {
        format!("{}/api/payments/{}", self.base_url, id)
    }

    fn fetch_request(&self, student_id: &str) -> Result<Request, gloo::net::Error> {
        let student_id = String::from(js_sys::encode_uri_component(student_id));
        let url = format!("{}/api/payments/student/{}", self.base_url, student_id);
        log::debug!(target: "api", "GET {}", url);
        self.authorize(Request::get(&url)).build()
    }

    fn update_request(&self, id: PaymentId, amount: f64) -> Result<Request, gloo::net::Error> {
        let url = self.payment_url(id);
        log::debug!(target: "api", "PUT {}", url);
        self.authorize(Request::put(&url))
            .json(&UpdatePaymentRequest { amount })
    }

    fn delete_request(&self, id: PaymentId) -> Result<Request, gloo::net::Error> {
        let url = self.payment_url(id);
        log::debug!(target: "api", "DELETE {}", url);
        self.authorize(Request::delete(&url)).build()
    }

    async fn send_mutation(
        &self,
        operation: Mutation,
        request: Result<Request, gloo::net::Error>,
    ) -> Result<(), ClientError> {
        let request = request.map_err(|e| ClientError::Mutation {
            operation,
            cause: Cause::Malformed(e.to_string()),
        })?;
        let response = request.send().await.map_err(|e| ClientError::Mutation {
            operation,
            cause: Cause::Transport(e.to_string()),
        })?;
        ensure_success(&response).map_err(|cause| ClientError::Mutation { operation, cause })
    }
}

fn ensure_success(response: &Response) -> Result<(), Cause> {
    if response.ok() {
        Ok(())
    } else {
        Err(Cause::Status(response.status()))
    }
}

#[async_trait(?Send)]
impl PaymentGateway for AuthorizedClient {
    async fn fetch_payments(&self, student_id: &str) -> Result<Vec<Payment>, ClientError> {
        let response = self
            .fetch_request(student_id)
            .map_err(|e| ClientError::Fetch(Cause::Malformed(e.to_string())))?
            .send()
            .await
            .map_err(|e| ClientError::Fetch(Cause::Transport(e.to_string())))?;
        ensure_success(&response).map_err(ClientError::Fetch)?;

        response
            .json::<Vec<Payment>>()
            .await
            .map_err(|e| ClientError::Fetch(Cause::Malformed(e.to_string())))
    }

    async fn update_payment(&self, id: PaymentId, amount: f64) -> Result<(), ClientError> {
        self.send_mutation(Mutation::Update, self.update_request(id, amount))
            .await
    }

    async fn delete_payment(&self, id: PaymentId) -> Result<(), ClientError> {
        self.send_mutation(Mutation::Delete, self.delete_request(id))
            .await
    }
}
