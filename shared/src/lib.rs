use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned payment identifier
pub type PaymentId = i64;

/// A single payment record as returned by `GET /api/payments/student/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: PaymentId,
    /// Decimal amount; the backend may encode it as a number or a string
    #[serde(deserialize_with = "decimal::deserialize")]
    pub amount: f64,
    /// Creation timestamp as sent by the backend (ISO 8601, zone optional)
    pub created_at: String,
    pub category: PaymentCategory,
    pub status: Option<String>,
    pub description: Option<String>,
    pub student_name: Option<String>,
    pub group_name: Option<String>,
    pub payment_year: Option<i32>,
    pub payment_month: Option<u32>,
}

/// How the payment was made
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentCategory {
    #[serde(alias = "card", alias = "Card")]
    Card,
    #[serde(alias = "cash", alias = "Cash")]
    Cash,
}

impl PaymentCategory {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentCategory::Card => "Card",
            PaymentCategory::Cash => "Cash",
        }
    }
}

impl fmt::Display for PaymentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Payment {
    /// Billing period as "YYYY-MM" when the backend supplies both parts
    pub fn period(&self) -> Option<String> {
        match (self.payment_year, self.payment_month) {
            (Some(year), Some(month)) if (1..=12).contains(&month) => {
                Some(format!("{:04}-{:02}", year, month))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub username: Option<String>,
}

/// Partial update body for `PUT /api/payments/{id}`; only the amount changes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdatePaymentRequest {
    pub amount: f64,
}

mod decimal {
    use serde::{de, Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawAmount::deserialize(deserializer)? {
            RawAmount::Number(value) => Ok(value),
            RawAmount::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| de::Error::custom(format!("invalid decimal amount: {}", text))),
        }
    }
}
