use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use aflow_core::{ClientId, DomainError, DomainResult, Entity, Rut};

/// Registration input, as typed into the client form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewClient {
    /// RUT in any formatting (`"12345678-5"`, `"12.345.678-5"`, ...).
    pub rut: String,
    pub business_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Client {
    pub id: ClientId,
    pub rut: Rut,
    pub business_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Client {
    type Id = ClientId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl Client {
    /// Validate input and build a new client record.
    pub fn create(input: NewClient, now: DateTime<Utc>) -> DomainResult<Self> {
        let rut = Rut::parse(&input.rut)?;

        let business_name = input.business_name.trim().to_string();
        if business_name.is_empty() {
            return Err(DomainError::validation("business name cannot be empty"));
        }

        let email = non_blank(input.email).map(|e| e.to_lowercase());
        if let Some(email) = &email {
            if !email.contains('@') {
                return Err(DomainError::validation("invalid email format"));
            }
        }

        Ok(Self {
            id: ClientId::new(),
            rut,
            business_name,
            email,
            phone: non_blank(input.phone),
            created_at: now,
        })
    }
}
