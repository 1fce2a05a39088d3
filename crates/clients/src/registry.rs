use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};

use aflow_core::{ClientId, DomainError, DomainResult, Entity, Rut};

use crate::{Client, NewClient};

/// In-memory client registry, one record per RUT.
#[derive(Debug, Default)]
pub struct ClientRegistry {
    inner: RwLock<Vec<Client>>,
}

impl ClientRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a client. Fails on invalid input or an already-registered RUT.
    pub fn register(&self, input: NewClient, now: DateTime<Utc>) -> DomainResult<Client> {
        let client = Client::create(input, now)?;

        let mut clients = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if clients.iter().any(|c| c.rut == client.rut) {
            return Err(DomainError::conflict(format!(
                "client with RUT {} already registered",
                client.rut
            )));
        }
        clients.push(client.clone());
        Ok(client)
    }

    /// All clients in registration order.
    pub fn list(&self) -> Vec<Client> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn get(&self, id: &ClientId) -> Option<Client> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|c| c.id() == id)
            .cloned()
    }

    /// Lookup by RUT in any formatting; invalid RUTs never match.
    pub fn find_by_rut(&self, raw: &str) -> Option<Client> {
        let rut = Rut::parse(raw).ok()?;
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|c| c.rut == rut)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
