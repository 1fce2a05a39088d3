//! Process-wide state shared by handlers.

use std::sync::Arc;

use aflow_auth::{Authenticator, InMemorySessionStore, UserDirectory};
use aflow_clients::ClientRegistry;

use crate::config::ApiConfig;

pub struct AppServices {
    pub authenticator: Authenticator,
    pub clients: ClientRegistry,
}

/// In-memory wiring: demo user directory, session store and client registry.
pub fn build_services(config: &ApiConfig) -> AppServices {
    let sessions = Arc::new(InMemorySessionStore::new());
    let authenticator = Authenticator::new(UserDirectory::demo(), sessions, config.session_ttl);

    AppServices {
        authenticator,
        clients: ClientRegistry::new(),
    }
}
