//! Client-action registry
//!
//! Maps symbolic action keys to constructors so the host can instantiate a
//! view by name. Registration is explicit; nothing registers itself on load.

use crate::actions::ActionService;
use crate::dashboard::SmsDashboard;
use crate::rpc::RpcClient;
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

/// Host capabilities handed to every client action.
#[derive(Clone)]
pub struct Services {
    pub rpc: Arc<dyn RpcClient>,
    pub actions: Arc<dyn ActionService>,
}

pub type ClientActionFactory = fn(&Services) -> SmsDashboard;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Client action '{0}' is already registered")]
    Duplicate(String),

    #[error("No client action registered under '{0}'")]
    Unknown(String),
}

#[derive(Default)]
pub struct ActionRegistry {
    entries: BTreeMap<&'static str, ClientActionFactory>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        key: &'static str,
        factory: ClientActionFactory,
    ) -> Result<(), RegistryError> {
        if self.entries.contains_key(key) {
            return Err(RegistryError::Duplicate(key.to_string()));
        }
        self.entries.insert(key, factory);
        Ok(())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    /// Builds the client action registered under `key`.
    pub fn instantiate(&self, key: &str, services: &Services) -> Result<SmsDashboard, RegistryError> {
        let factory = self
            .entries
            .get(key)
            .ok_or_else(|| RegistryError::Unknown(key.to_string()))?;
        Ok(factory(services))
    }
}
