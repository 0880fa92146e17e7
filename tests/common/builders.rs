#![allow(dead_code)]

use super::recording::RecordingClient;
use app_context_switch::{AppContextSwitcher, DuplicateRegistration, SwitcherOptions};
use std::sync::Arc;

#[derive(Default)]
pub struct SwitcherBuilder {
    return_url_scheme: Option<String>,
    duplicate_registration: Option<DuplicateRegistration>,
    clients: Vec<Arc<RecordingClient>>,
}

impl SwitcherBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn return_url_scheme(mut self, scheme: &str) -> Self {
        self.return_url_scheme = Some(scheme.to_owned());
        self
    }

    pub fn duplicate_registration(mut self, policy: DuplicateRegistration) -> Self {
        self.duplicate_registration = Some(policy);
        self
    }

    pub fn client(mut self, client: &Arc<RecordingClient>) -> Self {
        self.clients.push(Arc::clone(client));
        self
    }

    pub fn build(self) -> AppContextSwitcher {
        let SwitcherOptions {
            return_url_scheme: default_scheme,
            duplicate_registration: default_duplicates,
        } = SwitcherOptions::default();

        let mut switcher = AppContextSwitcher::new(SwitcherOptions {
            return_url_scheme: self.return_url_scheme.unwrap_or(default_scheme),
            duplicate_registration: self.duplicate_registration.unwrap_or(default_duplicates),
        });
        for client in self.clients {
            switcher.register(client);
        }
        switcher
    }
}

pub fn switcher() -> SwitcherBuilder {
    SwitcherBuilder::new()
}

pub fn recording(name: &str, can_handle: bool) -> Arc<RecordingClient> {
    Arc::new(RecordingClient::new(name, can_handle))
}
