use crate::client::AppContextSwitchClient;
use crate::constants::scheme::AUTHORITY_SEPARATOR;
use crate::context::OpenUrlContext;
use crate::options::{DuplicateRegistration, SwitcherOptions};
use crate::result::Dispatch;
use crate::url::ReturnUrl;
use crate::util::equals_ignore_ascii_case;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace};

/// Routes return URLs to the first registered client that claims them.
///
/// Clients are consulted in registration order. The host application owns the
/// switcher and hands it the URLs its platform delivers after an app switch.
pub struct AppContextSwitcher {
    options: SwitcherOptions,
    clients: Vec<Arc<dyn AppContextSwitchClient>>,
}

impl AppContextSwitcher {
    pub fn new(options: SwitcherOptions) -> Self {
        Self {
            options,
            clients: Vec::new(),
        }
    }

    pub fn return_url_scheme(&self) -> &str {
        &self.options.return_url_scheme
    }

    pub fn set_return_url_scheme<S: Into<String>>(&mut self, scheme: S) {
        self.options.return_url_scheme = scheme.into();
    }

    /// Adds `client` to the end of the registry.
    ///
    /// Returns `false` only when duplicates are ignored and the same client
    /// allocation is already registered.
    pub fn register(&mut self, client: Arc<dyn AppContextSwitchClient>) -> bool {
        if self.options.duplicate_registration == DuplicateRegistration::Ignore
            && self
                .clients
                .iter()
                .any(|registered| Arc::ptr_eq(registered, &client))
        {
            debug!(client = client.name(), "client already registered; skipping");
            return false;
        }

        debug!(
            client = client.name(),
            index = self.clients.len(),
            "registered app context switch client"
        );
        self.clients.push(client);
        true
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }

    pub fn clear(&mut self) {
        self.clients.clear();
    }

    pub fn dispatch(&self, url: &ReturnUrl) -> Dispatch {
        for (index, client) in self.clients.iter().enumerate() {
            let claimed = client.can_handle_return_url(url);
            trace!(client = client.name(), index, claimed, %url, "consulted client");
            if claimed {
                client.handle_return_url(url);
                debug!(client = client.name(), index, %url, "return URL handled");
                return Dispatch::Handled { index };
            }
        }

        debug!(clients = self.clients.len(), %url, "no client claimed return URL");
        Dispatch::Unhandled
    }

    pub fn handle_open(&self, url: &ReturnUrl) -> bool {
        self.dispatch(url).is_handled()
    }

    pub fn handle_open_url(&self, context: &OpenUrlContext<'_>) -> bool {
        trace!(
            source_application = context.source_application,
            open_in_place = context.open_in_place,
            "unwrapping open URL context"
        );
        self.handle_open(context.url())
    }

    /// Builds `{scheme}://{path}` from the configured return URL scheme.
    pub fn return_url(&self, path: &str) -> Option<ReturnUrl> {
        let scheme = self.return_url_scheme();
        if scheme.is_empty() {
            return None;
        }

        Some(ReturnUrl::new(format!(
            "{scheme}{AUTHORITY_SEPARATOR}{path}"
        )))
    }

    pub fn is_return_url(&self, url: &ReturnUrl) -> bool {
        let expected = self.return_url_scheme();
        !expected.is_empty()
            && url
                .scheme()
                .is_some_and(|scheme| equals_ignore_ascii_case(expected, scheme))
    }
}

impl Default for AppContextSwitcher {
    fn default() -> Self {
        Self::new(SwitcherOptions::default())
    }
}

impl fmt::Debug for AppContextSwitcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.clients.iter().map(|client| client.name()).collect();
        f.debug_struct("AppContextSwitcher")
            .field("options", &self.options)
            .field("clients", &names)
            .finish()
    }
}

#[cfg(test)]
#[path = "switcher_test.rs"]
mod switcher_test;
