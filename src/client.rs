use crate::constants::client::ANONYMOUS;
use crate::matcher::ReturnUrlMatcher;
use crate::url::ReturnUrl;
use std::fmt;
use std::sync::Arc;

pub type CanHandleFn = dyn Fn(&ReturnUrl) -> bool + Send + Sync;
pub type HandleFn = dyn Fn(&ReturnUrl) + Send + Sync;

/// A participant in app-switch flows that can claim inbound return URLs.
///
/// [`AppContextSwitcher`](crate::AppContextSwitcher) consults
/// `can_handle_return_url` first and only calls `handle_return_url` on the
/// first client that answered `true`.
pub trait AppContextSwitchClient: Send + Sync {
    fn can_handle_return_url(&self, url: &ReturnUrl) -> bool;

    fn handle_return_url(&self, url: &ReturnUrl);

    /// Label used in diagnostics.
    fn name(&self) -> &str {
        ANONYMOUS
    }
}

/// Client assembled from a pair of closures.
#[derive(Clone)]
pub struct FnClient {
    name: String,
    can_handle: Arc<CanHandleFn>,
    handle: Arc<HandleFn>,
}

impl FnClient {
    pub fn new<C, H>(can_handle: C, handle: H) -> Self
    where
        C: Fn(&ReturnUrl) -> bool + Send + Sync + 'static,
        H: Fn(&ReturnUrl) + Send + Sync + 'static,
    {
        Self {
            name: ANONYMOUS.to_owned(),
            can_handle: Arc::new(can_handle),
            handle: Arc::new(handle),
        }
    }

    pub fn named<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }
}

impl AppContextSwitchClient for FnClient {
    fn can_handle_return_url(&self, url: &ReturnUrl) -> bool {
        (self.can_handle)(url)
    }

    fn handle_return_url(&self, url: &ReturnUrl) {
        (self.handle)(url)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for FnClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnClient")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Client that claims every URL accepted by a [`ReturnUrlMatcher`].
#[derive(Clone)]
pub struct MatcherClient {
    name: String,
    matcher: ReturnUrlMatcher,
    handle: Arc<HandleFn>,
}

impl MatcherClient {
    pub fn new<H>(matcher: ReturnUrlMatcher, handle: H) -> Self
    where
        H: Fn(&ReturnUrl) + Send + Sync + 'static,
    {
        Self {
            name: ANONYMOUS.to_owned(),
            matcher,
            handle: Arc::new(handle),
        }
    }

    pub fn named<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    pub fn matcher(&self) -> &ReturnUrlMatcher {
        &self.matcher
    }
}

impl AppContextSwitchClient for MatcherClient {
    fn can_handle_return_url(&self, url: &ReturnUrl) -> bool {
        self.matcher.matches(url)
    }

    fn handle_return_url(&self, url: &ReturnUrl) {
        (self.handle)(url)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Debug for MatcherClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatcherClient")
            .field("name", &self.name)
            .field("matcher", &self.matcher)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod client_test;
