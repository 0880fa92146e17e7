/// How [`AppContextSwitcher::register`](crate::AppContextSwitcher::register)
/// treats a client that is already registered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateRegistration {
    /// Append every registration; a client registered twice is consulted twice.
    #[default]
    Allow,
    /// Skip a client whose allocation is already in the registry.
    Ignore,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SwitcherOptions {
    pub return_url_scheme: String,
    pub duplicate_registration: DuplicateRegistration,
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
