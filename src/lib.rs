mod client;
pub mod constants;
mod context;
mod matcher;
mod options;
mod result;
mod switcher;
mod url;
mod util;

pub use client::{AppContextSwitchClient, CanHandleFn, FnClient, HandleFn, MatcherClient};
pub use context::OpenUrlContext;
pub use matcher::{PatternError, ReturnUrlMatcher};
pub use options::{DuplicateRegistration, SwitcherOptions};
pub use result::Dispatch;
pub use switcher::AppContextSwitcher;
pub use url::ReturnUrl;
pub use util::{equals_ignore_ascii_case, scheme_of};
