/// Outcome of routing a return URL through the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The client at `index` (registration order) claimed and handled the URL.
    Handled { index: usize },
    /// No client claimed the URL. This is a normal outcome, not an error.
    Unhandled,
}

impl Dispatch {
    pub fn is_handled(&self) -> bool {
        matches!(self, Dispatch::Handled { .. })
    }

    pub fn handled_by(&self) -> Option<usize> {
        match self {
            Dispatch::Handled { index } => Some(*index),
            Dispatch::Unhandled => None,
        }
    }
}
