pub mod scheme {
    /// Separator placed between a return URL scheme and the rest of the URL.
    pub const AUTHORITY_SEPARATOR: &str = "://";
    pub const DELIMITER: char = ':';
}

pub mod client {
    pub const ANONYMOUS: &str = "anonymous";
}

pub mod limits {
    pub const MAX_PATTERN_LENGTH: usize = 50_000;
}
