pub mod asserts;
pub mod builders;
pub mod recording;
