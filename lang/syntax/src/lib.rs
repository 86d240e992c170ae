pub mod fmt;
pub use fmt::*;
