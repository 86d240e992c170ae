//! Syntax dialects.
//!
//! A [`Dialect`] is an immutable bundle of capability flags that a parser
//! branches on. The [`catalog`] holds the canonical, named dialects; each one
//! is derived from an earlier one by overriding a handful of flags.

pub mod catalog;
pub mod conf;
pub mod dialect;
pub mod err;
pub mod fmt;
#[doc(hidden)]
pub mod quasiquote;

pub use catalog::*;
pub use conf::DialectConf;
pub use dialect::*;
pub use err::*;
