#![allow(clippy::style)]

pub mod cells;
pub mod ident;

pub mod prelude {
    pub use crate::{
        cells::SingCell,
        ident::{IdentAlloc, IdentLike},
        new_ident_type,
    };
}
