//! Identity tokens.
//!
//! An identity token is a number that is handed out at most once per
//! process. Types that must compare by identity rather than by content carry
//! one and implement equality and hashing on it alone.

use std::sync::atomic::{AtomicUsize, Ordering};

/// A lock-free allocator of never-reused tokens.
#[derive(Debug)]
pub struct IdentAlloc(AtomicUsize);

impl IdentAlloc {
    pub const fn new() -> Self {
        IdentAlloc(AtomicUsize::new(0))
    }
    pub fn next(&self) -> usize {
        self.0.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for IdentAlloc {
    fn default() -> Self {
        Self::new()
    }
}

pub trait IdentLike: Clone + Copy + Eq + std::hash::Hash {
    fn fresh() -> Self;
    fn index(&self) -> usize;
    fn concise(&self) -> String {
        format!("#{}", self.index())
    }
}

#[macro_export]
macro_rules! new_ident_type {
    ( $(#[$outer:meta])* $vis:vis struct $name:ident; $($rest:tt)* ) => {
        $(#[$outer])*
        #[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
        $vis struct $name(usize);

        impl $crate::ident::IdentLike for $name {
            fn fresh() -> Self {
                static ALLOC: $crate::ident::IdentAlloc = $crate::ident::IdentAlloc::new();
                $name(ALLOC.next())
            }
            fn index(&self) -> usize {
                self.0
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}{}", stringify!($name), $crate::ident::IdentLike::concise(self))
            }
        }

        $crate::new_ident_type!($($rest)*);
    };
    () => {}
}
