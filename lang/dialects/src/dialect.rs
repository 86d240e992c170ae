use crate::catalog;
use parlance_utils::prelude::*;
use serde::Deserialize;
use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
};

/// Declares the flag set once and derives every per-flag item from it, so the
/// full flag list, the sparse override set and the structural dump can never
/// drift apart.
macro_rules! dialect_flags {
    ($( $(#[$doc:meta])* $name:ident : $ty:ty, )*) => {
        /// Every capability flag of a dialect.
        ///
        /// There is no `Default`: a flag set is always spelled out in full,
        /// either as a literal or as struct-update syntax over an existing set.
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub struct DialectFlags {
            $( $(#[$doc])* pub $name: $ty, )*
        }

        /// A sparse set of flag overrides; `None` keeps the base value.
        #[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
        #[serde(deny_unknown_fields)]
        pub struct Overrides {
            $( pub $name: Option<$ty>, )*
        }

        impl Overrides {
            pub fn apply(&self, flags: DialectFlags) -> DialectFlags {
                DialectFlags {
                    $( $name: self.$name.clone().unwrap_or(flags.$name), )*
                }
            }
            pub fn is_empty(&self) -> bool {
                true $( && self.$name.is_none() )*
            }
        }

        impl DialectFlags {
            /// Every flag name paired with its debug-printed value, in declaration order.
            pub fn fields(&self) -> Vec<(&'static str, String)> {
                vec![ $( (stringify!($name), format!("{:?}", self.$name)), )* ]
            }
        }
    };
}

dialect_flags! {
    /// `A & B` intersection types.
    allow_and_types: bool,
    /// `case List(xs @ _*)`
    allow_at_for_extractor_varargs: bool,
    /// `case List(xs: _*)`
    allow_colon_for_extractor_varargs: bool,
    /// `inline` as an identifier.
    allow_inline_idents: bool,
    /// `inline` as a modifier.
    allow_inline_mods: bool,
    /// Singleton types of literals, e.g. `val x: 42 = 42`.
    allow_literal_types: bool,
    /// False for single-snippet embeddings such as build definitions.
    allow_multiline_programs: bool,
    /// `A | B` union types.
    allow_or_types: bool,
    /// Unquotes in patterns.
    allow_pat_unquotes: bool,
    /// `$_` right after an unquote marker in pattern interpolation.
    allow_splice_underscores: bool,
    /// Unquotes in terms.
    allow_term_unquotes: bool,
    /// Statements at the top level, as in scripts.
    allow_toplevel_terms: bool,
    allow_trailing_commas: bool,
    /// Constructor parameters on traits.
    allow_trait_parameters: bool,
    /// `def f[A <% B]`
    allow_view_bounds: bool,
    /// `A with B` compound types.
    allow_with_types: bool,
    allow_xml_literals: bool,
    /// Token required between top-level statements; empty when none is.
    toplevel_separator: String,
}

impl DialectFlags {
    pub fn allow_unquotes(&self) -> bool {
        self.allow_pat_unquotes || self.allow_term_unquotes
    }
}

new_ident_type! {
    /// Identity of a [`Dialect`] instance.
    pub struct DialectId;
}

/// One syntax variant.
///
/// Equality and hashing go by identity: two dialects built separately are
/// never equal, whatever their flags. Compare [`Dialect::flags`] for
/// structural equality.
pub struct Dialect {
    id: DialectId,
    flags: DialectFlags,
}

impl Dialect {
    pub fn new(flags: DialectFlags) -> Self {
        Dialect { id: DialectId::fresh(), flags }
    }
    /// A new dialect whose flags are this one's passed through `overrides`.
    ///
    /// ```ignore
    /// let d = SCALA211.derive(|d| DialectFlags { allow_literal_types: true, ..d });
    /// ```
    pub fn derive(&self, overrides: impl FnOnce(DialectFlags) -> DialectFlags) -> Dialect {
        Dialect::new(overrides(self.flags.clone()))
    }
    pub fn derive_with(&self, overrides: &Overrides) -> Dialect {
        self.derive(|flags| overrides.apply(flags))
    }
    pub fn id(&self) -> DialectId {
        self.id
    }
    pub fn flags(&self) -> &DialectFlags {
        &self.flags
    }
    /// The canonical name, if this very instance is in the catalog.
    pub fn name(&self) -> Option<&'static str> {
        catalog::catalog().name_of(self)
    }
    pub fn is_standard(&self) -> bool {
        self.name().is_some()
    }
}

impl Deref for Dialect {
    type Target = DialectFlags;
    fn deref(&self) -> &Self::Target {
        &self.flags
    }
}

impl PartialEq for Dialect {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for Dialect {}
impl Hash for Dialect {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}

impl fmt::Debug for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dialect").field("id", &self.id).field("flags", &self.flags).finish()
    }
}
