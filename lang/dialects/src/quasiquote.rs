//! Dialects for parsing inside quasiquotes.
//!
//! Only the quasiquote parser should call into this module. The derived
//! dialects are never registered, so they always render as a flag dump.

use crate::{dialect::*, err::*};

/// Unquotes allowed in terms.
pub fn try_term(base: &Dialect, multiline: bool) -> Result<Dialect> {
    unquote_variant(base, "term", |d| DialectFlags {
        allow_term_unquotes: true,
        allow_multiline_programs: multiline,
        ..d
    })
}

/// Unquotes allowed in patterns.
pub fn try_pattern(base: &Dialect, multiline: bool) -> Result<Dialect> {
    unquote_variant(base, "pattern", |d| DialectFlags {
        allow_pat_unquotes: true,
        allow_multiline_programs: multiline,
        ..d
    })
}

/// Panics if `base` already allows unquotes.
pub fn term(base: &Dialect, multiline: bool) -> Dialect {
    try_term(base, multiline).unwrap_or_else(|err| panic!("{}", err))
}

/// Panics if `base` already allows unquotes.
pub fn pattern(base: &Dialect, multiline: bool) -> Dialect {
    try_pattern(base, multiline).unwrap_or_else(|err| panic!("{}", err))
}

fn unquote_variant(
    base: &Dialect, kind: &str, overrides: impl FnOnce(DialectFlags) -> DialectFlags,
) -> Result<Dialect> {
    if base.allow_unquotes() {
        return Err(DialectError::UnquotesAlreadyAllowed { dialect: base.to_string() });
    }
    let derived = base.derive(overrides);
    log::trace!("derived {} unquote dialect {:?} from {}", kind, derived.id(), base);
    Ok(derived)
}
