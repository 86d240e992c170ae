//! The canonical dialects and the registry of their names.
//!
//! Every entry except [`SCALA210`] is derived from an earlier entry, so the
//! definitions double as the lineage of the syntax.

use crate::{dialect::*, err::*};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use parlance_utils::prelude::*;
use std::{
    collections::HashMap,
    sync::atomic::{AtomicUsize, Ordering},
};

/* ------------------------------- Scala 2.10 ------------------------------- */

pub static SCALA210: Lazy<Dialect> = Lazy::new(|| {
    Dialect::new(DialectFlags {
        allow_and_types: false,
        allow_at_for_extractor_varargs: true,
        allow_colon_for_extractor_varargs: false,
        allow_inline_idents: true,
        allow_inline_mods: false,
        allow_literal_types: false,
        allow_multiline_programs: true,
        allow_or_types: false,
        allow_pat_unquotes: false,
        allow_splice_underscores: false,
        allow_term_unquotes: false,
        allow_toplevel_terms: false,
        allow_trailing_commas: false,
        allow_trait_parameters: false,
        allow_view_bounds: true,
        allow_with_types: true,
        allow_xml_literals: true,
        toplevel_separator: String::new(),
    })
});

/* ----------------------------------- sbt ---------------------------------- */

/// Build definitions of sbt 0.13.6 and earlier; statements end at line breaks.
pub static SBT0136: Lazy<Dialect> = Lazy::new(|| {
    SCALA210.derive(|d| DialectFlags {
        allow_toplevel_terms: true,
        toplevel_separator: "\n".to_owned(),
        ..d
    })
});

pub static SBT0137: Lazy<Dialect> = Lazy::new(|| {
    SCALA210.derive(|d| DialectFlags {
        allow_toplevel_terms: true,
        toplevel_separator: String::new(),
        ..d
    })
});

/* ------------------------------- Scala 2.11 ------------------------------- */

pub static SCALA211: Lazy<Dialect> =
    Lazy::new(|| SCALA210.derive(|d| DialectFlags { allow_splice_underscores: true, ..d }));

pub static TYPELEVEL211: Lazy<Dialect> =
    Lazy::new(|| SCALA211.derive(|d| DialectFlags { allow_literal_types: true, ..d }));

pub static PARADISE211: Lazy<Dialect> = Lazy::new(|| {
    SCALA211.derive(|d| DialectFlags { allow_inline_idents: true, allow_inline_mods: true, ..d })
});

pub static PARADISE_TYPELEVEL211: Lazy<Dialect> = Lazy::new(|| {
    TYPELEVEL211.derive(|d| DialectFlags { allow_inline_idents: true, allow_inline_mods: true, ..d })
});

/* ------------------------------- Scala 2.12 ------------------------------- */

pub static SCALA212: Lazy<Dialect> = Lazy::new(|| {
    SCALA211.derive(|d| DialectFlags {
        allow_literal_types: false,
        allow_trailing_commas: true,
        ..d
    })
});

pub static TYPELEVEL212: Lazy<Dialect> =
    Lazy::new(|| SCALA212.derive(|d| DialectFlags { allow_literal_types: true, ..d }));

pub static PARADISE212: Lazy<Dialect> = Lazy::new(|| {
    SCALA212.derive(|d| DialectFlags { allow_inline_idents: true, allow_inline_mods: true, ..d })
});

pub static PARADISE_TYPELEVEL212: Lazy<Dialect> = Lazy::new(|| {
    TYPELEVEL212.derive(|d| DialectFlags { allow_inline_idents: true, allow_inline_mods: true, ..d })
});

/* ------------------------------- Scala 2.13 ------------------------------- */

/// Same flags as [`SCALA212`], separate identity.
pub static SCALA213: Lazy<Dialect> = Lazy::new(|| SCALA212.derive(|d| d));

/* ---------------------------------- Dotty --------------------------------- */

pub static DOTTY: Lazy<Dialect> = Lazy::new(|| {
    SCALA211.derive(|d| DialectFlags {
        allow_and_types: true,
        allow_at_for_extractor_varargs: false,
        allow_colon_for_extractor_varargs: true,
        allow_inline_idents: false,
        allow_inline_mods: true,
        allow_literal_types: true,
        allow_or_types: true,
        allow_trailing_commas: false,
        allow_trait_parameters: true,
        allow_view_bounds: false,
        allow_with_types: false,
        allow_xml_literals: false,
        ..d
    })
});

/* -------------------------------- Registry -------------------------------- */

/// The canonical dialects by identity and by name.
pub struct Catalog {
    by_id: HashMap<DialectId, &'static str>,
    by_name: IndexMap<&'static str, &'static Dialect>,
}

static CATALOG: SingCell<Catalog> = SingCell::new();
static BUILDS: AtomicUsize = AtomicUsize::new(0);

/// The catalog, built on first access.
pub fn catalog() -> &'static Catalog {
    CATALOG.get_or_init(Catalog::build)
}

/// Look a canonical dialect up by its name, e.g. `"Scala212"`.
pub fn standard(name: &str) -> Result<&'static Dialect> {
    catalog().get(name).ok_or_else(|| DialectError::UnknownDialect(name.to_owned()))
}

/// All canonical dialects, oldest first.
pub fn standards() -> impl Iterator<Item = (&'static str, &'static Dialect)> {
    catalog().iter()
}

impl Catalog {
    fn build() -> Self {
        BUILDS.fetch_add(1, Ordering::SeqCst);
        let entries: [(&'static str, &'static Dialect); 13] = [
            ("Scala210", Lazy::force(&SCALA210)),
            ("Sbt0136", Lazy::force(&SBT0136)),
            ("Sbt0137", Lazy::force(&SBT0137)),
            ("Scala211", Lazy::force(&SCALA211)),
            ("Typelevel211", Lazy::force(&TYPELEVEL211)),
            ("Paradise211", Lazy::force(&PARADISE211)),
            ("ParadiseTypelevel211", Lazy::force(&PARADISE_TYPELEVEL211)),
            ("Scala212", Lazy::force(&SCALA212)),
            ("Typelevel212", Lazy::force(&TYPELEVEL212)),
            ("Paradise212", Lazy::force(&PARADISE212)),
            ("ParadiseTypelevel212", Lazy::force(&PARADISE_TYPELEVEL212)),
            ("Scala213", Lazy::force(&SCALA213)),
            ("Dotty", Lazy::force(&DOTTY)),
        ];
        let mut by_id = HashMap::with_capacity(entries.len());
        let mut by_name = IndexMap::with_capacity(entries.len());
        for (name, dialect) in entries {
            by_id.insert(dialect.id(), name);
            by_name.insert(name, dialect);
        }
        log::debug!("dialect registry built with {} entries", by_name.len());
        Catalog { by_id, by_name }
    }
    pub fn name_of(&self, dialect: &Dialect) -> Option<&'static str> {
        self.by_id.get(&dialect.id()).copied()
    }
    pub fn get(&self, name: &str) -> Option<&'static Dialect> {
        self.by_name.get(name).copied()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static Dialect)> + '_ {
        self.by_name.iter().map(|(name, dialect)| (*name, *dialect))
    }
    pub fn len(&self) -> usize {
        self.by_name.len()
    }
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// How many times the registry has been built; one at most.
#[doc(hidden)]
pub fn registry_builds() -> usize {
    BUILDS.load(Ordering::SeqCst)
}
