//! The render hook handed to printers.
//!
//! A canonical dialect renders as its registered name; any other dialect
//! falls back to a dump of every flag.

use crate::dialect::*;
pub use parlance_syntax::{Pretty, Ugly};
use pretty::RcDoc;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    /// How the item would be written in source; for dialects this is the same as `Structure`.
    Syntax,
    Structure,
}

#[derive(Clone, Copy, Debug)]
pub struct Formatter {
    pub style: Style,
}
impl Formatter {
    pub fn new(style: Style) -> Self {
        Formatter { style }
    }
    pub fn syntax() -> Self {
        Formatter::new(Style::Syntax)
    }
    pub fn structure() -> Self {
        Formatter::new(Style::Structure)
    }
}

impl<'a> Ugly<'a, Formatter> for Dialect {
    fn ugly(&self, f: &'a Formatter) -> String {
        match f.style {
            | Style::Syntax | Style::Structure => match self.name() {
                | Some(name) => name.to_string(),
                | None => format!("Dialect({})", dump(self).collect::<Vec<_>>().join(", ")),
            },
        }
    }
}

impl<'a> Pretty<'a, Formatter> for Dialect {
    fn pretty(&self, f: &'a Formatter) -> RcDoc<'a> {
        match f.style {
            | Style::Syntax | Style::Structure => match self.name() {
                | Some(name) => RcDoc::text(name),
                | None => RcDoc::text("Dialect(")
                    .append(
                        RcDoc::line_()
                            .append(RcDoc::intersperse(
                                dump(self).map(RcDoc::text),
                                RcDoc::text(",").append(RcDoc::line()),
                            ))
                            .nest(2),
                    )
                    .append(RcDoc::line_())
                    .append(RcDoc::text(")"))
                    .group(),
            },
        }
    }
}

/// `flag = value` for every flag.
fn dump(dialect: &Dialect) -> impl Iterator<Item = String> {
    dialect.fields().into_iter().map(|(k, v)| format!("{} = {}", k, v))
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ugly(&Formatter::syntax()))
    }
}
