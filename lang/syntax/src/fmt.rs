//! The formatter traits.
//!
//! A printer hands its own formatter to `ugly` or `pretty`; implementors
//! decide what to emit based on it.

#[impl_tools::autoimpl(for<T: trait + ?Sized> &T, &mut T, Box<T>, std::rc::Rc<T>, std::sync::Arc<T>)]
pub trait Ugly<'a, Fmter> {
    fn ugly(&self, f: &'a Fmter) -> String;
}

use pretty::RcDoc;

#[impl_tools::autoimpl(for<T: trait + ?Sized> &T, &mut T, Box<T>, std::rc::Rc<T>, std::sync::Arc<T>)]
pub trait Pretty<'a, Fmter> {
    fn pretty(&self, f: &'a Fmter) -> RcDoc<'a>;
}

/// Lay out a [`Pretty`] item at the given width.
pub fn render_pretty<'a, Fmter, T>(item: &T, f: &'a Fmter, width: usize) -> String
where
    T: Pretty<'a, Fmter> + ?Sized,
{
    let mut out = String::new();
    // writing to a `String` never fails
    let _ = item.pretty(f).render_fmt(width, &mut out);
    out
}
