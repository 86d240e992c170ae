use once_cell::sync::OnceCell;

/// A cell that can be set once and then read many times, from any thread.
///
/// `init` meaning the cell is empty and we're inserting the value
///
/// `get` meaning the cell is not empty and we're reading the value
///
/// Under contention exactly one initializer runs; every other caller blocks
/// until the value is published and then observes that same value.
pub struct SingCell<T> {
    cell: OnceCell<T>,
}

impl<T> SingCell<T> {
    pub const fn new() -> Self {
        Self { cell: OnceCell::new() }
    }
    /// Initialize the cell if it is empty, and return a reference to the value.
    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> &T {
        self.cell.get_or_init(init)
    }
    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }
}

impl<T> Default for SingCell<T> {
    fn default() -> Self {
        Self::new()
    }
}
