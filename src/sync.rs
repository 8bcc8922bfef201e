#[cfg(feature = "std")]
pub struct Once<T>(std::sync::OnceLock<T>);

#[cfg(feature = "std")]
impl<T> Once<T> {
    pub const fn new() -> Self {
        Self(std::sync::OnceLock::new())
    }

    pub fn call_once<F: FnOnce() -> T>(&self, f: F) -> &T {
        self.0.get_or_init(f)
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
pub use spin::Once;
