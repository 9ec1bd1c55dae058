//! Helpers shared by unit tests

/// Stack size of a default spawned thread
pub const SMALL_STACK: usize = 2 * 1024 * 1024;

/// Run `f` on a fresh thread with a [`SMALL_STACK`] stack
pub fn on_small_stack<T, F>(f: F) -> T
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    std::thread::Builder::new()
        .stack_size(SMALL_STACK)
        .spawn(f)
        .unwrap()
        .join()
        .unwrap()
}
