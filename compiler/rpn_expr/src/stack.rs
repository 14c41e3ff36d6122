//! Stack growth for recursive tree traversals.
//!
//! - **Native targets**: `stacker` allocates a fresh segment whenever less
//!   than `RED_ZONE` bytes remain.
//! - **WASM**: passthrough.

/// Grow the stack when less than this much is left (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

/// Run `f`, growing the stack first if the remaining space is low.
///
/// Wrap the body of every recursive tree method in this:
///
/// ```text
/// fn op_count(&self) -> usize {
///     ensure_sufficient_stack(|| match self { ... })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
