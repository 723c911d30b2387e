//! Stack growth for the recursive phases of the interpreter.
//!
//! The parser recurses once per nesting level of an expression or block, and
//! the evaluator recurses once per nested expression, block, and function
//! call. Quill has no recursion limit of its own, so a deeply recursive
//! script would otherwise hit the host's fixed thread stack long before it
//! ran out of memory.
//!
//! Wrap each recursive entry point with [`ensure_sufficient_stack`]:
//!
//! ```text
//! fn eval_expr(&mut self, expr: &Expr, env: &Environment) -> EvalResult {
//!     ensure_sufficient_stack(|| self.eval_expr_inner(expr, env))
//! }
//! ```
//!
//! On native targets the `stacker` crate allocates a fresh segment whenever
//! less than [`RED_ZONE`] bytes remain. On WASM the closure runs directly.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if it is close to exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack; run `f` as-is.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
