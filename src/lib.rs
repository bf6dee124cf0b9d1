//! # Fenwick Trees
//!
//! *Logarithmic point updates and prefix sums over a fixed-size sequence.*
//!
//! ## Intuition First
//!
//! Picture a ledger of daily balances. Asking "how much came in during the
//! first `n` days?" means adding `n` numbers, unless someone keeps running
//! subtotals. Keep a subtotal for every day and a single correction forces
//! you to rewrite every later subtotal.
//!
//! A Fenwick tree keeps subtotals of *varying* width: the width of the
//! subtotal ending at position `p` is the lowest set bit of `p`. Any prefix
//! is then the sum of at most $\log_2 n$ subtotals, and any single change
//! lands in at most $\log_2 n$ of them.
//!
//! ## Historical Context
//!
//! ```text
//! 1989  Ryabko   Prefix-sum tree for adaptive arithmetic coding
//! 1994  Fenwick  "A New Data Structure for Cumulative Frequency Tables"
//! ```
//!
//! ## Mathematical Formulation
//!
//! For 1-based positions, with $\mathrm{lowbit}(p) = p \land -p$:
//!
//! $$tree[p] = \sum_{i = p - \mathrm{lowbit}(p) + 1}^{p} a_i$$
//!
//! - `add(i, d)`: add `d` to $tree[p]$ for $p = i+1, p + \mathrm{lowbit}(p), \dots$ while $p \le n$.
//! - `sum(n)`: add $tree[p]$ for $p = n, p - \mathrm{lowbit}(p), \dots$ while $p > 0$.
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(\log n)$ for `add` and `sum`, $O(1)$ for point reads,
//!   $O(n)$ for `from_values`.
//! - **Space**: two arrays of $n$ elements (logical values and subtotals).
//!
//! ## What Could Go Wrong
//!
//! 1. **Overflow**: sums use the element type's own addition. Pick a type
//!    wide enough for the largest prefix, or a float if rounding is fine.
//! 2. **Resize is not growth**: `resize` zero-fills; previous values are gone.
//!
//! ## References
//!
//! - Fenwick, P. M. (1994). "A New Data Structure for Cumulative Frequency Tables."
//! - Ryabko, B. Ya. (1989). "A fast on-line code."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod fenwick;

pub use error::{Error, Result};
pub use fenwick::{Entry, Fenwick};
