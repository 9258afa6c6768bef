// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # qmc: exact two-level Boolean minimization
//!
//! Quine–McCluskey prime implicant generation with Petrick's method, returning
//! **every** minimal sum of products of a Boolean function.
//!
//! ## Quick Start
//!
//! ```rust
//! use qmc::{minimize, IndexedFunction, Variable};
//!
//! let f = IndexedFunction::from_minterms(
//!     "f",
//!     Variable::list(&["a", "b", "c", "d"]),
//!     &[0, 1, 4, 5, 9, 11, 15],
//!     &[],
//! )?;
//!
//! let solutions = minimize(&f)?;
//! assert_eq!(solutions.len(), 2);
//! for solution in &solutions {
//!     // f = [0x0x, 1x11, 10x1] and f = [0x0x, 1x11, x001]
//!     assert_eq!(solution.masks().len(), 3);
//! }
//! # Ok::<(), qmc::Error>(())
//! ```
//!
//! ## Masks
//!
//! A product term is a [`Mask`]: one of `0`, `1` or `x` per variable, the first
//! variable being the most significant bit. `"1x01"` over `a b c d` is
//! `a·c'·d` and covers rows 9 and 13.
//!
//! ## Architecture
//!
//! ```text
//! BooleanFunction (minterms + don't-cares)
//!       │
//!       ├──► PrimeImplicantGenerator ──► primes
//!       │
//!       ├──► CoveringTable ──► essential primes + residual minterms
//!       │
//!       ├──► PetrickSolver (Expr: distribute + absorb) ──► cheapest covers
//!       │
//!       └──► Vec<MaskBasedFunction>, one per minimal cover
//! ```
//!
//! The library logs through the `log` facade (`debug` per phase, `trace` per
//! Petrick distribution step) and never installs a logger itself.

pub mod config;
pub mod error;
pub mod function;
pub mod implicant;
pub mod mask;
pub mod minimize;
pub mod petrick;
pub mod primes;
pub mod symbolic;
pub mod table;

// Re-exports
pub use config::MinimizerOptions;
pub use error::{Error, Result};
pub use function::{
    table_size, BooleanFunction, BooleanValue, IndexKind, IndexedFunction, MaskBasedFunction,
    Variable, MAX_DOMAIN_SIZE,
};
pub use implicant::Implicant;
pub use mask::{Mask, MaskValue};
pub use minimize::{minimize, minimize_with_options, QmcMinimizer};
pub use petrick::PetrickSolver;
pub use primes::{prime_implicants, PrimeImplicantGenerator};
pub use symbolic::{Expr, Operands};
pub use table::CoveringTable;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
