//! Core library for pagewise
//!
//! This crate implements the **Functional Core** of the pagewise application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The pagewise project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`pagewise_core`** (this crate): Pagination logic with no terminal I/O
//! - **`pagewise`**: Argument parsing, output and orchestration (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: The range calculator mutates nothing and owns no state
//! - **Testable**: Exercised exhaustively with plain loops, no mocking required
//!
//! # Module Organization
//!
//! - [`range`]: Which page numbers a paginator renders as triggers
//! - [`paginator`]: Owned paginator state that recomputes triggers on every change
//! - [`bounds`]: Page counts and slice bounds for paged collections
//! - [`chapters`]: Markdown chapter listing, the collection being paged
//!
//! # Example Usage
//!
//! ```rust
//! use pagewise_core::paginator::Paginator;
//!
//! let mut paginator = Paginator::new(18, 5).unwrap();
//! paginator.go_to(9).unwrap();
//!
//! assert_eq!(paginator.triggers(), vec![1, 8, 9, 10, 18]);
//! assert!(paginator.view().has_next);
//! ```

pub mod bounds;
pub mod chapters;
pub mod error;
pub mod paginator;
pub mod range;

pub use error::PaginationError;
pub use paginator::{Paginator, PaginatorView};
pub use range::{compute_visible_pages, Window, DEFAULT_VISIBLE_COUNT};
