//! Eager reference operators for query-rs.
//!
//! Every operator here materializes its full result immediately and uses
//! the most direct algorithm available: nested loops for joins, linear scans
//! for grouping and set membership, insertion sort for ordering. Keys only
//! need `PartialEq`/`Ord`, never `Hash`.
//!
//! The operators are slow on purpose. They serve as an oracle: the lazy
//! hash-based operators in `query-rs` must produce identical output for
//! every input.

pub mod ops;

pub use ops::{
    aggregate, distinct, except, filter, first, group_by, group_join, intersect, join, order_by,
    select, union, zip,
};
