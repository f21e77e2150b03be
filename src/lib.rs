//! # query-rs
//!
//! Lazy, composable query operators over in-memory sequences.
//!
//! ## Overview
//!
//! Any iterable can be lifted into a [`Query`] with [`IntoQuery::query`] and
//! then transformed by chaining operators:
//! - **Streaming**: `filter`, `select`, `select_indexed`, `zip`, `take`, `skip`,
//!   `distinct`, `distinct_by`, `union`
//! - **Buffering** (on first pull): `order_by` / `then_by`, `group_by`,
//!   `join`, `group_join`, `intersect`, `except`
//! - **Terminal**: `first`, `first_where`, `aggregate`, `reduce`,
//!   `to_lookup`, `to_vec`
//!
//! Nothing runs until the result is iterated. Operators that need the whole
//! input (sorts, groups, join lookups, set lookups) defer buffering until the
//! first element is requested.
//!
//! ## Example
//!
//! ```
//! use query_rs::IntoQuery;
//!
//! // (id, name, age)
//! let users = vec![(1, "Alice", 30), (2, "Bob", 25), (3, "Charlie", 35)];
//! // (user_id, amount)
//! let orders = vec![(1, 250), (2, 150), (1, 50), (3, 500)];
//!
//! let totals: Vec<(&str, i32)> = users
//!     .query()
//!     .filter(|u| u.2 >= 30)
//!     .group_join(orders, |u| u.0, |o| o.0, |u, matched| {
//!         (u.1, matched.iter().map(|o| o.1).sum::<i32>())
//!     })
//!     .to_vec();
//!
//! assert_eq!(totals, vec![("Alice", 300), ("Charlie", 500)]);
//! ```

pub mod demo;
pub mod error;
pub mod join;
pub mod lookup;
pub mod order;
pub mod query;
pub mod set;

pub use error::{QueryError, Result};
pub use join::{GroupJoin, Join};
pub use lookup::{GroupBy, Grouping, Groupings, Lookup};
pub use order::{Directed, OrderedQuery, SortOrder};
pub use query::{IntoQuery, Query};
pub use set::{Distinct, DistinctBy, Except, Intersect};
