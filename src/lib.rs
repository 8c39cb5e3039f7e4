//! # Collection Trade-offs
//!
//! Two generic ordered containers with opposite cost profiles, exercised by
//! a small record database demo (students and products loaded from CSV).
//!
//! | Operation | `SortedLinkedList` | `SortedArray`        |
//! |-----------|--------------------|----------------------|
//! | Search    | O(n) linear        | O(log n) binary      |
//! | Insert    | O(n) + O(1) splice | O(log n) + O(n) shift|
//! | Remove    | O(n) + O(1) unlink | O(log n) + O(n) shift|
//! | Memory    | dynamic, per node  | fixed capacity       |
//!
//! Both containers are parameterized over the element type and a comparator
//! bound at creation; they never look at an element except through that
//! comparator. The array rejects duplicate keys to keep its prefix strictly
//! ordered, while the list accepts them, one more axis of the trade-off.
//!
//! ## Modules
//!
//! - [`sorted_list`] - dynamic singly-linked sorted list
//! - [`sorted_array`] - fixed-capacity sorted array with binary search
//! - [`records`] - the `Student` and `Product` record types
//! - [`loader`] - CSV ingestion into either container
//!
//! ## Key Dependencies
//!
//! - `csv` - delimited text ingestion
//! - `thiserror` - typed error enums
//! - `colored` - console output in the demo binary
//!
//! ## Running the Demo
//!
//! ```bash
//! cargo run --bin tradeoffs_demo
//! ```

pub mod loader;
pub mod records;
pub mod sorted_array;
pub mod sorted_list;

pub use sorted_array::{InsertError, SortedArray};
pub use sorted_list::SortedLinkedList;
