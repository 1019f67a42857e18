//! Aggregation views over a sales snapshot.
//!
//! Each module provides a query struct that borrows a snapshot's record
//! slice (via the [`SalesReport`](crate::report::SalesReport) accessors) and
//! computes its view as a pure function of those records: identical input
//! yields identical ordered output, and an empty snapshot yields empty
//! results rather than an error.

pub mod categories;
pub mod locations;
pub mod monthly;
pub mod sellers;

pub use categories::CategoryQuery;
pub use locations::LocationQuery;
pub use monthly::MonthlyQuery;
pub use sellers::SellerQuery;
