//! Rule systems operating on the [`Board`](crate::board::Board).
//!
//! Each mutation ends by re-running the aggregate recalculations it affects.

pub mod aggregate;
pub mod assignment;
pub mod inventory;
pub mod search;
pub mod selection;
