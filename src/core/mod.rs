//! Core business logic - framework-agnostic data operations and aggregation.
//!
//! The submodules split into two kinds: async CRUD/query functions over the
//! database (`user`, `category`, `payment`) and pure aggregation over already
//! loaded collections (`aggregate`). Report builders live in [`crate::report`]
//! and consume only what these modules return.

pub mod aggregate;
pub mod category;
pub mod payment;
pub mod user;
