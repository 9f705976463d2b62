//! Smart Cart
//!
//! Core cart semantics for the Smart Cart service: line items, mutations and
//! total computation, kept free of persistence and transport concerns.

pub mod cart;
pub mod ids;
pub mod items;
pub mod mutation;
pub mod totals;
