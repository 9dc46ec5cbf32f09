//! Grocery basket price comparison over a demo product catalog.
//!
//! The catalog and its per-retailer pricing are static, deterministically
//! generated configuration; lists, basket items and collaborators live in a
//! small SQLite store. Comparison and search are pure functions over a
//! snapshot of both.

pub mod catalog;
pub mod commands;
pub mod db;
pub mod models;

#[cfg(test)]
mod tests;

pub use catalog::{generate_retailer_pricing, seeded_random, seeded_variance, Catalog};
pub use commands::compare::{compare_basket, compare_list, resolve_items};
pub use commands::search::{search_catalog, suggest};
pub use db::Database;
