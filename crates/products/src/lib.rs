//! Products domain module.
//!
//! The catalog entity fed by external sources, and the inbound payload that
//! maps onto it. Pure domain logic: no IO, no HTTP, no storage.

pub mod product;
pub mod request;

pub use product::Product;
pub use request::ProductRequest;
