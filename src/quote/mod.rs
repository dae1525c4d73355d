//! Exact-input swap quoting.

mod constant_product;
#[cfg(test)]
mod proptest_properties;

pub use constant_product::{quote_exact_in, quote_exact_in_route};
