//! Numeric routines shared by the quoting and range engines.

mod tick_math;

pub use tick_math::{
    nearest_usable_tick, price_to_nearest_usable_tick, shift_tick, tick_to_price,
};
