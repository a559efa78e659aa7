//! Theme for the Antipolo tourist page.

mod styles;

pub use styles::GLOBAL_STYLES;
