//! Page components for Antipolo Tour.

mod home;

pub use home::Home;
