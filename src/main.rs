#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod dom;
mod pages;
mod storage;
mod theme;

use tracing::Level;

fn main() {
    // Browser console logging through Dioxus's tracing subscriber
    if dioxus::logger::init(Level::INFO).is_err() {
        tracing::debug!("Logger already initialized");
    }

    tracing::info!("Starting Antipolo Tour");

    dioxus::launch(app::App);
}
