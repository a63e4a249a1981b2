//! Dioxus primitives shared by the deal pages.

pub mod components;

pub use components::*;
