//! Core caption management library.
//! This crate owns the ordered caption collection, the validation rules
//! that keep time ranges from overlapping, and WebVTT serialization.
//! Hosts (a GUI form, a CLI) drive it and render its results; the core
//! itself never touches the screen or the network.

pub mod session;
pub mod store;
pub mod vtt;
