/// Candidate Scout TUI library: screens, components, keymap, and event loop.
pub mod components;
pub mod keymap;
pub mod screens;
pub mod ui;
