/// Screen module exports

pub mod browse;
pub mod saved;

pub use browse::BrowseScreen;
pub use saved::{SavedScreen, SavedScreenState};
