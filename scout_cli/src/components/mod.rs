/// Component module exports
pub mod table;

pub use table::TableWidget;
