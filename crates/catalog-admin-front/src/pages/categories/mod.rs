pub mod form;
pub mod grid;

pub use form::CategoryFormModal;
pub use grid::CategoryGrid;
