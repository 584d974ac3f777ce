pub mod form;
pub mod list;

pub use form::ProductFormModal;
pub use list::ProductList;
