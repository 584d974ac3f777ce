pub mod categories;
pub mod not_found;
pub mod products;

pub use categories::CategoryGrid;
pub use not_found::NotFound;
pub use products::ProductList;
