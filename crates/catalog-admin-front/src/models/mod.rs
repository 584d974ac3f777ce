pub mod category_form;
pub mod product_form;
pub mod state;

pub use category_form::*;
pub use product_form::*;
pub use state::*;
