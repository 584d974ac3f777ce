pub mod confirm_dialog;
pub mod delete_confirmation;
pub mod form_field;
pub mod layout;
pub mod loading;
pub mod modal;
pub mod navbar;

pub use confirm_dialog::*;
pub use delete_confirmation::*;
pub use form_field::*;
pub use layout::*;
pub use loading::*;
pub use modal::*;
pub use navbar::*;
