pub mod failure;
pub mod request;
pub mod response;

pub use failure::Failure;
pub use request::{CategoryPayload, ProductPayload};
pub use response::{Category, Product};
