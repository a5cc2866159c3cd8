//! Sample survey documents for tests and demos.
//!
//! Each module holds one document in the import grammar as a string
//! constant, plus a helper returning its parsed form.

pub mod online_shopping;
pub mod product_feedback;

pub use online_shopping::ONLINE_SHOPPING;
pub use product_feedback::PRODUCT_FEEDBACK;
