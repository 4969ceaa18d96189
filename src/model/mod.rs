//! Domain entities of the catalog.
//!
//! All values are immutable snapshots handed out by the repositories.

mod category;
mod price;
mod product;
mod user;

pub use category::Category;
pub use price::Price;
pub use product::Product;
pub use user::User;
