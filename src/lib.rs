pub mod entity;
pub mod price;
pub mod solana;
pub mod valuer;
pub mod view;

// Re-export commonly used items
pub use entity::*;
pub use price::*;
pub use solana::*;
pub use valuer::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
