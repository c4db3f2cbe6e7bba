pub mod codec;
pub mod error;
pub mod files;
pub mod inventory;
