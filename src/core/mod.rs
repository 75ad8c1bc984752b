pub mod services;
pub mod sessions;

pub use sessions::SessionRegistry;
