pub mod credentials;
pub mod types;

pub use types::Settings;
