pub mod types;

pub use types::MigrateError;
