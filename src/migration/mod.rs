pub mod schema;

pub use schema::{AGENT_DASHBOARD_SQL, TABLES};
