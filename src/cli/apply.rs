use tracing::{debug, info};

use crate::config::Settings;
use crate::errors::MigrateError;
use crate::instructions;
use crate::migration::schema;

/// The one operation this binary has: resolve settings and print the manual
/// application steps for the agent dashboard migration.
pub fn handle_apply() -> Result<(), MigrateError> {
    let settings = Settings::from_env()?;
    info!(project_ref = %settings.project_ref, "Printing agent dashboard migration instructions");
    debug!(
        tables = schema::create_table_count(),
        indexes = schema::create_index_count(),
        rls_disables = schema::rls_disable_count(),
        "Migration payload summary"
    );

    instructions::print_instructions(&settings)?;
    Ok(())
}
