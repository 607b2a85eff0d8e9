use std::fmt;

use tracing::debug;

use super::credentials::{mask_key, resolve_credential};
use crate::errors::MigrateError;

/// Project the migration instructions reference when no override is set.
/// The project ref is an identifier (it appears in dashboard URLs and
/// `supabase link` commands), not a secret.
pub const DEFAULT_PROJECT_REF: &str = "sxrpbbvqypzmkqjfrgev";

pub const PROJECT_REF_VAR: &str = "SUPABASE_PROJECT_REF";
pub const SERVICE_ROLE_KEY_VAR: &str = "SUPABASE_SERVICE_ROLE_KEY";

/// Runtime settings, resolved once at startup. Both values are inert: they
/// fill in identifier slots in the printed steps and are never sent anywhere.
#[derive(Clone)]
pub struct Settings {
    pub project_ref: String,
    /// Service-role bearer key. Only ever sourced from the environment,
    /// never printed, never transmitted.
    pub service_role_key: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            project_ref: DEFAULT_PROJECT_REF.to_string(),
            service_role_key: None,
        }
    }
}

impl Settings {
    /// Load settings from the environment, falling back to defaults. Values
    /// support the `$VAR` indirection syntax of [`resolve_credential`].
    pub fn from_env() -> Result<Self, MigrateError> {
        let project_ref = match std::env::var(PROJECT_REF_VAR) {
            Ok(value) => resolve_credential(&value),
            Err(_) => DEFAULT_PROJECT_REF.to_string(),
        };

        let service_role_key = std::env::var(SERVICE_ROLE_KEY_VAR)
            .ok()
            .map(|value| resolve_credential(&value))
            .filter(|value| !value.is_empty());

        let settings = Self {
            project_ref,
            service_role_key,
        };
        settings.validate()?;

        if let Some(key) = &settings.service_role_key {
            debug!(key = %mask_key(key), "Service role key loaded; held only, never sent");
        }

        Ok(settings)
    }

    /// Reject malformed project refs before they reach the printed steps.
    pub fn validate(&self) -> Result<(), MigrateError> {
        if self.project_ref.is_empty() {
            return Err(MigrateError::Config(format!(
                "{} must not be empty",
                PROJECT_REF_VAR
            )));
        }
        if !self
            .project_ref
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        {
            return Err(MigrateError::Config(format!(
                "Invalid project ref '{}': expected lowercase letters and digits only",
                self.project_ref
            )));
        }
        Ok(())
    }

    /// REST endpoint for the project. Derived for display and tooling;
    /// nothing in this crate ever contacts it.
    pub fn api_url(&self) -> String {
        format!("https://{}.supabase.co", self.project_ref)
    }
}

// Manual Debug so the service-role key can never leak through logs.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("project_ref", &self.project_ref)
            .field(
                "service_role_key",
                &self.service_role_key.as_deref().map(mask_key),
            )
            .finish()
    }
}
