use tracing::debug;

/// Resolve a credential value. If the value starts with '$', treat it as an
/// environment variable reference and resolve from the environment.
pub fn resolve_credential(value: &str) -> String {
    if let Some(var_name) = value.strip_prefix('$') {
        match std::env::var(var_name) {
            Ok(resolved) => {
                debug!(var = %var_name, "Resolved credential from environment");
                resolved
            }
            Err(_) => {
                debug!(var = %var_name, "Environment variable not set, using literal");
                value.to_string()
            }
        }
    } else {
        value.to_string()
    }
}

/// Mask a key for log output. Short keys are fully redacted; longer ones
/// keep an 8-character prefix so an operator can tell which key was loaded.
pub fn mask_key(key: &str) -> String {
    if key.len() <= 12 {
        "[REDACTED]".to_string()
    } else {
        let prefix: String = key.chars().take(8).collect();
        format!("{}…[redacted]", prefix)
    }
}
