use std::env::var;

/// Get the value of an ENV var, or a default
///
/// The default is used when the var is not set, or set to an empty string
pub fn env_var_or(var_name: &str, default: &str) -> String {
    match var(var_name) {
        Ok(value) if !value.is_empty() => value,
        _ => default.to_string(),
    }
}
