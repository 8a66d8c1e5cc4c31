//! Backend Configuration
//!
//! Project URL and anon key of the hosted database.

use crate::domain::ConfigError;

/// Table used when `SUPABASE_TABLE` is not set
pub const DEFAULT_TABLE: &str = "todos";

const URL_VAR: &str = "SUPABASE_URL";
const KEY_VAR: &str = "SUPABASE_ANON_KEY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseConfig {
    /// Project URL without trailing slash, e.g. `https://xyz.supabase.co`
    pub url: String,
    /// Public anon key, sent as `apikey` and bearer token
    pub anon_key: String,
    /// Table name under `/rest/v1/`
    pub table: String,
}

impl SupabaseConfig {
    pub fn new(url: &str, anon_key: &str) -> Result<Self, ConfigError> {
        let url = url.trim();
        let anon_key = anon_key.trim();
        if url.is_empty() {
            return Err(ConfigError::Missing(URL_VAR));
        }
        if anon_key.is_empty() {
            return Err(ConfigError::Missing(KEY_VAR));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::InvalidUrl(url.to_string()));
        }

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            table: DEFAULT_TABLE.to_string(),
        })
    }

    /// Use another table name; blank names keep the current one
    pub fn with_table(mut self, table: &str) -> Self {
        let table = table.trim();
        if !table.is_empty() {
            self.table = table.to_string();
        }
        self
    }

    /// Values captured at compile time, for the browser bundle
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("SUPABASE_URL"),
            option_env!("SUPABASE_ANON_KEY"),
            option_env!("SUPABASE_TABLE"),
        )
    }

    /// Values from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = std::env::var(URL_VAR).ok();
        let key = std::env::var(KEY_VAR).ok();
        let table = std::env::var("SUPABASE_TABLE").ok();
        Self::from_values(url.as_deref(), key.as_deref(), table.as_deref())
    }

    fn from_values(
        url: Option<&str>,
        anon_key: Option<&str>,
        table: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let url = url.ok_or(ConfigError::Missing(URL_VAR))?;
        let anon_key = anon_key.ok_or(ConfigError::Missing(KEY_VAR))?;
        let config = Self::new(url, anon_key)?;
        Ok(match table {
            Some(table) => config.with_table(table),
            None => config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_strips_trailing_slash() {
        let config = SupabaseConfig::new("https://demo.supabase.co/", "anon").unwrap();
        assert_eq!(config.url, "https://demo.supabase.co");
        assert_eq!(config.table, DEFAULT_TABLE);
    }

    #[test]
    fn test_new_rejects_blank_values() {
        assert_eq!(
            SupabaseConfig::new("  ", "anon"),
            Err(ConfigError::Missing("SUPABASE_URL"))
        );
        assert_eq!(
            SupabaseConfig::new("https://demo.supabase.co", ""),
            Err(ConfigError::Missing("SUPABASE_ANON_KEY"))
        );
    }

    #[test]
    fn test_new_rejects_non_http_url() {
        let err = SupabaseConfig::new("demo.supabase.co", "anon").unwrap_err();
        assert_eq!(err, ConfigError::InvalidUrl("demo.supabase.co".to_string()));
    }

    #[test]
    fn test_from_values_table_override() {
        let config = SupabaseConfig::from_values(
            Some("http://localhost:54321"),
            Some("anon"),
            Some("tasks"),
        )
        .unwrap();
        assert_eq!(config.table, "tasks");

        let blank = SupabaseConfig::from_values(Some("http://localhost:54321"), Some("anon"), Some(" "))
            .unwrap();
        assert_eq!(blank.table, DEFAULT_TABLE);
    }

    #[test]
    fn test_from_env() {
        // The only test touching these variables
        std::env::set_var("SUPABASE_URL", "http://localhost:54321/");
        std::env::set_var("SUPABASE_ANON_KEY", "env-key");
        std::env::set_var("SUPABASE_TABLE", "env_todos");

        let config = SupabaseConfig::from_env().unwrap();

        std::env::remove_var("SUPABASE_TABLE");
        let default_table = SupabaseConfig::from_env().unwrap();

        std::env::remove_var("SUPABASE_ANON_KEY");
        let missing = SupabaseConfig::from_env();
        std::env::remove_var("SUPABASE_URL");

        assert_eq!(config.url, "http://localhost:54321");
        assert_eq!(config.anon_key, "env-key");
        assert_eq!(config.table, "env_todos");
        assert_eq!(default_table.table, DEFAULT_TABLE);
        assert_eq!(missing, Err(ConfigError::Missing("SUPABASE_ANON_KEY")));
    }

    #[test]
    fn test_from_values_missing() {
        assert_eq!(
            SupabaseConfig::from_values(None, Some("anon"), None),
            Err(ConfigError::Missing("SUPABASE_URL"))
        );
    }
}
