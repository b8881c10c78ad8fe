/// Errors raised while loading service configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config from environment: {0}")]
    Env(#[from] envy::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Trait for loading service configuration from environment variables.
///
/// Implementors derive `serde::Deserialize` (field `database_url` maps to env var
/// `DATABASE_URL`) and may override [`Config::validate`] for range checks that
/// serde cannot express.
pub trait Config: Sized + serde::de::DeserializeOwned {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }

    /// Load from the process environment.
    fn from_env() -> Result<Self, ConfigError> {
        checked(envy::from_env::<Self>()?)
    }

    /// Load from explicit `(KEY, value)` pairs. Used by tests and tooling.
    fn from_pairs<I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        checked(envy::from_iter::<_, Self>(pairs)?)
    }
}

fn checked<C: Config>(config: C) -> Result<C, ConfigError> {
    config.validate().map_err(ConfigError::Invalid)?;
    Ok(config)
}
