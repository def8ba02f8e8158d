/// Loads a service configuration from environment variables.
///
/// Implementors derive `serde::Deserialize`. Field names map to upper-case variable
/// names (`database_url` reads `DATABASE_URL`); optional settings carry
/// `#[serde(default = "...")]`.
pub trait Config: Sized + serde::de::DeserializeOwned {
    /// # Errors
    ///
    /// Returns an error naming the variable when a required one is missing or a value
    /// cannot be parsed into its field type.
    fn from_env() -> Result<Self, envy::Error> {
        envy::from_env()
    }
}
