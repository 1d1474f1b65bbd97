use serde::de::DeserializeOwned;
use serde::Serialize;

/// A value type with an explicit, versioned persisted schema.
///
/// Stores wrap every value in an envelope carrying `KIND` and `VERSION` and
/// call [`Record::validate`] on decode, so a line that parses but breaks an
/// invariant is still rejected.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Envelope discriminator, unique per type.
    const KIND: &'static str;
    /// Schema version written on encode and required on decode.
    const VERSION: u32;

    /// Check the type's invariants. `Err` carries a human-readable reason.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
