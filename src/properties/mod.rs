use crate::error::Error;
use serde_json::{Map, Value};

/// Records that keep the JSON keys they don't model, so that fields added to
/// the REST API later survive a read and re-serialization unchanged.
pub trait HasAdditionalProperties {
    fn additional_properties(&self) -> &Map<String, Value>;

    /// Stores `value` under `name`. Implementors refuse names that belong to
    /// one of their own fields.
    fn set_additional_property(&mut self, name: &str, value: Value) -> Result<(), Error>;

    fn additional_property(&self, name: &str) -> Option<&Value> {
        self.additional_properties().get(name)
    }
}
