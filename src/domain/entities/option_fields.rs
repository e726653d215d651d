use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Represents optional field semantics in PUT/PATCH requests.
///
/// - `Unchanged` → key absent from the payload
/// - `SetToNull` → explicitly null
/// - `SetToValue` → set to provided value
///
/// Use together with `#[serde(default)]` on the containing struct so that
/// absent keys deserialize to `Unchanged`.
#[derive(Debug, Clone, PartialEq)]
pub enum OptionField<T> {
    Unchanged,
    SetToNull,
    SetToValue(T),
}

impl<T> Default for OptionField<T> {
    fn default() -> Self {
        OptionField::Unchanged
    }
}

impl<'de, T> Deserialize<'de> for OptionField<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => OptionField::SetToValue(value),
            None => OptionField::SetToNull,
        })
    }
}

impl<T> Serialize for OptionField<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            OptionField::SetToValue(value) => value.serialize(serializer),
            _ => serializer.serialize_none(),
        }
    }
}

/// Column/value pairs of a sparse update, in the shape the table API expects.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ChangeSet(Map<String, Value>);

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `field` when a value was supplied. The column is not
    /// nullable, so an explicit null is treated like an absent key.
    pub fn with<T>(mut self, field: &str, value: &OptionField<T>) -> Self
    where
        T: Clone + Into<Value>,
    {
        if let OptionField::SetToValue(v) = value {
            self.0.insert(field.to_string(), v.clone().into());
        }
        self
    }

    /// Records `field` for a nullable column: an explicit null clears it.
    pub fn with_nullable<T>(mut self, field: &str, value: &OptionField<T>) -> Self
    where
        T: Clone + Into<Value>,
    {
        match value {
            OptionField::Unchanged => {}
            OptionField::SetToNull => {
                self.0.insert(field.to_string(), Value::Null);
            }
            OptionField::SetToValue(v) => {
                self.0.insert(field.to_string(), v.clone().into());
            }
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}
