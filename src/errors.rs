// 🧾 Validation Errors - Field-keyed message collection
// Messages accumulate per field in insertion order; keys are canonical
// lower-case strings, addressable by string or by the Field enum

use serde::{Deserialize, Serialize};

// ============================================================================
// FIELD IDENTITY
// ============================================================================

/// The fields a bank account carries, as symbolic identities.
///
/// `Field::RoutingNumber` and the string `"routing_number"` address the same
/// error slot; lookup normalizes both to the same canonical key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    FirstName,
    LastName,
    AccountNumber,
    RoutingNumber,
    /// Account type ("checking", "savings", ...). Keyed as "type".
    Type,
    EcheckType,
    BankName,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::AccountNumber => "account_number",
            Field::RoutingNumber => "routing_number",
            Field::Type => "type",
            Field::EcheckType => "echeck_type",
            Field::BankName => "bank_name",
        }
    }
}

// ============================================================================
// FIELD KEY
// ============================================================================

/// Canonical error-collection key.
///
/// Every way of naming a field (string slice, owned string, `Field` variant)
/// converts into the same lower-case form, so `add` and `on` accept any of
/// them interchangeably.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldKey(String);

impl FieldKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FieldKey {
    fn from(name: &str) -> Self {
        FieldKey(name.trim().to_ascii_lowercase())
    }
}

impl From<String> for FieldKey {
    fn from(name: String) -> Self {
        FieldKey::from(name.as_str())
    }
}

impl From<Field> for FieldKey {
    fn from(field: Field) -> Self {
        FieldKey(field.as_str().to_string())
    }
}

impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// Field-keyed validation error collection.
///
/// Owned by a single record and rebuilt on every validation pass. Field order
/// follows first insertion; message order within a field follows `add` order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Errors {
    entries: Vec<(FieldKey, Vec<String>)>,
}

impl Errors {
    pub fn new() -> Self {
        Errors::default()
    }

    /// Append a message for a field.
    pub fn add<K: Into<FieldKey>>(&mut self, field: K, message: impl Into<String>) {
        let key = field.into();
        let message = message.into();

        if let Some((_, messages)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            messages.push(message);
        } else {
            self.entries.push((key, vec![message]));
        }
    }

    /// Messages recorded for a field, empty when the field has none.
    pub fn on<K: Into<FieldKey>>(&self, field: K) -> &[String] {
        let key = field.into();
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, messages)| messages.as_slice())
            .unwrap_or(&[])
    }

    /// True when no field has any message.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total message count across all fields.
    pub fn len(&self) -> usize {
        self.entries.iter().map(|(_, messages)| messages.len()).sum()
    }

    /// Drop all recorded messages.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Fields that currently have messages, in first-insertion order.
    pub fn fields(&self) -> Vec<&str> {
        self.entries.iter().map(|(key, _)| key.as_str()).collect()
    }

    /// Flatten to "field message" lines for display.
    pub fn full_messages(&self) -> Vec<String> {
        self.entries
            .iter()
            .flat_map(|(key, messages)| {
                messages
                    .iter()
                    .map(move |message| format!("{} {}", key, message))
            })
            .collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================
