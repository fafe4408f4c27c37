//! Per-platform input field state

use crate::error::IdentifierError;

use super::Platform;

/// Value and validation error of one platform's input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldState {
    /// Text currently shown in the field (already normalized)
    pub value: String,
    /// Validation error, if the last edit was rejected
    pub error: Option<IdentifierError>,
}

impl FieldState {
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Non-empty and error-free, i.e. eligible for a fetch commit
    pub fn is_accepted(&self) -> bool {
        !self.is_empty() && !self.has_error()
    }
}

/// One [`FieldState`] per platform, indexed in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    fields: [FieldState; 3],
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, platform: Platform) -> &FieldState {
        &self.fields[platform.index()]
    }

    pub fn get_mut(&mut self, platform: Platform) -> &mut FieldState {
        &mut self.fields[platform.index()]
    }

    /// Iterate `(platform, field)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (Platform, &FieldState)> {
        Platform::ALL.into_iter().zip(self.fields.iter())
    }

    /// Whether any field currently carries a validation error
    pub fn any_error(&self) -> bool {
        self.fields.iter().any(FieldState::has_error)
    }

    /// Whether every field is empty
    pub fn all_empty(&self) -> bool {
        self.fields.iter().all(FieldState::is_empty)
    }
}
