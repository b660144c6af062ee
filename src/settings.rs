//! Settings edit state management.
//!
//! Holds the in-memory plant list being edited, the current selection and
//! focused field, and the threshold clamping and save validation rules.

use anyhow::Result;
use thiserror::Error;

use crate::data::{PlantConfig, PlantStore};

/// Validation failure raised when a record's thresholds are inverted
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Invalid Range: Check moisture range for {plant}")]
pub struct ThresholdError {
    pub plant: String,
}

/// Which field of the selected plant is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Name,
    Image,
    Min,
    Max,
}

impl EditField {
    pub fn next(self) -> Self {
        match self {
            EditField::Name => EditField::Image,
            EditField::Image => EditField::Min,
            EditField::Min => EditField::Max,
            EditField::Max => EditField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            EditField::Name => EditField::Max,
            EditField::Image => EditField::Name,
            EditField::Min => EditField::Image,
            EditField::Max => EditField::Min,
        }
    }

    /// Whether the field takes free-form text input
    pub fn is_text(self) -> bool {
        matches!(self, EditField::Name | EditField::Image)
    }
}

/// In-memory state of the settings view
#[derive(Debug)]
pub struct SettingsState {
    plants: Vec<PlantConfig>,
    selected: usize,
    field: EditField,
    status: Option<String>,
}

impl Default for SettingsState {
    fn default() -> Self {
        SettingsState {
            plants: Vec::new(),
            selected: 0,
            field: EditField::Name,
            status: None,
        }
    }
}

impl SettingsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the edited list, resetting selection and status
    pub fn set_plants(&mut self, plants: Vec<PlantConfig>) {
        self.plants = plants;
        self.selected = 0;
        self.field = EditField::Name;
        self.status = None;
    }

    pub fn plants(&self) -> &[PlantConfig] {
        &self.plants
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn field(&self) -> EditField {
        self.field
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn select_next(&mut self) {
        if !self.plants.is_empty() {
            self.selected = (self.selected + 1) % self.plants.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.plants.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.plants.len() - 1);
        }
    }

    pub fn next_field(&mut self) {
        self.field = self.field.next();
    }

    pub fn prev_field(&mut self) {
        self.field = self.field.prev();
    }

    /// Append a character to the focused text field
    pub fn push_char(&mut self, c: char) {
        let field = self.field;
        let Some(plant) = self.plants.get_mut(self.selected) else {
            return;
        };
        match field {
            EditField::Name => plant.name.push(c),
            EditField::Image => plant.image_uri.get_or_insert_with(String::new).push(c),
            EditField::Min | EditField::Max => {}
        }
    }

    /// Delete the last character of the focused text field
    pub fn backspace(&mut self) {
        let field = self.field;
        let Some(plant) = self.plants.get_mut(self.selected) else {
            return;
        };
        match field {
            EditField::Name => {
                plant.name.pop();
            }
            EditField::Image => {
                if let Some(uri) = plant.image_uri.as_mut() {
                    uri.pop();
                    if uri.is_empty() {
                        plant.image_uri = None;
                    }
                }
            }
            EditField::Min | EditField::Max => {}
        }
    }

    /// Adjust the focused threshold by `delta` percent.
    ///
    /// The minimum is clamped below the current maximum and the maximum above
    /// the current minimum, so adjustments alone can never invert a range.
    pub fn adjust(&mut self, delta: i16) {
        let field = self.field;
        let Some(plant) = self.plants.get_mut(self.selected) else {
            return;
        };
        match field {
            EditField::Min => {
                let ceiling = i16::from(plant.max).saturating_sub(1).max(0);
                let value = (i16::from(plant.min) + delta).clamp(0, ceiling);
                plant.min = value as u8;
            }
            EditField::Max => {
                let floor = (i16::from(plant.min) + 1).min(100);
                let value = (i16::from(plant.max) + delta).clamp(floor, 100);
                plant.max = value as u8;
            }
            EditField::Name | EditField::Image => {}
        }
    }

    /// Check every record's thresholds, reporting the first inverted range
    pub fn validate(&self) -> Result<(), ThresholdError> {
        for plant in &self.plants {
            if plant.min >= plant.max {
                return Err(ThresholdError {
                    plant: plant.display_name().to_string(),
                });
            }
        }
        Ok(())
    }

    /// Validate and persist the full list. A validation failure surfaces in
    /// the status line and leaves the store untouched; only I/O failures
    /// propagate as errors.
    pub fn save(&mut self, store: &PlantStore) -> Result<()> {
        if let Err(err) = self.validate() {
            self.status = Some(err.to_string());
            return Ok(());
        }
        store.save_plants(&self.plants)?;
        self.status = Some("All plant settings saved successfully!".to_string());
        Ok(())
    }
}
