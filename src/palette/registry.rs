//! Ordered set of paintable definitions with per-entry colors and a selection

use crate::io::error::{EditorError, Result};
use crate::palette::color::Color;
use crate::palette::definition::{Definition, DefinitionId};
use rand::{SeedableRng, rngs::StdRng};

/// Paintable definitions, their display colors and the current selection
///
/// Definitions are unique by identity and keep their insertion order; the
/// ordinal doubles as the [`DefinitionId`] cells store. Colors are sampled
/// from a seeded generator so a palette built twice from the same input
/// looks the same.
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<Definition>,
    colors: Vec<Color>,
    selected: Option<usize>,
    rng: StdRng,
}

impl Palette {
    /// Build a palette from host-supplied definitions
    ///
    /// Later duplicates of an already present definition are dropped. The
    /// first entry is selected when there is one.
    pub fn new<I>(definitions: I, seed: u64) -> Self
    where
        I: IntoIterator<Item = Definition>,
    {
        let mut palette = Self {
            entries: Vec::new(),
            colors: Vec::new(),
            selected: None,
            rng: StdRng::seed_from_u64(seed),
        };
        for definition in definitions {
            palette.insert(definition);
        }
        palette
    }

    /// Add a definition, sampling a color for it
    ///
    /// Inserting a definition that is already present changes nothing and
    /// returns the existing id.
    pub fn insert(&mut self, definition: Definition) -> DefinitionId {
        if let Some(existing) = self.position(&definition.key) {
            return existing;
        }

        self.entries.push(definition);
        self.colors.push(Color::random(&mut self.rng));
        if self.selected.is_none() {
            self.selected = Some(0);
        }
        DefinitionId(self.entries.len() - 1)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the palette has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Id of the entry with the given asset key
    pub fn position(&self, key: &str) -> Option<DefinitionId> {
        self.entries
            .iter()
            .position(|entry| entry.key == key)
            .map(DefinitionId)
    }

    /// Definition behind an id
    pub fn definition(&self, id: DefinitionId) -> Option<&Definition> {
        self.entries.get(id.0)
    }

    /// Display color behind an id
    pub fn color(&self, id: DefinitionId) -> Option<Color> {
        self.colors.get(id.0).copied()
    }

    /// Entries in palette order with their ids and colors
    pub fn iter(&self) -> impl Iterator<Item = (DefinitionId, &Definition, Color)> + '_ {
        self.entries
            .iter()
            .zip(self.colors.iter().copied())
            .enumerate()
            .map(|(index, (definition, color))| (DefinitionId(index), definition, color))
    }

    /// Id of the current selection
    pub const fn selected_id(&self) -> Option<DefinitionId> {
        match self.selected {
            Some(index) => Some(DefinitionId(index)),
            None => None,
        }
    }

    /// Definition at the current selection
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NoSelection`] if the palette is empty
    pub fn selected_definition(&self) -> Result<&Definition> {
        self.selected
            .and_then(|index| self.entries.get(index))
            .ok_or(EditorError::NoSelection)
    }

    /// Display color at the current selection
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::NoSelection`] if the palette is empty
    pub fn selected_color(&self) -> Result<Color> {
        self.selected
            .and_then(|index| self.colors.get(index).copied())
            .ok_or(EditorError::NoSelection)
    }

    /// Select the entry with the same identity as `definition`
    ///
    /// Leaves the selection untouched when the definition is not in the
    /// palette.
    pub fn select(&mut self, definition: &Definition) {
        if let Some(id) = self.position(&definition.key) {
            self.selected = Some(id.0);
        }
    }

    /// Select an entry by id, ignoring ids outside the palette
    pub fn select_id(&mut self, id: DefinitionId) {
        if id.0 < self.entries.len() {
            self.selected = Some(id.0);
        }
    }

    /// Overwrite the display color of one entry
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidPaletteIndex`] if `index` is not a
    /// palette ordinal
    pub fn set_color(&mut self, index: usize, color: Color) -> Result<()> {
        let len = self.colors.len();
        let slot = self
            .colors
            .get_mut(index)
            .ok_or(EditorError::InvalidPaletteIndex { index, len })?;
        *slot = color;
        Ok(())
    }

    /// Re-sample every entry's color from the palette generator
    pub fn randomize_colors(&mut self) {
        for color in &mut self.colors {
            *color = Color::random(&mut self.rng);
        }
    }

    /// Replace every entry's color with its deterministic spectrum slot color
    pub fn apply_spectrum_colors(&mut self) {
        for (slot, color) in self.colors.iter_mut().enumerate() {
            *color = Color::spectrum(slot);
        }
    }
}
