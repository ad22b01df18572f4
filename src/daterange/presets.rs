use chrono::NaiveDate;
use crate::error::ConfigError;
use super::types::{CalendarUnit, DateRange};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuItem {
    Item(String),
    Separator,
}

impl From<&DateRange> for MenuItem {
    fn from(range: &DateRange) -> Self {
        match range {
            DateRange::Custom(..) | DateRange::PastDays(_) | DateRange::CalendarUnit(..) => {
                MenuItem::Item(range.title())
            }
            DateRange::None => MenuItem::Separator,
        }
    }
}

/// Ordered preset ranges offered in the picker menu.
///
/// The first entry is always a `Custom` placeholder, which doubles as the
/// selection for ranges that match no preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetCatalog {
    presets: Vec<DateRange>,
}

impl PresetCatalog {
    pub fn standard(today: NaiveDate) -> Self {
        PresetCatalog {
            presets: vec![
                DateRange::Custom(today, today),
                DateRange::None,
                DateRange::PastDays(7),
                DateRange::PastDays(15),
                DateRange::PastDays(30),
                DateRange::PastDays(90),
                DateRange::PastDays(365),
                DateRange::None,
                DateRange::this(CalendarUnit::WeekOfYear),
                DateRange::this(CalendarUnit::Month),
                DateRange::this(CalendarUnit::Quarter),
                DateRange::this(CalendarUnit::Year),
            ],
        }
    }

    pub fn try_new(presets: Vec<DateRange>) -> Result<Self, ConfigError> {
        match presets.first() {
            None => return Err(ConfigError::EmptyCatalog),
            Some(DateRange::Custom(..)) => {}
            Some(other) => {
                return Err(ConfigError::InvalidPreset {
                    index: 0,
                    reason: format!("expected a Custom placeholder, found '{other:?}'"),
                });
            }
        }
        if let Some(index) = presets.iter().position(|preset| *preset == DateRange::PastDays(0)) {
            return Err(ConfigError::InvalidPreset {
                index,
                reason: "PastDays needs at least one day".to_string(),
            });
        }
        Ok(PresetCatalog { presets })
    }

    pub fn presets(&self) -> &[DateRange] {
        &self.presets
    }

    pub fn get(&self, index: usize) -> Option<&DateRange> {
        self.presets.get(index)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Index of the first preset equal to `range`. Separators never match.
    pub fn match_preset(&self, range: &DateRange) -> Option<usize> {
        if !range.is_selectable() {
            return None;
        }
        self.presets.iter()
            .position(|preset| preset.is_selectable() && preset == range)
    }

    pub fn selected_index(&self, range: &DateRange) -> usize {
        self.match_preset(range).unwrap_or(0)
    }

    pub fn menu_items(&self) -> Vec<MenuItem> {
        self.presets.iter().map(MenuItem::from).collect()
    }
}
