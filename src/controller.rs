use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use chrono::NaiveDate;
use tracing::{debug, info, warn};
use crate::daterange::{Calendar, DateRange, PresetCatalog, ResolvedRange};
use crate::error::PickerError;

pub trait DateRangeDelegate {
    fn date_range_changed(&mut self, date_range: &DateRange);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    Idle,
    Editing,
}

/// Controller behind the expanded popover: holds the current range while
/// the popover is open and reports every settled edit to its delegate.
pub struct PickerController {
    presets: PresetCatalog,
    calendar: Rc<dyn Calendar>,
    date_range: DateRange,
    state: EditState,
    delegate: Option<Weak<RefCell<dyn DateRangeDelegate>>>,
}

impl PickerController {
    pub fn new(date_range: DateRange, presets: PresetCatalog, calendar: Rc<dyn Calendar>) -> Self {
        PickerController {
            presets,
            calendar,
            date_range,
            state: EditState::Idle,
            delegate: None,
        }
    }

    /// Registers the delegate without keeping it alive.
    pub fn set_delegate<D: DateRangeDelegate + 'static>(&mut self, delegate: &Rc<RefCell<D>>) {
        let delegate: Weak<RefCell<D>> = Rc::downgrade(delegate);
        self.delegate = Some(delegate);
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn is_editing(&self) -> bool {
        self.state == EditState::Editing
    }

    pub fn date_range(&self) -> &DateRange {
        &self.date_range
    }

    pub fn presets(&self) -> &PresetCatalog {
        &self.presets
    }

    pub fn calendar(&self) -> &dyn Calendar {
        &*self.calendar
    }

    /// Menu index for the current range; 0 ("Custom") when no preset matches.
    pub fn selected_preset(&self) -> usize {
        self.presets.selected_index(&self.date_range)
    }

    pub fn bounds(&self) -> ResolvedRange {
        self.date_range.resolve(&*self.calendar)
            .unwrap_or_else(|| ResolvedRange::single(self.calendar.today()))
    }

    pub fn start_date(&self) -> NaiveDate {
        self.bounds().start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.bounds().end_date
    }

    pub fn open(&mut self) {
        if self.is_editing() {
            return;
        }
        info!(range = %self.date_range, "date range popover opened");
        self.state = EditState::Editing;
    }

    pub fn close(&mut self) {
        if !self.is_editing() {
            return;
        }
        info!(range = %self.date_range, "date range popover closed");
        self.state = EditState::Idle;
    }

    pub fn set_start_date(&mut self, start_date: NaiveDate) -> Result<DateRange, PickerError> {
        self.ensure_editing()?;
        let end_date = self.end_date();
        Ok(self.apply(DateRange::Custom(start_date, end_date)))
    }

    pub fn set_end_date(&mut self, end_date: NaiveDate) -> Result<DateRange, PickerError> {
        self.ensure_editing()?;
        let start_date = self.start_date();
        Ok(self.apply(DateRange::Custom(start_date, end_date)))
    }

    pub fn select_preset(&mut self, index: usize) -> Result<DateRange, PickerError> {
        self.ensure_editing()?;
        let preset = *self.presets.get(index)
            .ok_or(PickerError::PresetOutOfRange { index, len: self.presets.len() })?;
        // the placeholder and separators keep the dates already shown
        let date_range = if preset.is_custom() || !preset.is_selectable() {
            DateRange::from(self.bounds())
        } else {
            preset
        };
        Ok(self.apply(date_range))
    }

    /// Replaces the current range without notifying the delegate.
    pub fn sync_range(&mut self, date_range: DateRange) {
        debug!(range = %date_range, "synced date range from view");
        self.date_range = date_range;
    }

    fn ensure_editing(&self) -> Result<(), PickerError> {
        if self.is_editing() {
            Ok(())
        } else {
            warn!("rejected date range edit while the popover is closed");
            Err(PickerError::NotEditing)
        }
    }

    fn apply(&mut self, date_range: DateRange) -> DateRange {
        self.date_range = date_range;
        let bounds = self.bounds();
        debug!(
            range = %self.date_range,
            start = %bounds.start_date,
            end = %bounds.end_date,
            selected = self.selected_preset(),
            "date range changed"
        );
        self.notify();
        self.date_range
    }

    fn notify(&self) {
        let Some(delegate) = self.delegate.as_ref().and_then(Weak::upgrade) else {
            return;
        };
        delegate.borrow_mut().date_range_changed(&self.date_range);
    }
}

impl fmt::Debug for PickerController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerController")
            .field("presets", &self.presets)
            .field("date_range", &self.date_range)
            .field("state", &self.state)
            .field("has_delegate", &self.delegate.is_some())
            .finish()
    }
}
