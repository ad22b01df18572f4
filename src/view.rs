use std::rc::Rc;
use chrono::NaiveDate;
use serde::{Serialize, Deserialize};
use tracing::{debug, warn};
use crate::controller::{DateRangeDelegate, PickerController};
use crate::daterange::{Calendar, DateRange, MenuItem, PresetCatalog};
use crate::error::PickerError;

pub const SIDE_BUTTON_WIDTH: f64 = 22.0;
// Keeps the segmented control from overflowing its bounds.
pub const UNUSED_CONTROL_WIDTH: f64 = 8.0;

pub const STEP_BACKWARD_LABEL: &str = "◀";
pub const STEP_FORWARD_LABEL: &str = "▶";

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateStyle {
    Short,
    #[default]
    Medium,
    Long,
    Full,
}

impl DateStyle {
    pub fn pattern(&self) -> &'static str {
        match self {
            DateStyle::Short => "%-m/%-d/%y",
            DateStyle::Medium => "%b %-d, %Y",
            DateStyle::Long => "%B %-d, %Y",
            DateStyle::Full => "%A, %B %-d, %Y",
        }
    }

    pub fn format(&self, date: NaiveDate) -> String {
        date.format(self.pattern()).to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    StepBackward,
    Expand,
    StepForward,
}

impl Segment {
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Segment::StepBackward),
            1 => Some(Segment::Expand),
            2 => Some(Segment::StepForward),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentLayout {
    pub widths: [f64; 3],
}

impl SegmentLayout {
    pub fn for_width(width: f64) -> Self {
        let label_width = (width - 2.0 * SIDE_BUTTON_WIDTH - UNUSED_CONTROL_WIDTH).max(0.0);
        SegmentLayout {
            widths: [SIDE_BUTTON_WIDTH, label_width, SIDE_BUTTON_WIDTH],
        }
    }
}

/// The compact control: a three-segment button showing the current range,
/// with the middle segment opening the expanded picker.
#[derive(Debug)]
pub struct DateRangePickerView {
    start_date: NaiveDate,
    end_date: NaiveDate,
    date_style: DateStyle,
    controller: PickerController,
}

impl DateRangePickerView {
    /// Starts out showing the last seven days.
    pub fn new(presets: PresetCatalog, calendar: Rc<dyn Calendar>) -> Self {
        let end_date = calendar.today();
        let start_date = calendar.add_days(end_date, -6).unwrap_or(end_date);
        let controller = PickerController::new(
            DateRange::Custom(start_date, end_date),
            presets,
            calendar,
        );
        DateRangePickerView {
            start_date,
            end_date,
            date_style: DateStyle::default(),
            controller,
        }
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    pub fn set_start_date(&mut self, start_date: NaiveDate) {
        self.start_date = start_date;
        self.sync_controller();
    }

    pub fn set_end_date(&mut self, end_date: NaiveDate) {
        self.end_date = end_date;
        self.sync_controller();
    }

    pub fn date_style(&self) -> DateStyle {
        self.date_style
    }

    pub fn set_date_style(&mut self, date_style: DateStyle) {
        self.date_style = date_style;
    }

    pub fn date_range_string(&self) -> String {
        format!(
            "{} - {}",
            self.date_style.format(self.start_date),
            self.date_style.format(self.end_date)
        )
    }

    pub fn segment_labels(&self) -> [String; 3] {
        [
            STEP_BACKWARD_LABEL.to_string(),
            self.date_range_string(),
            STEP_FORWARD_LABEL.to_string(),
        ]
    }

    pub fn layout(&self, width: f64) -> SegmentLayout {
        SegmentLayout::for_width(width)
    }

    pub fn controller(&self) -> &PickerController {
        &self.controller
    }

    pub fn set_delegate<D: DateRangeDelegate + 'static>(&mut self, delegate: &Rc<std::cell::RefCell<D>>) {
        self.controller.set_delegate(delegate);
    }

    pub fn segment_did_change(&mut self, segment: Segment) {
        match segment {
            Segment::StepBackward => self.step(-1),
            Segment::Expand => self.open_popover(),
            Segment::StepForward => self.step(1),
        }
    }

    /// Shifts both dates by the range length plus one so that consecutive
    /// ranges do not overlap.
    fn step(&mut self, direction: i64) {
        let span = self.end_date.signed_duration_since(self.start_date).num_days() + 1;
        let calendar = self.calendar();
        let shifted = calendar.add_days(self.start_date, direction * span)
            .zip(calendar.add_days(self.end_date, direction * span));
        let Some((start_date, end_date)) = shifted else {
            warn!(start = %self.start_date, end = %self.end_date, "cannot step date range past the calendar limits");
            return;
        };
        debug!(%start_date, %end_date, "stepped date range");
        self.start_date = start_date;
        self.end_date = end_date;
        self.sync_controller();
    }

    pub fn open_popover(&mut self) {
        self.controller.open();
    }

    pub fn close_popover(&mut self) {
        self.controller.close();
    }

    pub fn is_popover_open(&self) -> bool {
        self.controller.is_editing()
    }

    pub fn menu_items(&self) -> Vec<MenuItem> {
        self.controller.presets().menu_items()
    }

    pub fn selected_preset(&self) -> usize {
        self.controller.selected_preset()
    }

    pub fn edit_start_date(&mut self, start_date: NaiveDate) -> Result<DateRange, PickerError> {
        let date_range = self.controller.set_start_date(start_date)?;
        self.show_settled_range();
        Ok(date_range)
    }

    pub fn edit_end_date(&mut self, end_date: NaiveDate) -> Result<DateRange, PickerError> {
        let date_range = self.controller.set_end_date(end_date)?;
        self.show_settled_range();
        Ok(date_range)
    }

    pub fn select_preset(&mut self, index: usize) -> Result<DateRange, PickerError> {
        let date_range = self.controller.select_preset(index)?;
        self.show_settled_range();
        Ok(date_range)
    }

    fn calendar(&self) -> &dyn Calendar {
        self.controller.calendar()
    }

    fn show_settled_range(&mut self) {
        let bounds = self.controller.bounds();
        self.start_date = bounds.start_date;
        self.end_date = bounds.end_date;
    }

    fn sync_controller(&mut self) {
        self.controller.sync_range(DateRange::Custom(self.start_date, self.end_date));
    }
}
