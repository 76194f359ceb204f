//! Two-way binding between an instant-valued model field and a calendar
//! widget.
//!
//! The widget itself is external and sits behind [`CalendarWidget`].
//! [`DateTimePicker`] keeps the bound value and moves it in both directions:
//!
//! - model → widget through [`DateTimePicker::set_value`];
//! - widget → model through [`DateTimePicker::widget_changed`], which only
//!   propagates real changes. Subscribers registered with
//!   [`DateTimePicker::on_value_change`] hear about the new value
//!   immediately, while the optional `on_change`/`on_click` callbacks are
//!   queued and run by [`DateTimePicker::flush`] once the current update
//!   cycle has finished.

use std::collections::VecDeque;

use jiff::Timestamp;
use log::debug;

/// Where the picker toolbar is placed relative to the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolbarPlacement {
    #[default]
    Default,
    Top,
    Bottom,
}

/// Options forwarded to the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerOptions {
    /// Preselect the current time when the widget opens empty
    pub use_current: bool,
    pub show_clear: bool,
    pub show_close: bool,
    pub toolbar_placement: ToolbarPlacement,
}

impl PickerOptions {
    /// Options of the departure time field.
    pub fn departure() -> Self {
        Self {
            use_current: true,
            show_clear: true,
            show_close: true,
            toolbar_placement: ToolbarPlacement::Top,
        }
    }

    /// Options of the arrival time field.
    pub fn arrival() -> Self {
        Self {
            use_current: false,
            ..Self::departure()
        }
    }
}

impl Default for PickerOptions {
    fn default() -> Self {
        Self {
            use_current: true,
            show_clear: false,
            show_close: false,
            toolbar_placement: ToolbarPlacement::Default,
        }
    }
}

/// The calendar widget being driven.
pub trait CalendarWidget {
    /// Date currently selected in the widget.
    fn date(&self) -> Option<Timestamp>;

    /// Shows `date` as the selection.
    fn set_date(&mut self, date: Timestamp);

    /// Removes the selection.
    fn clear(&mut self);

    /// Applies display options.
    fn configure(&mut self, options: &PickerOptions);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Deferred {
    Change,
    Click,
}

type Callback = Box<dyn FnMut() + Send>;
type ValueListener = Box<dyn FnMut(Option<Timestamp>) + Send>;

/// Binds one instant-valued field to a calendar widget.
pub struct DateTimePicker<W> {
    widget: W,
    value: Option<Timestamp>,
    options: PickerOptions,
    listeners: Vec<ValueListener>,
    on_change: Option<Callback>,
    on_click: Option<Callback>,
    pending: VecDeque<Deferred>,
}

impl<W: CalendarWidget> DateTimePicker<W> {
    /// Wraps `widget` and applies `options` to it.
    pub fn new(mut widget: W, options: PickerOptions) -> Self {
        widget.configure(&options);
        Self {
            widget,
            value: None,
            options,
            listeners: Vec::new(),
            on_change: None,
            on_click: None,
            pending: VecDeque::new(),
        }
    }

    /// Callback run after the update cycle in which the user picked a new
    /// date.
    pub fn with_on_change(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Callback run after the update cycle in which the widget was clicked.
    pub fn with_on_click(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    /// Subscribes to bound-value changes coming from the widget.
    pub fn on_value_change(&mut self, listener: impl FnMut(Option<Timestamp>) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn value(&self) -> Option<Timestamp> {
        self.value
    }

    pub fn options(&self) -> &PickerOptions {
        &self.options
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// Replaces the options and re-applies them to the widget.
    pub fn set_options(&mut self, options: PickerOptions) {
        self.widget.configure(&options);
        self.options = options;
    }

    /// Model → widget. An empty model clears the widget only when it still
    /// shows an earlier date.
    pub fn set_value(&mut self, value: Option<Timestamp>) {
        self.value = value;
        match value {
            Some(date) => self.widget.set_date(date),
            None => {
                if self.widget.date().is_some() {
                    self.widget.clear();
                }
            }
        }
    }

    /// Widget → model. Returns whether the bound value changed.
    pub fn widget_changed(&mut self, date: Option<Timestamp>) -> bool {
        if date == self.value {
            return false;
        }

        debug!("Picker value changed to {date:?}");
        self.value = date;
        for listener in &mut self.listeners {
            listener(date);
        }
        self.pending.push_back(Deferred::Change);
        true
    }

    /// Records a click on the widget.
    pub fn clicked(&mut self) {
        self.pending.push_back(Deferred::Click);
    }

    /// Whether callbacks are waiting for [`DateTimePicker::flush`].
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Runs the queued callbacks in the order their events happened. Events
    /// without a registered callback are dropped.
    pub fn flush(&mut self) {
        while let Some(event) = self.pending.pop_front() {
            let callback = match event {
                Deferred::Change => self.on_change.as_mut(),
                Deferred::Click => self.on_click.as_mut(),
            };
            if let Some(callback) = callback {
                callback();
            }
        }
    }
}
