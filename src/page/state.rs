use crate::calc::Slot;
use crate::data::{Event, EventData, ViewMode, DEFAULT_EVENT_COLOR};
use chrono::NaiveDateTime;
use tracing::debug;

/// What the event modal is showing, if anything.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ModalState {
    #[default]
    Closed,
    /// Creating a new event over an empty slot.
    Creating { slot: Slot },
    /// Inspecting an existing event, with the option to delete it.
    Viewing { event: Event },
}

/// Canonical state of the calendar page. Every user action is one of the
/// transitions below; rendering only reads from here.
#[derive(Clone, Debug)]
pub struct AppState {
    pub events: EventData,
    pub modal: ModalState,
    pub view: ViewMode,
}

impl AppState {
    pub fn new(events: EventData, view: ViewMode) -> Self {
        AppState {
            events,
            modal: ModalState::Closed,
            view,
        }
    }

    pub fn seeded(now: NaiveDateTime, view: ViewMode) -> Self {
        Self::new(EventData::seeded(now), view)
    }

    pub fn is_modal_open(&self) -> bool {
        self.modal != ModalState::Closed
    }

    pub fn pending_slot(&self) -> Option<Slot> {
        match &self.modal {
            ModalState::Creating { slot } => Some(*slot),
            _ => None,
        }
    }

    pub fn selected_event(&self) -> Option<&Event> {
        match &self.modal {
            ModalState::Viewing { event } => Some(event),
            _ => None,
        }
    }

    /// Records a pending slot and opens the modal in create mode.
    pub fn select_slot(&mut self, slot: Slot) {
        debug!(start = %slot.start, end = %slot.end, "slot selected");
        self.modal = ModalState::Creating { slot };
    }

    /// Opens the modal on a copy of `event`.
    pub fn select_event(&mut self, event: Event) {
        debug!(id = %event.id, title = %event.title, "event selected");
        self.modal = ModalState::Viewing { event };
    }

    /// Appends an event over the pending slot and closes the modal.
    ///
    /// Returns the new id, or `None` without touching anything when there is
    /// no pending slot or the title is empty.
    pub fn create_event(
        &mut self,
        title: &str,
        description: Option<&str>,
        color: Option<&str>,
        now: NaiveDateTime,
    ) -> Option<String> {
        let Some(slot) = self.pending_slot() else {
            debug!("create ignored: no pending slot");
            return None;
        };
        if title.is_empty() {
            debug!("create ignored: empty title");
            return None;
        }

        let id = self.events.next_id(now);
        let event = Event {
            id: id.clone(),
            title: title.to_string(),
            start: slot.start,
            end: slot.end,
            color: Some(color.unwrap_or(DEFAULT_EVENT_COLOR).to_string()),
            description: description
                .filter(|d| !d.is_empty())
                .map(str::to_string),
        };
        debug!(id = %event.id, title = %event.title, "event created");
        self.events.add(event);
        self.close_modal();
        Some(id)
    }

    /// Removes the event with `id` (if any) and closes the modal.
    pub fn delete_event(&mut self, id: &str) -> bool {
        let removed = self.events.remove(id);
        if removed {
            debug!(id, "event deleted");
        } else {
            debug!(id, "delete ignored: no such event");
        }
        self.close_modal();
        removed
    }

    /// Hides the modal and forgets both the selected event and the pending slot.
    pub fn close_modal(&mut self) {
        self.modal = ModalState::Closed;
    }

    pub fn set_view(&mut self, view: ViewMode) {
        if self.view != view {
            debug!(from = ?self.view, to = ?view, "view changed");
        }
        self.view = view;
    }
}
