use chrono::{Duration, NaiveDateTime};

/// Block color used when an event carries none of its own.
pub const DEFAULT_EVENT_COLOR: &str = "#4285f4";

#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub color: Option<String>,
    pub description: Option<String>,
}

impl Event {
    pub fn color_or_default(&self) -> &str {
        self.color.as_deref().unwrap_or(DEFAULT_EVENT_COLOR)
    }

    /// Half-open overlap with `[from, to)`. A zero-length event counts as
    /// occupying its start instant.
    pub fn overlaps(&self, from: NaiveDateTime, to: NaiveDateTime) -> bool {
        if self.end <= self.start {
            return self.start >= from && self.start < to;
        }
        self.start < to && self.end > from
    }
}

/// The four colors offered by the event form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorPreset {
    #[default]
    Blue,
    Green,
    Red,
    Yellow,
}

impl ColorPreset {
    pub const ALL: [ColorPreset; 4] = [
        ColorPreset::Blue,
        ColorPreset::Green,
        ColorPreset::Red,
        ColorPreset::Yellow,
    ];

    pub fn hex(self) -> &'static str {
        match self {
            ColorPreset::Blue => DEFAULT_EVENT_COLOR,
            ColorPreset::Green => "#0f9d58",
            ColorPreset::Red => "#db4437",
            ColorPreset::Yellow => "#f4b400",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ColorPreset::Blue => "Blue",
            ColorPreset::Green => "Green",
            ColorPreset::Red => "Red",
            ColorPreset::Yellow => "Yellow",
        }
    }

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// The page's event collection. Insertion order is kept; views sort by time
/// when they lay events out.
#[derive(Default, Debug, Clone)]
pub struct EventData {
    pub events: Vec<Event>,
}

impl EventData {
    /// The three sample events shown on first render, relative to `now`.
    pub fn seeded(now: NaiveDateTime) -> Self {
        let seed = |n: u32, title: &str, offset: Duration, length: Duration| Event {
            id: format!("seed-{n}"),
            title: title.to_string(),
            start: now + offset,
            end: now + offset + length,
            color: None,
            description: None,
        };
        EventData {
            events: vec![
                seed(1, "Board meeting", Duration::zero(), Duration::hours(1)),
                seed(2, "Lunch", Duration::hours(24), Duration::hours(1)),
                seed(3, "Design review", Duration::hours(48), Duration::minutes(90)),
            ],
        }
    }

    pub fn add(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Removes the event with `id`. Returns false when nothing matched.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        self.events.len() != before
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Time-based identifier: epoch milliseconds of `now`, bumped until it
    /// does not collide with an existing id.
    pub fn next_id(&self, now: NaiveDateTime) -> String {
        let mut millis = now.and_utc().timestamp_millis();
        loop {
            let id = millis.to_string();
            if !self.contains_id(&id) {
                return id;
            }
            millis += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}
