use crate::calc::DateMath;
use crate::data::ColorPreset;
use chrono::NaiveDateTime;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormField {
    #[default]
    Title,
    Description,
    Color,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Color,
            FormField::Color => FormField::Title,
        }
    }

    fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Color,
            FormField::Description => FormField::Title,
            FormField::Color => FormField::Description,
        }
    }
}

/// Controlled inputs of the create form. Discarded whenever the modal closes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventForm {
    pub title: String,
    pub description: String,
    pub color: ColorPreset,
    pub focus: FormField,
}

impl EventForm {
    pub fn can_submit(&self) -> bool {
        !self.title.is_empty()
    }

    pub fn input_char(&mut self, c: char) {
        match self.focus {
            FormField::Title => self.title.push(c),
            FormField::Description => self.description.push(c),
            FormField::Color => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focus {
            FormField::Title => {
                self.title.pop();
            }
            FormField::Description => {
                self.description.pop();
            }
            FormField::Color => {}
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn next_color(&mut self) {
        self.color = self.color.next();
    }

    pub fn prev_color(&mut self) {
        self.color = self.color.prev();
    }

    pub fn description(&self) -> Option<&str> {
        Some(self.description.as_str()).filter(|d| !d.is_empty())
    }
}

/// Human readable `start – end` shown at the top of the modal.
pub fn format_range(start: NaiveDateTime, end: NaiveDateTime, math: &dyn DateMath) -> String {
    if start.date() == end.date() {
        format!(
            "{}, {} – {}",
            math.format(start, "%a, %b %d %Y"),
            math.format(start, "%H:%M"),
            math.format(end, "%H:%M")
        )
    } else {
        format!(
            "{} – {}",
            math.format(start, "%a, %b %d %Y %H:%M"),
            math.format(end, "%a, %b %d %Y %H:%M")
        )
    }
}
