pub mod form;
pub mod state;
pub mod style;

pub use form::{format_range, EventForm, FormField};
pub use state::{AppState, ModalState};
pub use style::{event_style, EventStyle, Rgb};
