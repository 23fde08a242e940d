// Reusable components live here.

pub mod category_picker;
pub mod char_counter;
pub mod loading_spinner;
pub mod toast;
