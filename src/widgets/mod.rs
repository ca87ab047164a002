//! Built-in widgets.

pub mod border;
pub mod label;
pub mod list_box;
pub mod progress;

pub use border::Border;
pub use label::Label;
pub use list_box::ListBox;
pub use progress::Progress;
