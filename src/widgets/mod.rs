// Reusable UI widgets

pub mod chips;
pub mod footer;
pub mod header;
pub mod text_input;
pub mod toast;

pub use chips::{ChipRow, ChipRowState};
pub use footer::Footer;
pub use header::Header;
pub use text_input::{TextInputWidget, TextInputWidgetExt};
pub use toast::{Toast, ToastManager, ToastVariant, ToastWidget};
