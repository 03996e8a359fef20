pub mod layout;
pub mod style;
pub mod text_input;

pub use layout::create_standard_layout;
pub use style::{
    disabled_border_style, disabled_text_style, focused_border_style, input_placeholder_style,
    input_text_style, unfocused_border_style,
};
pub use text_input::TextInput;
