pub mod button;
pub mod unstyled_button;
pub mod unstyled_link;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use unstyled_button::{render_request, UnstyledButton};
pub use unstyled_link::{link_view, UnstyledLink};
