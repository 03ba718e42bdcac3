mod contact_form;
mod mouse;
mod normal_mode;

pub use contact_form::handle_contact_form;
pub use mouse::handle_mouse;
pub use normal_mode::handle_normal_mode;
