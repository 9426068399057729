//! HTML page handlers.

mod login;
mod not_found;

pub use login::{LoginTemplate, login_page_handler, login_submit_handler};
pub use not_found::not_found_handler;
