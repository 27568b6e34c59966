pub mod admin_layout;
pub mod navbar;
pub mod route_guard;
pub mod toast;
