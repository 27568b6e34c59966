pub mod admin;
pub mod blog_post;
pub mod blogs;
pub mod career;
pub mod home;
pub mod login;
pub mod not_found;
pub mod services;
