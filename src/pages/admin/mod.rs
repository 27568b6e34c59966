pub mod admins;
pub mod applications;
pub mod blogs;
pub mod client_testimonials;
pub mod contacts;
pub mod dashboard;
pub mod jobs;
pub mod partners;
pub mod team;
pub mod team_testimonials;
