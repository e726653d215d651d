pub mod content;
pub mod cool_stuff;
pub mod experiences;
pub mod home;
pub mod projects;
pub mod skills;
pub mod system;
