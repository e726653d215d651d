pub mod admin_gate;
pub mod content;
pub mod cool_stuff;
pub mod experiences;
pub mod extractors;
pub mod projects;
pub mod skills;
