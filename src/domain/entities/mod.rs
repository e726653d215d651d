pub mod content;
pub mod cool_stuff;
pub mod experience;
pub mod option_fields;
pub mod principal;
pub mod project;
pub mod skill;
pub mod upload;
