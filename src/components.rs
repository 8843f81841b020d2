pub mod button;
pub mod fancy_button;
pub mod hello_world;
pub mod progress;
