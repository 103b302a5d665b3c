pub mod clipboard;
pub mod console;
