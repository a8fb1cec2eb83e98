pub mod captures;
pub mod clipboard;
