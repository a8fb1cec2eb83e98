mod hotkey_io_tests;
mod support;
