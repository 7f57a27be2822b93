//! Unit tests for devnanny modules
//!
//! These tests cover individual components against temporary directories;
//! nothing touches the real working tree.

mod test_hooks;
