#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn load_is_none_without_browser() {
    assert!(load("erms-theme").is_none());
}

#[test]
fn save_is_noop_but_callable() {
    save("erms-theme", "dark");
    assert!(load("erms-theme").is_none());
}
