// File: crates/plot-core/tests/theme.rs
// Purpose: Theme preset lookup.

use plot_core::theme;

#[test]
fn find_is_case_insensitive() {
    assert_eq!(theme::find("LIGHT").name, "light");
    assert_eq!(theme::find("dark").name, "dark");
}

#[test]
fn unknown_name_falls_back_to_dark() {
    assert_eq!(theme::find("no-such-theme").name, "dark");
}

#[test]
fn presets_have_unique_names() {
    let presets = theme::presets();
    assert!(presets.len() >= 2);
    for (i, a) in presets.iter().enumerate() {
        for b in presets.iter().skip(i + 1) {
            assert_ne!(a.name, b.name);
        }
    }
}
