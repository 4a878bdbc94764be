use super::*;

#[test]
fn breakpoint_is_inclusive_on_the_wide_side() {
    assert!(is_wide(WIDE_BREAKPOINT_PX));
    assert!(is_wide(1440.0));
}

#[test]
fn narrow_widths_use_stacked_layout() {
    assert!(!is_wide(WIDE_BREAKPOINT_PX - 1.0));
    assert!(!is_wide(480.0));
}

#[test]
fn ssr_default_width_renders_dual_pane() {
    assert!(is_wide(current_width()));
}
