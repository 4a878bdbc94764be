use super::*;

#[test]
fn plain_hl7_message_passes_through_unchanged() {
    let msg = "MSH|^~\\&|ADT1|HOSPITAL|LAB||200708181126||ADT^A01|MSG01|P|2.4\nPID|1||123";
    assert_eq!(strip_markup(msg), msg);
}

#[test]
fn bare_less_than_is_not_a_tag() {
    assert_eq!(strip_markup("OBX|1|NM|X||5 < 10|"), "OBX|1|NM|X||5 < 10|");
    assert_eq!(strip_markup("a < b and c <= d"), "a < b and c <= d");
}

#[test]
fn script_block_is_dropped_with_content() {
    let input = "before<script>alert('x')</script>after";
    assert_eq!(strip_markup(input), "beforeafter");
}

#[test]
fn script_block_matching_is_case_insensitive() {
    let input = "a<SCRIPT src=\"x\">bad()</ScRiPt>b";
    assert_eq!(strip_markup(input), "ab");
}

#[test]
fn unclosed_script_drops_to_end() {
    let input = "keep<script>everything after is gone";
    assert_eq!(strip_markup(input), "keep");
}

#[test]
fn style_and_iframe_blocks_are_dropped() {
    assert_eq!(strip_markup("x<style>p{}</style>y"), "xy");
    assert_eq!(strip_markup("x<iframe src=\"evil\"></iframe>y"), "xy");
}

#[test]
fn other_tags_are_stripped_keeping_inner_text() {
    assert_eq!(strip_markup("<b>MSH|field</b>"), "MSH|field");
    assert_eq!(strip_markup("<div class=\"x\">text</div>"), "text");
    assert_eq!(strip_markup("<img src=\"x\" onerror=\"boom()\">rest"), "rest");
}

#[test]
fn comments_and_processing_instructions_are_stripped() {
    assert_eq!(strip_markup("a<!-- hidden -->b"), "ab");
    assert_eq!(strip_markup("<?xml version=\"1.0\"?>data"), "data");
}

#[test]
fn unterminated_tag_is_dropped() {
    assert_eq!(strip_markup("text<div unfinished"), "text");
}

#[test]
fn empty_input_stays_empty() {
    assert_eq!(strip_markup(""), "");
}
