//! Public markup behavior, checked through the crate's re-exports.

use mcformat::prelude::*;

#[test]
fn test_plain_text_passes_through() {
    assert_eq!(render("just words"), "just words");
}

#[test]
fn test_both_escape_characters_are_accepted() {
    assert_eq!(render("&cRed"), render("§cRed"));
    assert_eq!(render("&CRed"), render("&cRed"));
}

#[test]
fn test_color_then_format_nests() {
    assert_eq!(
        render("&9&nLink"),
        "<span style=\"color: #5555FF\"><span style=\"text-decoration: underline;\">\
         Link</span></span>"
    );
}

#[test]
fn test_reset_closes_open_regions() {
    assert_eq!(
        render("&6&lGold&rplain"),
        "<span style=\"color: #FFAA00\"><span style=\"font-weight: bold;\">Gold</span></span>\
         <span style=\"all:unset\">plain</span>"
    );
}

#[test]
fn test_legacy_reset_closes_five() {
    let options = RenderOptions {
        reset: ResetMode::Legacy,
        ..RenderOptions::default()
    };
    assert_eq!(render_with("", options), "</span>");
    assert_eq!(
        render_with("&aA&rB", options),
        "<span style=\"color: #55FF55\">A</span></span></span></span></span>\
         <span style=\"all:unset\">B</span>"
    );
}

#[test]
fn test_escaped_text_policy() {
    let options = RenderOptions {
        text: TextPolicy::Escaped,
        ..RenderOptions::default()
    };
    assert_eq!(
        render_with("&a<b> & 'x'", options),
        "<span style=\"color: #55FF55\">&lt;b&gt; &amp; &#39;x&#39;</span>"
    );
}

#[test]
fn test_unknown_codes_stay_literal() {
    assert_eq!(render("&zHi&"), "&zHi&");
}

#[test]
fn test_encoded_codes_render() {
    let source = format!("{}Magic", encode('k', Notation::Alternate));
    assert_eq!(
        render(&source),
        "<span style=\"animation: magic-text 1s infinite;\">Magic</span>"
    );
}
