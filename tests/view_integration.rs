#![cfg(not(target_arch = "wasm32"))]

use test_case::test_case;
use virtual_led_display::mock::{ScriptedClicks, SvgDisplay};
use virtual_led_display::palette::Rgb;
use virtual_led_display::{LedDisplay, LedView, StripError};

/// Helper: default ten-LED view plus an empty script.
fn setup() -> (LedView, ScriptedClicks) {
    (LedView::default(), ScriptedClicks::new())
}

/// Helper: x offsets of every rectangle filled with `color`.
fn xs_with_fill(view: &LedView, color: Rgb) -> Vec<u32> {
    view.scene()
        .nodes()
        .iter()
        .filter(|n| n.fill == color)
        .map(|n| n.x)
        .collect()
}

/// Helper: advance the script one tick, expecting success.
fn tick(view: &mut LedView, clicks: &mut ScriptedClicks) {
    clicks
        .tick(view)
        .expect("pending batch")
        .expect("indices in range");
}

// ---------------------------------------------------------------
// Mount: ten red rectangles at a 30-unit pitch
// ---------------------------------------------------------------

#[test]
fn mount_draws_ten_red_leds() {
    let (view, _) = setup();

    assert_eq!(
        xs_with_fill(&view, Rgb::RED),
        vec![0, 30, 60, 90, 120, 150, 180, 210, 240, 270]
    );
    assert!(xs_with_fill(&view, Rgb::GREEN).is_empty());
    assert_eq!(view.scene().width(), 300);
}

// ---------------------------------------------------------------
// Toggle: single LED goes green, then back
// ---------------------------------------------------------------

#[test]
fn toggle_three_turns_x90_green() {
    let (mut view, mut clicks) = setup();
    clicks.push_script("3.").expect("valid script");

    tick(&mut view, &mut clicks);

    assert_eq!(xs_with_fill(&view, Rgb::GREEN), vec![90]);
    assert_eq!(xs_with_fill(&view, Rgb::RED).len(), 9);
}

#[test]
fn toggle_three_twice_returns_to_red() {
    let (mut view, mut clicks) = setup();
    clicks.push_script("3. 3.").expect("valid script");

    tick(&mut view, &mut clicks);
    tick(&mut view, &mut clicks);

    assert!(xs_with_fill(&view, Rgb::GREEN).is_empty());
    assert_eq!(xs_with_fill(&view, Rgb::RED).len(), 10);
}

#[test_case("0 9.", vec![0, 270]; "both ends")]
#[test_case("2 4 6.", vec![60, 120, 180]; "evens")]
#[test_case("5 5.", vec![]; "same index in one batch cancels")]
fn batch_toggles(script: &str, green: Vec<u32>) {
    let (mut view, mut clicks) = setup();
    clicks.push_script(script).expect("valid script");

    tick(&mut view, &mut clicks);

    assert_eq!(xs_with_fill(&view, Rgb::GREEN), green);
}

// ---------------------------------------------------------------
// Out of range: rejected, nothing grows
// ---------------------------------------------------------------

#[test]
fn toggle_ten_is_rejected() {
    let (mut view, _) = setup();

    assert_eq!(
        view.toggle(10),
        Err(StripError::IndexOutOfRange { index: 10, len: 10 })
    );
    assert_eq!(view.strip().len(), 10);
    assert_eq!(view.scene().len(), 10);
    assert_eq!(view.strip().count_on(), 0);
}

// ---------------------------------------------------------------
// Clicks: hit-testing the drawn scene
// ---------------------------------------------------------------

#[test]
fn click_toggles_led_under_pointer() {
    let (mut view, _) = setup();

    assert_eq!(view.click(100, 20), Some(3));
    assert_eq!(xs_with_fill(&view, Rgb::GREEN), vec![90]);

    assert_eq!(view.click(100, 20), Some(3));
    assert!(xs_with_fill(&view, Rgb::GREEN).is_empty());
}

#[test]
fn click_between_leds_does_nothing() {
    let (mut view, _) = setup();
    let redraws = view.redraws();

    assert_eq!(view.click(115, 20), None);

    assert_eq!(view.strip().count_on(), 0);
    assert_eq!(view.redraws(), redraws);
}

// ---------------------------------------------------------------
// Output: SVG display reflects each state
// ---------------------------------------------------------------

#[test]
fn svg_display_tracks_toggles() {
    let (mut view, mut clicks) = setup();
    let mut display = SvgDisplay::new(Vec::new());
    clicks.push_script("1. 1.").expect("valid script");

    display.show(view.scene()).expect("write to buffer");
    clicks.drain(&mut view, |view, result| {
        result.expect("indices in range");
        display.show(view.scene()).expect("write to buffer");
    });

    let output = String::from_utf8(display.into_inner()).expect("valid UTF-8");
    let docs: Vec<&str> = output.split("</svg>").filter(|d| !d.trim().is_empty()).collect();
    assert_eq!(docs.len(), 3);
    assert_eq!(docs[0].matches("#008000").count(), 0);
    assert!(docs[1].contains(r##"data-led="1" x="30" y="0" width="20" height="40" fill="#008000""##));
    assert_eq!(docs[2].matches("#008000").count(), 0);
    for doc in docs {
        assert_eq!(doc.matches("<rect ").count(), 10, "no stale nodes");
    }
}
