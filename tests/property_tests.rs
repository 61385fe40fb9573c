//! Property tests for strip toggling and scene synchronization.
//!
//! Host only; proptest is not built for wasm32.

#![cfg(not(target_arch = "wasm32"))]

use proptest::prelude::*;
use virtual_led_display::palette::Rgb;
use virtual_led_display::render::Renderer;
use virtual_led_display::{LedStrip, LedView};

fn arb_strip() -> impl Strategy<Value = LedStrip> {
    proptest::collection::vec(any::<bool>(), 1..=64).prop_map(LedStrip::from)
}

fn arb_strip_and_index() -> impl Strategy<Value = (LedStrip, usize)> {
    arb_strip().prop_flat_map(|strip| {
        let len = strip.len();
        (Just(strip), 0..len)
    })
}

proptest! {
    /// A single toggle flips exactly the targeted LED.
    #[test]
    fn toggle_flips_only_target((strip, index) in arb_strip_and_index()) {
        let next = strip.toggled(index).unwrap();

        prop_assert_eq!(next.len(), strip.len());
        prop_assert_eq!(next.changed_indices(&strip), vec![index]);
    }

    /// Toggling the same index twice is the identity.
    #[test]
    fn toggle_is_involution((strip, index) in arb_strip_and_index()) {
        let back = strip.toggled(index).and_then(|s| s.toggled(index)).unwrap();
        prop_assert_eq!(back, strip);
    }

    /// Indices at or past the end are rejected without touching the strip.
    #[test]
    fn out_of_range_never_grows(strip in arb_strip(), extra in 0usize..1000) {
        let index = strip.len() + extra;
        prop_assert!(strip.toggled(index).is_err());
    }

    /// The scene holds one node per LED, green iff on, on a 30-unit pitch.
    #[test]
    fn scene_matches_strip(strip in arb_strip()) {
        let mut renderer = Renderer::default();
        let scene = renderer.render(&strip);

        prop_assert_eq!(scene.len(), strip.len());
        prop_assert_eq!(scene.width() as usize, strip.len() * 30);
        for (node, on) in scene.nodes().iter().zip(strip.iter()) {
            prop_assert_eq!(node.fill == Rgb::GREEN, on);
            prop_assert_eq!(node.x as usize, node.led * 30);
        }
    }

    /// After any sequence of toggles the view's scene reflects its strip.
    #[test]
    fn view_scene_never_stale(
        count in 1usize..=32,
        ops in proptest::collection::vec(0usize..40, 0..50),
    ) {
        let mut view = LedView::new(count).unwrap();
        for index in ops {
            let _ = view.toggle(index);
        }

        prop_assert_eq!(view.strip().len(), count);
        prop_assert_eq!(view.scene().len(), count);
        for (node, on) in view.scene().nodes().iter().zip(view.strip().iter()) {
            prop_assert_eq!(node.fill == Rgb::GREEN, on);
        }
    }
}
