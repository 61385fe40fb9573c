//! Browser front-end: Leptos CSR component drawing the LED row as inline SVG.

use leptos::prelude::*;

use crate::LedView;
use crate::strip::DEFAULT_LED_COUNT;

/// Toggle one LED held in a signal; rejected indices are logged and dropped.
fn toggle_led(leds: RwSignal<LedView>, index: usize) {
    leds.update(|view| {
        if let Err(e) = view.toggle(index) {
            log::warn!("click ignored: {e}");
        }
    });
}

/// LED row rendered as an `<svg>` of rectangles.
///
/// The view lives in a signal. Every change rebuilds all `<rect>` elements
/// from the scene; clicking a rectangle toggles its LED. A `count` that does
/// not fit on the canvas falls back to the default row.
#[component]
pub fn LedDisplayApp(#[prop(default = DEFAULT_LED_COUNT)] count: usize) -> impl IntoView {
    let initial = LedView::new(count).unwrap_or_else(|e| {
        log::warn!("{e}, using {DEFAULT_LED_COUNT} LEDs");
        LedView::default()
    });
    let leds = RwSignal::new(initial);
    let toggle = move |index: usize| toggle_led(leds, index);

    let width = move || leds.with(|view| view.scene().width().to_string());
    let height = move || leds.with(|view| view.scene().height().to_string());
    let status = move || {
        leds.with(|view| {
            format!(
                "{} of {} on",
                view.strip().count_on(),
                view.strip().len()
            )
        })
    };

    let rects = move || {
        leds.with(|view| view.scene().nodes().to_vec())
            .into_iter()
            .map(|node| {
                view! {
                    <rect
                        data-led=node.led.to_string()
                        x=node.x.to_string()
                        y=node.y.to_string()
                        width=node.width.to_string()
                        height=node.height.to_string()
                        fill=node.fill.to_string()
                        stroke=node.stroke.to_string()
                        stroke-width=node.stroke_width.to_string()
                        on:click=move |_| toggle(node.led)
                    />
                }
            })
            .collect_view()
    };

    view! {
        <div>
            <h1>"Virtual LED Display"</h1>
            <svg width=width height=height>
                {rects}
            </svg>
            <p>{status}</p>
        </div>
    }
}

/// WASM entry point: installs panic and log hooks and mounts the app.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    log::info!("mounting LED display");

    leptos::mount::mount_to_body(|| view! { <LedDisplayApp/> });
}
