#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use virtual_led_display::LedView;
    use virtual_led_display::strip::DEFAULT_LED_COUNT;

    let count = match std::env::args().nth(1).map(|arg| arg.parse::<usize>()) {
        Some(Ok(count)) => count,
        Some(Err(e)) => {
            eprintln!("Invalid LED count: {e}");
            std::process::exit(2);
        }
        None => DEFAULT_LED_COUNT,
    };
    let view = match LedView::new(count) {
        Ok(view) => view,
        Err(e) => {
            eprintln!("Cannot create LED row: {e}");
            std::process::exit(2);
        }
    };
    virtual_led_display::mock::run_interactive_terminal(view);
}

// The browser entry point lives in the library (`web::start`).
#[cfg(target_arch = "wasm32")]
fn main() {}
