use std::io::{self, BufRead, Write};

use super::display::{DisplayError, format_cell, render_scene};
use crate::LedView;
use crate::palette::Fade;
use crate::svg::write_svg;

/// Clears the screen and moves cursor to top-left.
const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

/// Intermediate colors shown by the fade preview.
const FADE_STEPS: u32 = 8;

/// Runs an interactive terminal interface for the LED row on stdin/stdout.
///
/// Allows toggling LEDs by index or by canvas coordinate and dumping the
/// current scene as SVG.
pub fn run_interactive_terminal(mut view: LedView) {
    log::info!("LED row simulator: {} LEDs", view.strip().len());
    let stdin = io::stdin();
    if let Err(e) = run_session(&mut view, stdin.lock(), io::stdout()) {
        eprintln!("Terminal session ended: {e}");
    }
}

/// Command loop over any input/output pair. Returns on `q` or end of input.
pub(crate) fn run_session(
    view: &mut LedView,
    mut input: impl BufRead,
    mut out: impl Write,
) -> Result<(), DisplayError> {
    redraw(&mut out, view)?;

    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some(command) = parts.first() else {
            continue;
        };

        match *command {
            "t" => match parts.get(1).map(|s| s.parse::<usize>()) {
                Some(Ok(index)) => match view.toggle(index) {
                    Ok(()) => redraw(&mut out, view)?,
                    Err(e) => writeln!(out, "❌ {e}")?,
                },
                Some(Err(e)) => writeln!(out, "Invalid index: {e}")?,
                None => writeln!(out, "Usage: t <index>")?,
            },
            "c" => {
                let coords = parts
                    .get(1)
                    .zip(parts.get(2))
                    .map(|(x, y)| (x.parse::<u32>(), y.parse::<u32>()));
                match coords {
                    Some((Ok(x), Ok(y))) => match view.click(x, y) {
                        Some(_) => redraw(&mut out, view)?,
                        None => writeln!(out, "No LED at ({x}, {y})")?,
                    },
                    Some(_) => writeln!(out, "Invalid coordinate")?,
                    None => writeln!(out, "Usage: c <x> <y>")?,
                }
            }
            "f" => match parts.get(1).map(|s| s.parse::<usize>()) {
                Some(Ok(index)) => fade_toggle(&mut out, view, index)?,
                Some(Err(e)) => writeln!(out, "Invalid index: {e}")?,
                None => writeln!(out, "Usage: f <index>")?,
            },
            "s" => write_svg(&mut out, view.scene())?,
            "r" => {
                view.reset();
                redraw(&mut out, view)?;
                writeln!(out, "\n🔄 Reset to all off")?;
            }
            "p" => redraw(&mut out, view)?,
            "q" => break,
            _ => writeln!(out, "Unknown command")?,
        }
    }
    Ok(())
}

/// Toggle `index` and print the fade from its old fill to its new one.
fn fade_toggle(out: &mut impl Write, view: &mut LedView, index: usize) -> Result<(), DisplayError> {
    if let Err(e) = view.toggle(index) {
        writeln!(out, "❌ {e}")?;
        return Ok(());
    }
    redraw(out, view)?;

    let now_on = view.strip().get(index) == Some(true);
    let palette = view.palette();
    let (from, to) = (palette.fill_for(!now_on), palette.fill_for(now_on));

    write!(out, "Fade LED {index}: ")?;
    for color in Fade::new(from, to, FADE_STEPS).chain(std::iter::once(to)) {
        write!(out, "{}", format_cell(color))?;
    }
    writeln!(out)?;
    Ok(())
}

/// Draws the complete interface: help text, LED row and status line.
fn redraw(out: &mut impl Write, view: &LedView) -> Result<(), DisplayError> {
    write!(out, "{CLEAR_SCREEN}")?;
    writeln!(out, "💡 Virtual LED Display")?;
    writeln!(out)?;
    writeln!(
        out,
        "Commands: t <index> | c <x> <y> | f <index> (fade) | s (svg) | r (reset) | p (refresh) | q (quit)"
    )?;
    writeln!(out)?;
    render_scene(out, view.scene())?;
    let strip = view.strip();
    writeln!(
        out,
        "LEDs: {:02} | On: {:02} | Canvas: {}x{}",
        strip.len(),
        strip.count_on(),
        view.scene().width(),
        view.scene().height()
    )?;
    Ok(())
}
