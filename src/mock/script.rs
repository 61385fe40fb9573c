use std::collections::VecDeque;

use thiserror::Error;

use crate::LedView;
use crate::strip::StripError;

/// Error when parsing a toggle script.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid LED index: '{0}'")]
pub struct ParseError(String);

/// Scripted toggle input for driving a [`LedView`] without a user.
///
/// Holds batches of LED indices; each [`tick`](Self::tick) toggles one batch.
/// New script can be appended at any time.
#[derive(Debug, Clone, Default)]
pub struct ScriptedClicks {
    pending_batches: VecDeque<Vec<usize>>,
}

impl ScriptedClicks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and queue additional script.
    ///
    /// Format:
    /// - Indices are decimal numbers
    /// - Whitespace or commas separate indices in the same batch
    /// - Periods end a batch
    ///
    /// Examples:
    /// - `"3."` - Toggle LED 3, then tick
    /// - `"3 5."` - Toggle 3 and 5 in one tick
    /// - `"3. 3."` - Toggle 3, tick, toggle 3 again, tick
    ///
    /// On error nothing is queued.
    pub fn push_script(&mut self, script: &str) -> Result<(), ParseError> {
        let batches = parse_script(script)?;
        self.pending_batches.extend(batches);
        Ok(())
    }

    /// Number of batches not yet applied.
    #[inline]
    pub fn pending(&self) -> usize {
        self.pending_batches.len()
    }

    /// Apply the next pending batch to `view`.
    ///
    /// Returns `None` if nothing is pending. Toggles in a batch are applied
    /// in order; the first out-of-range index stops the batch.
    pub fn tick(&mut self, view: &mut LedView) -> Option<Result<(), StripError>> {
        let batch = self.pending_batches.pop_front()?;
        Some(batch.into_iter().try_for_each(|index| view.toggle(index)))
    }

    /// Apply all pending batches, calling `on_tick` after each one.
    pub fn drain<F>(&mut self, view: &mut LedView, mut on_tick: F)
    where
        F: FnMut(&LedView, Result<(), StripError>),
    {
        while let Some(result) = self.tick(view) {
            on_tick(view, result);
        }
    }
}

/// Parse a toggle script into batches of LED indices.
fn parse_script(script: &str) -> Result<Vec<Vec<usize>>, ParseError> {
    let mut batches: Vec<Vec<usize>> = vec![Vec::new()];

    for (i, segment) in script.split('.').enumerate() {
        if i > 0 {
            batches.push(Vec::new());
        }
        let tokens = segment
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty());
        for token in tokens {
            let index = token
                .parse::<usize>()
                .map_err(|_| ParseError(token.to_string()))?;
            if let Some(batch) = batches.last_mut() {
                batch.push(index);
            }
        }
    }

    batches.retain(|b| !b.is_empty());
    Ok(batches)
}
