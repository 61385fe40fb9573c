/// Number of LEDs in a strip created with [`LedStrip::default`].
pub const DEFAULT_LED_COUNT: usize = 10;

/// Error types for strip operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StripError {
    /// The index does not address an LED in the strip.
    #[error("LED index {index} out of range for strip of {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Ordered, fixed-length sequence of LED on/off states.
///
/// Index 0 is the leftmost LED. The length is fixed at creation;
/// [`toggled`](Self::toggled) returns a new strip and never changes the
/// length, so two strips can be compared with `==` to detect a change.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LedStrip {
    states: Vec<bool>,
}

impl Default for LedStrip {
    fn default() -> Self {
        Self::new(DEFAULT_LED_COUNT)
    }
}

impl LedStrip {
    /// Creates a strip of `count` LEDs, all off.
    pub fn new(count: usize) -> Self {
        Self {
            states: vec![false; count],
        }
    }

    /// Creates a strip from explicit states.
    pub fn from_states(states: impl Into<Vec<bool>>) -> Self {
        Self {
            states: states.into(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// State of the LED at `index`, or `None` past the end.
    #[inline]
    pub fn get(&self, index: usize) -> Option<bool> {
        self.states.get(index).copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[bool] {
        &self.states
    }

    /// Iterate over states in display order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = bool> + '_ {
        self.states.iter().copied()
    }

    /// Number of LEDs currently on.
    pub fn count_on(&self) -> usize {
        self.states.iter().filter(|on| **on).count()
    }

    /// Returns a copy of this strip with the LED at `index` flipped.
    ///
    /// `self` is left untouched. An out-of-range index is rejected; the
    /// strip is never extended.
    pub fn toggled(&self, index: usize) -> Result<Self, StripError> {
        if index >= self.len() {
            return Err(StripError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        let mut states = self.states.clone();
        states[index] = !states[index];
        Ok(Self { states })
    }

    /// Indices whose state differs between `self` and `other`.
    ///
    /// Only the overlapping prefix is compared; strips of one session always
    /// share a length.
    pub fn changed_indices(&self, other: &Self) -> Vec<usize> {
        self.iter()
            .zip(other.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i)
            .collect()
    }
}

impl From<Vec<bool>> for LedStrip {
    fn from(states: Vec<bool>) -> Self {
        Self { states }
    }
}
