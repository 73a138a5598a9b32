use crate::foundation::error::{LoopedError, LoopedResult};

/// Holes on a full round.
pub const HOLES: usize = 18;
/// Holes per side (front nine, back nine).
pub const NINE: usize = 9;

/// Stroke counts for an 18-hole round.
///
/// Index 0 is hole 1. A stored `0` means "not entered"; a literal zero-stroke hole is
/// indistinguishable from an unset one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScoreGrid {
    scores: [u32; HOLES],
}

/// Nine-hole and round totals. Always derived, never stored.
///
/// Widened to `u64` so that any combination of accepted cell values sums without overflow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct Aggregate {
    pub front_nine: u64,
    pub back_nine: u64,
    pub total: u64,
}

/// Result of a single cell edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreEdit {
    /// The cell now holds this value.
    Stored(u32),
    /// Input was not empty-or-digits (or the hole does not exist); nothing changed.
    Rejected,
}

impl ScoreGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_scores(scores: [u32; HOLES]) -> Self {
        Self { scores }
    }

    pub fn scores(&self) -> &[u32; HOLES] {
        &self.scores
    }

    pub fn get(&self, hole_index: usize) -> Option<u32> {
        self.scores.get(hole_index).copied()
    }

    /// Apply raw text input to one cell.
    ///
    /// Accepts `""` (stored as 0) or one or more ASCII digits. Anything else, including values
    /// that overflow `u32`, is rejected without touching the grid.
    pub fn set_score(&mut self, hole_index: usize, raw: &str) -> ScoreEdit {
        let Some(cell) = self.scores.get_mut(hole_index) else {
            return ScoreEdit::Rejected;
        };
        let Some(value) = parse_cell(raw) else {
            return ScoreEdit::Rejected;
        };
        *cell = value;
        ScoreEdit::Stored(value)
    }

    /// Builder-style variant of [`ScoreGrid::set_score`] that returns the updated grid, or the
    /// unchanged one when the input is rejected.
    pub fn with_score(mut self, hole_index: usize, raw: &str) -> Self {
        self.set_score(hole_index, raw);
        self
    }

    pub fn aggregate(&self) -> Aggregate {
        let front_nine = self.scores[..NINE].iter().copied().map(u64::from).sum();
        let back_nine = self.scores[NINE..].iter().copied().map(u64::from).sum();
        Aggregate {
            front_nine,
            back_nine,
            total: front_nine + back_nine,
        }
    }

    pub fn has_entries(&self) -> bool {
        self.scores.iter().any(|&s| s > 0)
    }

    /// Text shown for a cell: `-` when unset, otherwise the stroke count.
    pub fn display_cell(&self, hole_index: usize) -> String {
        match self.get(hole_index) {
            Some(0) | None => "-".to_string(),
            Some(v) => v.to_string(),
        }
    }
}

fn parse_cell(raw: &str) -> Option<u32> {
    if raw.is_empty() {
        return Some(0);
    }
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

impl TryFrom<Vec<u32>> for ScoreGrid {
    type Error = LoopedError;

    fn try_from(v: Vec<u32>) -> LoopedResult<Self> {
        let scores: [u32; HOLES] = v.try_into().map_err(|v: Vec<u32>| {
            LoopedError::validation(format!(
                "scorecard must have exactly {HOLES} holes, got {}",
                v.len()
            ))
        })?;
        Ok(Self { scores })
    }
}

impl serde::Serialize for ScoreGrid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.scores.as_slice().serialize(serializer)
    }
}

impl<'de> serde::Deserialize<'de> for ScoreGrid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let v = Vec::<u32>::deserialize(deserializer)?;
        Self::try_from(v).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/score/grid.rs"]
mod tests;
