use serde::{Deserialize, Serialize};

/// Half-open character interval `[start, end)` over document offsets.
/// Produced by the dictionary matcher; consumed read-only here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
}

impl TextSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A span must cover at least one character. Invalid spans are a
    /// collaborator-contract violation; the consumer fails fast on them.
    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }

    pub fn width(&self) -> usize {
        self.end.saturating_sub(self.start)
    }
}

impl std::fmt::Display for TextSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
