/// Outcome of a single reveal step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The displayed prefix grew and more characters remain.
    Advanced,
    /// The full target is displayed. No further step changes anything.
    Finished,
}

/// Character-by-character reveal of a fixed target string.
///
/// The counter starts at 0. Each step displays the prefix whose length equals
/// the counter and then increments it. Once the counter passes the target
/// length the reveal is finished and further steps are no-ops.
///
/// Lengths are counted in `char`s, so a prefix never splits a multi-byte glyph.
#[derive(Clone, Debug)]
pub struct TextReveal {
    target: String,
    /// Byte offset of the end of each prefix: `boundaries[k]` ends the prefix
    /// of length `k`. Always has `char_len + 1` entries.
    boundaries: Vec<usize>,
    counter: usize,
    revealed: usize,
}

impl TextReveal {
    pub fn new(target: impl Into<String>) -> Self {
        let target = target.into();
        let boundaries = std::iter::once(0)
            .chain(target.char_indices().map(|(i, c)| i + c.len_utf8()))
            .collect();
        Self {
            target,
            boundaries,
            counter: 0,
            revealed: 0,
        }
    }

    /// Apply one step. Returns whether characters remain afterwards.
    pub fn step(&mut self) -> StepOutcome {
        if self.counter <= self.char_len() {
            self.revealed = self.counter;
            self.counter += 1;
        }
        if self.is_finished() {
            StepOutcome::Finished
        } else {
            StepOutcome::Advanced
        }
    }

    /// The prefix currently on display.
    pub fn displayed(&self) -> &str {
        &self.target[..self.boundaries[self.revealed]]
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Number of characters currently on display.
    pub fn revealed_len(&self) -> usize {
        self.revealed
    }

    /// Length of the target in characters.
    pub fn char_len(&self) -> usize {
        self.boundaries.len() - 1
    }

    pub fn is_finished(&self) -> bool {
        self.counter > self.char_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_grows_one_char_per_step() {
        let mut reveal = TextReveal::new("OK");
        assert_eq!(reveal.displayed(), "");

        assert_eq!(reveal.step(), StepOutcome::Advanced);
        assert_eq!(reveal.displayed(), "");
        assert_eq!(reveal.step(), StepOutcome::Advanced);
        assert_eq!(reveal.displayed(), "O");
        assert_eq!(reveal.step(), StepOutcome::Finished);
        assert_eq!(reveal.displayed(), "OK");
        assert!(reveal.is_finished());
    }

    #[test]
    fn test_finished_reveal_is_idempotent() {
        let mut reveal = TextReveal::new("abc");
        while reveal.step() == StepOutcome::Advanced {}
        assert_eq!(reveal.displayed(), "abc");

        for _ in 0..5 {
            assert_eq!(reveal.step(), StepOutcome::Finished);
            assert_eq!(reveal.displayed(), "abc");
            assert_eq!(reveal.revealed_len(), 3);
        }
    }

    #[test]
    fn test_empty_target_finishes_on_first_step() {
        let mut reveal = TextReveal::new("");
        assert!(!reveal.is_finished());
        assert_eq!(reveal.step(), StepOutcome::Finished);
        assert_eq!(reveal.displayed(), "");
        assert_eq!(reveal.char_len(), 0);
    }

    #[test]
    fn test_prefix_respects_char_boundaries() {
        let mut reveal = TextReveal::new("BNB × SOL");
        let mut seen = Vec::new();
        loop {
            let outcome = reveal.step();
            seen.push(reveal.displayed().to_string());
            if outcome == StepOutcome::Finished {
                break;
            }
        }
        assert_eq!(reveal.char_len(), 9);
        assert_eq!(seen[5], "BNB ×");
        assert_eq!(seen.last().map(String::as_str), Some("BNB × SOL"));
    }

    #[test]
    fn test_revealed_len_is_monotonic_and_bounded() {
        let mut reveal = TextReveal::new("✅ Deployment scripts");
        let mut last = 0;
        for _ in 0..64 {
            reveal.step();
            assert!(reveal.revealed_len() >= last);
            assert!(reveal.revealed_len() <= reveal.char_len());
            last = reveal.revealed_len();
        }
        assert_eq!(reveal.displayed(), reveal.target());
    }
}
