//! Letter-by-letter feedback for a guess
//!
//! Each letter of a guess is classified against the solution as:
//! - Exact: right letter in the right position (`in_position`)
//! - Present: letter appears elsewhere in the solution (`in_solution` only)
//! - Absent: neither
//!
//! Two duplicate-letter rules are provided. [`FeedbackRule::Approximate`] is
//! the game's historical rule and the default: it looks only at letter counts,
//! never at which solution letters were already "used". For a letter that
//! occurs once in the solution but several times in the guess, every
//! non-exact occurrence is reported absent, even when no occurrence is exact.
//! [`FeedbackRule::Canonical`] is the usual two-pass rule that spends the
//! solution's letter budget on exact matches first, then left to right.

use super::Word;
use std::fmt;

/// Classification of one letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterHint {
    letter: char,
    position: usize,
    in_position: bool,
    in_solution: bool,
}

impl LetterHint {
    const fn exact(letter: char, position: usize) -> Self {
        Self {
            letter,
            position,
            in_position: true,
            in_solution: true,
        }
    }

    const fn present(letter: char, position: usize) -> Self {
        Self {
            letter,
            position,
            in_position: false,
            in_solution: true,
        }
    }

    const fn absent(letter: char, position: usize) -> Self {
        Self {
            letter,
            position,
            in_position: false,
            in_solution: false,
        }
    }

    #[inline]
    #[must_use]
    pub const fn letter(&self) -> char {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Letter sits at this exact index of the solution
    #[inline]
    #[must_use]
    pub const fn in_position(&self) -> bool {
        self.in_position
    }

    /// Letter is part of the solution (always true when `in_position`)
    #[inline]
    #[must_use]
    pub const fn in_solution(&self) -> bool {
        self.in_solution
    }

    #[must_use]
    pub const fn kind(&self) -> HintKind {
        match (self.in_position, self.in_solution) {
            (true, _) => HintKind::Exact,
            (false, true) => HintKind::Present,
            (false, false) => HintKind::Absent,
        }
    }
}

/// Rendering-oriented view of a [`LetterHint`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintKind {
    /// Green
    Exact,
    /// Yellow
    Present,
    /// Gray
    Absent,
}

impl HintKind {
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Which duplicate-letter rule to score with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeedbackRule {
    /// Count-threshold rule (the game's historical behavior)
    #[default]
    Approximate,
    /// Two-pass rule that consumes solution letters left to right
    Canonical,
}

impl FeedbackRule {
    /// Score `guess` against `solution` with this rule
    #[must_use]
    pub fn score(self, solution: &Word, guess: &Word) -> Vec<LetterHint> {
        match self {
            Self::Approximate => score(solution, guess),
            Self::Canonical => score_canonical(solution, guess),
        }
    }
}

impl fmt::Display for FeedbackRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Approximate => f.write_str("approximate"),
            Self::Canonical => f.write_str("canonical"),
        }
    }
}

/// Score a guess with the count-threshold rule
///
/// For each guess letter `g` at index `i`:
/// 1. `solution[i] == g`: exact.
/// 2. `g` is in the solution and either occurs more than once in the solution
///    or at most once in the guess: present.
/// 3. Otherwise absent. This includes the duplicate case of rule 2's
///    complement: once in the solution, several times in the guess.
///
/// Both words must have the same length.
///
/// # Examples
/// ```
/// use wordy::core::{Word, HintKind, score};
///
/// let solution = Word::new("stats").unwrap();
/// let guess = Word::new("smart").unwrap();
/// let kinds: Vec<HintKind> = score(&solution, &guess).iter().map(|h| h.kind()).collect();
///
/// assert_eq!(
///     kinds,
///     [HintKind::Exact, HintKind::Absent, HintKind::Exact, HintKind::Absent, HintKind::Present]
/// );
/// ```
#[must_use]
pub fn score(solution: &Word, guess: &Word) -> Vec<LetterHint> {
    debug_assert_eq!(solution.len(), guess.len(), "word lengths must match");

    let solution_counts = solution.letter_counts();
    let guess_counts = guess.letter_counts();

    guess
        .letters()
        .zip(solution.letters())
        .enumerate()
        .map(|(i, (letter, target))| {
            if letter == target {
                return LetterHint::exact(letter, i);
            }
            match solution_counts.get(&letter) {
                Some(&in_solution) if in_solution > 1 || guess_counts[&letter] <= 1 => {
                    LetterHint::present(letter, i)
                }
                _ => LetterHint::absent(letter, i),
            }
        })
        .collect()
}

/// Score a guess with the canonical two-pass rule
///
/// Exact matches consume their solution letter first; remaining guess
/// letters are then marked present left to right while unmatched copies of
/// that letter remain in the solution.
#[must_use]
pub fn score_canonical(solution: &Word, guess: &Word) -> Vec<LetterHint> {
    debug_assert_eq!(solution.len(), guess.len(), "word lengths must match");

    let mut available = solution.letter_counts();
    let pairs: Vec<(char, char)> = guess.letters().zip(solution.letters()).collect();

    // First pass: exact matches spend their letter
    for &(letter, target) in &pairs {
        if letter == target
            && let Some(count) = available.get_mut(&letter)
        {
            *count = count.saturating_sub(1);
        }
    }

    // Second pass: present while budget remains
    pairs
        .iter()
        .enumerate()
        .map(|(i, &(letter, target))| {
            if letter == target {
                return LetterHint::exact(letter, i);
            }
            match available.get_mut(&letter) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    LetterHint::present(letter, i)
                }
                _ => LetterHint::absent(letter, i),
            }
        })
        .collect()
}

/// A validated, scored attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guess {
    word: Word,
    hints: Vec<LetterHint>,
}

impl Guess {
    /// Score `word` against `solution` and bundle the result
    #[must_use]
    pub fn scored(rule: FeedbackRule, solution: &Word, word: Word) -> Self {
        let hints = rule.score(solution, &word);
        Self { word, hints }
    }

    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    /// One hint per letter, in index order
    #[must_use]
    pub fn hints(&self) -> &[LetterHint] {
        &self.hints
    }

    /// Every letter is an exact match
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.hints.iter().all(LetterHint::in_position)
    }

    /// Render as a row of colored squares
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.hints.iter().map(|h| h.kind().to_emoji()).collect()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word, self.to_emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn kinds(hints: &[LetterHint]) -> String {
        hints
            .iter()
            .map(|h| match h.kind() {
                HintKind::Exact => 'G',
                HintKind::Present => 'Y',
                HintKind::Absent => '-',
            })
            .collect()
    }

    #[test]
    fn smart_against_stats() {
        let hints = score(&word("stats"), &word("smart"));

        assert_eq!(kinds(&hints), "G-G-Y");
        assert_eq!(hints[0].letter(), 'S');
        assert_eq!(hints[2].letter(), 'A');
        assert_eq!(hints[4].letter(), 'T');
    }

    #[test]
    fn crane_against_stats() {
        // Both words have A at index 2
        let hints = score(&word("stats"), &word("crane"));
        assert_eq!(kinds(&hints), "--G--");
    }

    #[test]
    fn solution_against_itself_is_all_exact() {
        for text in ["stats", "crane", "aaaaa", "cat", "planet"] {
            let w = word(text);
            let hints = score(&w, &w);
            assert_eq!(hints.len(), w.len());
            assert!(hints.iter().all(|h| h.in_position() && h.in_solution()));
        }
    }

    #[test]
    fn hints_are_in_index_order() {
        let hints = score(&word("stats"), &word("crane"));
        for (i, hint) in hints.iter().enumerate() {
            assert_eq!(hint.position(), i);
        }
    }

    #[test]
    fn in_position_iff_letters_match() {
        let pairs = [
            ("stats", "sttts"),
            ("stats", "stabs"),
            ("crane", "array"),
            ("abbey", "babes"),
            ("speed", "erase"),
        ];
        for (solution, guess) in pairs {
            let (s, g) = (word(solution), word(guess));
            for rule in [FeedbackRule::Approximate, FeedbackRule::Canonical] {
                let hints = rule.score(&s, &g);
                assert_eq!(hints.len(), g.len());
                for (i, hint) in hints.iter().enumerate() {
                    assert_eq!(hint.in_position(), s.letter_at(i) == g.letter_at(i));
                    assert!(!hint.in_position() || hint.in_solution());
                }
            }
        }
    }

    #[test]
    fn hint_invariants_hold_across_dictionary() {
        let dictionary = crate::dictionary::Dictionary::embedded(5).unwrap();
        let words = dictionary.words();

        for solution in words.iter().step_by(7) {
            for guess in words.iter().step_by(3) {
                for rule in [FeedbackRule::Approximate, FeedbackRule::Canonical] {
                    let hints = rule.score(solution, guess);
                    assert_eq!(hints.len(), guess.len());
                    for (i, hint) in hints.iter().enumerate() {
                        let context = format!("{rule} {solution} {guess} @{i}");
                        assert_eq!(hint.position(), i, "{context}");
                        assert_eq!(hint.letter(), guess.letter_at(i), "{context}");
                        assert_eq!(
                            hint.in_position(),
                            solution.letter_at(i) == guess.letter_at(i),
                            "{context}"
                        );
                        assert!(!hint.in_position() || hint.in_solution(), "{context}");
                        assert!(
                            !hint.in_solution() || solution.has_letter(hint.letter()),
                            "{context}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn repeated_letter_present_when_solution_has_several() {
        // T occurs twice in STATS: the stray T at index 2 stays present
        let hints = score(&word("stats"), &word("sttts"));
        assert_eq!(kinds(&hints), "GGYGG");
    }

    #[test]
    fn single_solution_letter_guessed_twice_is_absent() {
        // CRANE has one A; ARRAY guesses two, neither in position
        let hints = score(&word("crane"), &word("array"));
        assert_eq!(kinds(&hints), "-G---");
    }

    #[test]
    fn canonical_rule_credits_first_occurrence() {
        let hints = score_canonical(&word("crane"), &word("array"));
        assert_eq!(kinds(&hints), "YG---");
    }

    #[test]
    fn rules_agree_without_duplicates() {
        let solution = word("slate");
        for guess in ["crane", "trace", "blast", "leash"] {
            let g = word(guess);
            assert_eq!(score(&solution, &g), score_canonical(&solution, &g));
        }
    }

    #[test]
    fn rules_diverge_on_triple_letters() {
        // Solution has two E's, guess has three: the approximate rule marks
        // every stray E present, the canonical rule runs out of budget.
        let solution = word("beset");
        let guess = word("eerie");
        assert_eq!(kinds(&score(&solution, &guess)), "YG--Y");
        assert_eq!(kinds(&score_canonical(&solution, &guess)), "YG---");
    }

    #[test]
    fn guess_reports_solved() {
        let solution = word("stats");
        assert!(Guess::scored(FeedbackRule::Approximate, &solution, word("stats")).is_solved());
        assert!(!Guess::scored(FeedbackRule::Approximate, &solution, word("start")).is_solved());
    }

    #[test]
    fn guess_to_emoji() {
        let guess = Guess::scored(FeedbackRule::Approximate, &word("stats"), word("smart"));
        assert_eq!(guess.to_emoji(), "🟩⬜🟩⬜🟨");
        assert_eq!(guess.to_string(), "SMART 🟩⬜🟩⬜🟨");
    }
}
