//! Accuracy of a validator over a labelled corpus of names.
//!
//! Useful for regression-checking rules: feed it names that must pass and
//! names that must fail, and it reports which ones were misclassified.

use std::fmt;

use super::{FilenameValidator, System};

/// Names labelled as valid or invalid for some target system.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Corpus {
    pub valid: Vec<String>,
    pub invalid: Vec<String>,
}

impl Corpus {
    pub fn new<V, I>(valid: V, invalid: I) -> Self
    where
        V: IntoIterator,
        V::Item: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            valid: valid.into_iter().map(Into::into).collect(),
            invalid: invalid.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classification results of one validator over one [`Corpus`].
///
/// A *false positive* is an invalid name that was accepted; a *false
/// negative* is a valid name that was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    pub system: Option<System>,
    pub total: usize,
    pub correct: usize,
    pub incorrect: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
    pub false_positive_cases: Vec<String>,
    pub false_negative_cases: Vec<String>,
    #[cfg_attr(feature = "serde", serde(skip))]
    valid_count: usize,
    #[cfg_attr(feature = "serde", serde(skip))]
    invalid_count: usize,
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

impl Report {
    /// Runs `validator` over every name in `corpus`.
    #[must_use]
    pub fn evaluate(validator: &FilenameValidator, corpus: &Corpus) -> Self {
        let false_negative_cases: Vec<String> = corpus
            .valid
            .iter()
            .filter(|name| !validator.is_valid(name))
            .cloned()
            .collect();
        let false_positive_cases: Vec<String> = corpus
            .invalid
            .iter()
            .filter(|name| validator.is_valid(name))
            .cloned()
            .collect();

        let total = corpus.len();
        let incorrect = false_positive_cases.len() + false_negative_cases.len();

        Self {
            system: validator.system(),
            total,
            correct: total - incorrect,
            incorrect,
            false_positives: false_positive_cases.len(),
            false_negatives: false_negative_cases.len(),
            false_positive_cases,
            false_negative_cases,
            valid_count: corpus.valid.len(),
            invalid_count: corpus.invalid.len(),
        }
    }

    /// Share of correctly classified names, in percent.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        percentage(self.correct, self.total)
    }

    /// False positives as a percentage of the invalid names.
    #[must_use]
    pub fn fp_rate(&self) -> f64 {
        percentage(self.false_positives, self.invalid_count)
    }

    /// False negatives as a percentage of the valid names.
    #[must_use]
    pub fn fn_rate(&self) -> f64 {
        percentage(self.false_negatives, self.valid_count)
    }

    #[must_use]
    pub const fn is_perfect(&self) -> bool {
        self.incorrect == 0
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let title = self
            .system
            .map_or_else(|| "ANY".to_owned(), |s| s.as_str().to_uppercase());
        writeln!(f, "--- {title} Results ---")?;
        writeln!(f, "Total Tested: {}", self.total)?;
        writeln!(f, "Correct: {} ({:.2}%)", self.correct, self.accuracy())?;
        writeln!(f, "Incorrect: {}", self.incorrect)?;
        writeln!(
            f,
            "  False Positives: {} ({:.2}% of invalid)",
            self.false_positives,
            self.fp_rate()
        )?;
        if !self.false_positive_cases.is_empty() {
            writeln!(f, "    False Positive Cases: {:?}", self.false_positive_cases)?;
        }
        writeln!(
            f,
            "  False Negatives: {} ({:.2}% of valid)",
            self.false_negatives,
            self.fn_rate()
        )?;
        if !self.false_negative_cases.is_empty() {
            writeln!(f, "    False Negative Cases: {:?}", self.false_negative_cases)?;
        }
        Ok(())
    }
}
