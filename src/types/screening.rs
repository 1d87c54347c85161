// src/types/screening.rs

/// A question set bound to one candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Screening {
    pub id: String,
    pub candidate_id: String,
    pub questions: Vec<String>,
}

/// One free-text answer per question, positionally aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    answers: Vec<String>,
}

impl AnswerSet {
    /// One empty slot per question.
    pub fn empty(len: usize) -> Self {
        Self {
            answers: vec![String::new(); len],
        }
    }

    /// Realigns previously entered answers to `len` slots, padding or truncating.
    pub fn restore(mut answers: Vec<String>, len: usize) -> Self {
        answers.resize(len, String::new());
        Self { answers }
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn get(&self, index: usize) -> &str {
        self.answers.get(index).map(String::as_str).unwrap_or("")
    }

    /// Replaces one slot. Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, text: impl Into<String>) {
        if let Some(slot) = self.answers.get_mut(index) {
            *slot = text.into();
        }
    }

    pub fn is_complete(&self, index: usize) -> bool {
        !self.get(index).trim().is_empty()
    }

    pub fn all_complete(&self) -> bool {
        !self.answers.is_empty() && self.answers.iter().all(|a| !a.trim().is_empty())
    }

    /// Whether every slot except `index` is complete.
    pub fn others_complete(&self, index: usize) -> bool {
        self.answers
            .iter()
            .enumerate()
            .all(|(i, a)| i == index || !a.trim().is_empty())
    }

    pub fn as_slice(&self) -> &[String] {
        &self.answers
    }
}
