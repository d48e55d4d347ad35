use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::similarity::SparseVector;
use crate::text;

/// Largest n-gram extracted from titles (unigrams + bigrams)
pub const DEFAULT_NGRAM_MAX: usize = 2;

/// TF-IDF term weighting fitted over a corpus of cleaned titles.
///
/// Vocabulary indices follow lexicographic term order so that two fits over
/// the same documents produce identical feature layouts. IDF is smoothed as
/// `ln((1 + n) / (1 + df)) + 1`, and every transformed vector is scaled to
/// unit length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    ngram_max: usize,
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Learn vocabulary and IDF weights from `documents`
    pub fn fit<S: AsRef<str>>(documents: &[S], ngram_max: usize) -> Self {
        let ngram_max = ngram_max.max(1);
        let mut doc_freq: HashMap<String, usize> = HashMap::new();

        for doc in documents {
            let unique: BTreeSet<String> =
                text::terms(doc.as_ref(), ngram_max).into_iter().collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let sorted: BTreeSet<&String> = doc_freq.keys().collect();
        let vocabulary: BTreeMap<String, usize> = sorted
            .into_iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();

        let n_docs = documents.len() as f64;
        let mut idf = vec![0.0; vocabulary.len()];
        for (term, &idx) in &vocabulary {
            let df = doc_freq.get(term).copied().unwrap_or(0) as f64;
            idf[idx] = ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0;
        }

        TfidfVectorizer {
            ngram_max,
            vocabulary,
            idf,
        }
    }

    /// Project a document into the fitted space. Unknown terms are ignored.
    pub fn transform(&self, document: &str) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in text::terms(document, self.ngram_max) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let pairs = counts
            .into_iter()
            .map(|(idx, tf)| (idx, tf * self.idf[idx]))
            .collect();

        SparseVector::from_pairs(pairs).normalized()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Feature index of a term, if it was seen during fitting
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// IDF weight of a term, if it was seen during fitting
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.term_index(term).map(|idx| self.idf[idx])
    }

    pub fn ngram_max(&self) -> usize {
        self.ngram_max
    }

    /// One IDF weight per vocabulary term, and every term index in range
    pub fn is_consistent(&self) -> bool {
        self.idf.len() == self.vocabulary.len()
            && self.vocabulary.values().all(|&idx| idx < self.idf.len())
    }
}
