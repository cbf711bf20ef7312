//! Hashed TF-IDF provider.
//!
//! Fixed-dimension vectors from hashed unigrams and bigrams. No external
//! dependencies, so it is always available.

use std::collections::HashMap;

use align_core::errors::AlignResult;
use align_core::traits::IEmbeddingProvider;

/// Words too common in outcome statements to carry meaning.
const STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "in", "into", "is", "it",
    "of", "on", "or", "students", "that", "the", "their", "this", "to", "will", "with",
];

/// Deterministic embedding from hashed term statistics.
///
/// Unigrams and adjacent-word bigrams are hashed (FNV-1a) into buckets and
/// weighted by sublinear term frequency times a length-based IDF proxy.
/// Output is L2-normalized.
pub struct HashedTfIdfProvider {
    dimensions: usize,
}

impl HashedTfIdfProvider {
    pub fn new(dimensions: usize) -> Self {
        Self {
            dimensions: dimensions.max(1),
        }
    }

    fn bucket(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= u64::from(*b);
            h = h.wrapping_mul(0x100000001b3);
        }
        (h % dims as u64) as usize
    }

    fn terms(text: &str) -> Vec<String> {
        let words: Vec<&str> = text
            .split(|c: char| !c.is_alphanumeric() && c != '-')
            .filter(|w| w.len() >= 2 && !STOPWORDS.contains(w))
            .collect();
        let mut terms: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        terms.extend(words.windows(2).map(|pair| format!("{} {}", pair[0], pair[1])));
        terms
    }

    fn vector(&self, text: &str) -> Vec<f32> {
        let lowered = text.to_lowercase();
        let mut tf: HashMap<String, u32> = HashMap::new();
        for term in Self::terms(&lowered) {
            *tf.entry(term).or_default() += 1;
        }

        let mut vec = vec![0.0f32; self.dimensions];
        for (term, count) in &tf {
            let weight = 1.0 + (*count as f32).ln();
            let idf = 1.0 + (term.len() as f32).ln();
            vec[Self::bucket(term, self.dimensions)] += weight * idf;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

impl IEmbeddingProvider for HashedTfIdfProvider {
    fn embed(&self, text: &str) -> AlignResult<Vec<f32>> {
        Ok(self.vector(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "hashed-tfidf"
    }

    fn is_available(&self) -> bool {
        true
    }
}
