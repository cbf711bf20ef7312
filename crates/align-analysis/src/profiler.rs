use align_core::models::TextProfile;

use crate::normalize::normalize;
use crate::{CognitiveLevelClassifier, ConceptExtractor};

/// Runs extraction and classification over one normalized copy of a text.
#[derive(Debug, Clone)]
pub struct TextProfiler {
    extractor: ConceptExtractor,
    classifier: CognitiveLevelClassifier,
}

impl TextProfiler {
    pub fn new(extractor: ConceptExtractor, classifier: CognitiveLevelClassifier) -> Self {
        Self {
            extractor,
            classifier,
        }
    }

    pub fn extractor(&self) -> &ConceptExtractor {
        &self.extractor
    }

    pub fn classifier(&self) -> &CognitiveLevelClassifier {
        &self.classifier
    }

    pub fn profile(&self, text: &str) -> TextProfile {
        let normalized = normalize(text);
        let concepts = self.extractor.extract_normalized(&normalized);
        let level = self.classifier.classify_normalized(&normalized);
        TextProfile {
            normalized,
            concepts,
            level,
        }
    }
}
