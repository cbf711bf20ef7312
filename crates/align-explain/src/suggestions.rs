//! The suggestion cascade.
//!
//! Stages run in priority order: cognitive level, high-weight concepts,
//! score band, assessment. Collection stops at the cap, so earlier stages
//! always win.

use align_catalog::ConceptCatalog;
use align_core::models::{Suggestion, SuggestionKind};

use crate::bands::ScoreBand;
use crate::explainer::ExplanationInput;
use crate::templates;

const ASSESSMENT_STEMS: [&str; 3] = ["assess", "evaluat", "measur"];

/// Bounded, ordered suggestion list.
struct Collector {
    items: Vec<Suggestion>,
    cap: usize,
}

impl Collector {
    fn new(cap: usize) -> Self {
        Self {
            items: Vec::with_capacity(cap),
            cap,
        }
    }

    fn is_full(&self) -> bool {
        self.items.len() >= self.cap
    }

    fn push(&mut self, kind: SuggestionKind, text: impl Into<String>) {
        if !self.is_full() {
            self.items.push(Suggestion::new(kind, text));
        }
    }
}

pub fn build_suggestions(
    input: &ExplanationInput<'_>,
    catalog: &ConceptCatalog,
    high_weight_threshold: f64,
    cap: usize,
) -> Vec<Suggestion> {
    let mut out = Collector::new(cap);
    if cap == 0 {
        return out.items;
    }

    level_stage(input, &mut out);
    concept_stage(input, catalog, high_weight_threshold, &mut out);
    score_stage(input, &mut out);
    assessment_stage(input, &mut out);

    out.items
}

fn level_stage(input: &ExplanationInput<'_>, out: &mut Collector) {
    let (s, t) = (input.source_level, input.target_level);
    if s.rank() > t.rank() + 1 {
        out.push(SuggestionKind::Level, templates::raise_rigor(s, t));
    } else if t > s {
        out.push(SuggestionKind::Level, templates::add_scaffolding(s, t));
    }
}

fn concept_stage(
    input: &ExplanationInput<'_>,
    catalog: &ConceptCatalog,
    threshold: f64,
    out: &mut Collector,
) {
    for id in input.missing {
        if catalog.weight(id) > threshold {
            out.push(SuggestionKind::Concept, templates::add_concept(id));
        }
    }
    for bridge in input.bridges {
        if catalog.weight(&bridge.concept_id) > threshold {
            out.push(
                SuggestionKind::Concept,
                templates::make_bridge_explicit(&bridge.concept_id, &bridge.via),
            );
        }
    }
}

fn score_stage(input: &ExplanationInput<'_>, out: &mut Collector) {
    let is_missing = |id: &str| input.missing.iter().any(|m| m == id);
    match ScoreBand::from_score(input.enhanced_score) {
        ScoreBand::Weak => {
            out.push(SuggestionKind::Score, templates::MAJOR_REVISION);
            if is_missing("sustainability") {
                out.push(SuggestionKind::Score, templates::ADD_SUSTAINABILITY);
            }
            if is_missing("analysis") {
                out.push(SuggestionKind::Score, templates::STRENGTHEN_ANALYSIS);
            }
        }
        ScoreBand::Moderate => {
            out.push(SuggestionKind::Score, templates::MODERATE_IMPROVEMENT);
            if input.aligned.len() < 2 {
                out.push(SuggestionKind::Score, templates::INCREASE_OVERLAP);
            }
        }
        ScoreBand::Adequate => {}
        ScoreBand::Strong => out.push(SuggestionKind::Score, templates::MAINTAIN),
    }
}

fn assessment_stage(input: &ExplanationInput<'_>, out: &mut Collector) {
    let signals = |text: &str| ASSESSMENT_STEMS.iter().any(|stem| text.contains(stem));
    if signals(input.source_text) && !signals(input.target_text) {
        out.push(SuggestionKind::Assessment, templates::ADD_ASSESSMENT);
    }
}
