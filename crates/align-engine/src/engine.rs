//! AlignmentEngine: owns the compiled catalogs and the scoring pipeline.

use std::path::Path;
use std::sync::Arc;

use align_analysis::{CognitiveLevelClassifier, ConceptExtractor, TextProfiler};
use align_catalog::builtin::{SAMPLE_BASELINE, SAMPLE_SOURCE, SAMPLE_TARGET};
use align_catalog::loader::{builtin_catalogs, load_catalogs};
use align_catalog::{ConceptCatalog, LevelCatalog};
use align_core::config::AlignConfig;
use align_core::constants::VERSION;
use align_core::errors::AlignResult;
use align_core::models::{
    AlignmentResult, CapabilityReport, CognitiveLevel, DegradationEvent, MatrixReport,
    OutcomeStatement, PairScore, StatusReport,
};
use align_core::tracing_setup::events;
use align_core::traits::ISimilarityBackend;
use align_explain::{Explainer, ExplanationInput};
use align_scoring::{create_backend, BackendSelection, ScoreCombiner, SimilarityEngine};
use rayon::prelude::*;

use crate::health::{self, HealthSnapshot};
use crate::matrix;
use crate::validation::{validate_baseline, validate_outcomes, validate_text};

/// Immutable after construction; share it across threads freely.
pub struct AlignmentEngine {
    config: AlignConfig,
    catalog: Arc<ConceptCatalog>,
    levels: Arc<LevelCatalog>,
    profiler: TextProfiler,
    similarity: SimilarityEngine,
    combiner: ScoreCombiner,
    explainer: Explainer,
    degradations: Vec<DegradationEvent>,
}

impl AlignmentEngine {
    /// Validate the config, compile the catalogs, and pick the semantic backend.
    ///
    /// Catalog or config problems fail here, never per call. An unavailable
    /// embedding backend does not fail: it is recorded as a degradation.
    pub fn new(config: AlignConfig) -> AlignResult<Self> {
        config.validate()?;
        let (catalog, levels) = compile_catalogs(&config)?;
        let selection = create_backend(&config, catalog.clone());
        Ok(Self::assemble(config, catalog, levels, selection))
    }

    /// Like [`new`](Self::new), but scores semantic similarity with the given
    /// backend instead of the one the config selects.
    pub fn with_backend(config: AlignConfig, backend: Arc<dyn ISimilarityBackend>) -> AlignResult<Self> {
        config.validate()?;
        let (catalog, levels) = compile_catalogs(&config)?;
        let selection = BackendSelection {
            backend,
            degradations: Vec::new(),
        };
        Ok(Self::assemble(config, catalog, levels, selection))
    }

    fn assemble(
        config: AlignConfig,
        catalog: Arc<ConceptCatalog>,
        levels: Arc<LevelCatalog>,
        selection: BackendSelection,
    ) -> Self {
        let profiler = TextProfiler::new(
            ConceptExtractor::new(catalog.clone()),
            CognitiveLevelClassifier::new(levels.clone()),
        );
        let similarity = SimilarityEngine::new(catalog.clone(), selection.backend);
        let combiner = ScoreCombiner::new(config.scoring.clone());
        let explainer = Explainer::new(catalog.clone(), config.explanation.clone());

        events::engine_initialized(
            catalog.len(),
            levels.pattern_count(),
            similarity.backend_name(),
        );

        Self {
            config,
            catalog,
            levels,
            profiler,
            similarity,
            combiner,
            explainer,
            degradations: selection.degradations,
        }
    }

    /// Engine with the built-in catalog and default configuration.
    pub fn with_defaults() -> AlignResult<Self> {
        Self::new(AlignConfig::default())
    }

    pub fn config(&self) -> &AlignConfig {
        &self.config
    }

    pub fn catalog(&self) -> &ConceptCatalog {
        &self.catalog
    }

    pub fn semantic_backend(&self) -> &str {
        self.similarity.backend_name()
    }

    /// Score how well `target` supports `source`.
    ///
    /// Only invalid input is returned as `Err`. A `baseline` at or below zero
    /// means no baseline.
    pub fn analyze(&self, source: &str, target: &str, baseline: f64) -> AlignResult<AlignmentResult> {
        validate_text("source", source)?;
        validate_text("target", target)?;
        let baseline = validate_baseline(baseline)?;

        let _span = align_core::analyze_span!(source.len(), target.len()).entered();
        match self.run(source, target, baseline) {
            Ok(result) => Ok(result),
            Err(e) => {
                let reason = e.to_string();
                events::analysis_failed(&reason);
                Ok(AlignmentResult::failed(baseline, &reason))
            }
        }
    }

    fn run(&self, source: &str, target: &str, baseline: Option<f64>) -> AlignResult<AlignmentResult> {
        let source_profile = self.profiler.profile(source);
        let target_profile = self.profiler.profile(target);
        let report = self.similarity.compare(&source_profile, &target_profile)?;

        let combined = self.combiner.combine(
            report.semantic_similarity,
            report.concept_alignment,
            report.cognitive_coherence,
            baseline,
        );

        let aligned = report.concepts.aligned();
        let explanation = self.explainer.explain(&ExplanationInput {
            enhanced_score: combined.enhanced_score,
            semantic_similarity: report.semantic_similarity,
            concept_alignment: report.concept_alignment,
            cognitive_coherence: report.cognitive_coherence,
            aligned: &aligned,
            missing: &report.concepts.missing,
            bridges: &report.concepts.bridges,
            source_level: report.source_level.level,
            target_level: report.target_level.level,
            source_text: &source_profile.normalized,
            target_text: &target_profile.normalized,
        });

        events::analysis_completed(
            combined.enhanced_score,
            combined.confidence,
            report.semantic_similarity,
            report.concept_alignment,
            report.cognitive_coherence,
        );

        let suggestions = explanation.texts();
        Ok(AlignmentResult {
            enhanced_score: combined.enhanced_score,
            confidence: combined.confidence,
            semantic_similarity: report.semantic_similarity,
            concept_alignment: report.concept_alignment,
            cognitive_coherence: report.cognitive_coherence,
            aligned_concepts: aligned,
            missing_concepts: report.concepts.missing,
            bridges: report.concepts.bridges,
            source_level: report.source_level.level,
            target_level: report.target_level.level,
            source_level_confidence: report.source_level.confidence.value(),
            target_level_confidence: report.target_level.confidence.value(),
            source_concepts: source_profile.concepts,
            target_concepts: target_profile.concepts,
            reasoning: explanation.reasoning,
            suggestions,
            suggestion_details: explanation.suggestions,
            analysis_method: report.method,
            baseline_score: baseline,
        })
    }

    /// Read-only projection of the catalog for display.
    pub fn capabilities(&self) -> CapabilityReport {
        CapabilityReport {
            concepts: self.catalog.entries(),
            levels: CognitiveLevel::ALL.to_vec(),
            semantic_backend: self.semantic_backend().to_string(),
            version: VERSION.to_string(),
        }
    }

    /// Initialization status. Runs no analysis.
    pub fn status(&self) -> StatusReport {
        let subsystems = health::check_all(&HealthSnapshot {
            concept_count: self.catalog.len(),
            level_pattern_count: self.levels.pattern_count(),
            semantic_backend: self.semantic_backend(),
            degradations: &self.degradations,
        });
        StatusReport {
            overall_status: StatusReport::derive_overall(&subsystems),
            initialized: true,
            concept_count: self.catalog.len(),
            level_pattern_count: self.levels.pattern_count(),
            semantic_backend: Some(self.semantic_backend().to_string()),
            version: VERSION.to_string(),
            degradations: self.degradations.clone(),
            subsystems,
        }
    }

    /// Analyze the built-in sample pair.
    pub fn self_test(&self) -> AlignResult<AlignmentResult> {
        self.analyze(SAMPLE_SOURCE, SAMPLE_TARGET, SAMPLE_BASELINE)
    }

    /// Score every source against every target, grouped per source by target category.
    pub fn analyze_matrix(
        &self,
        sources: &[OutcomeStatement],
        targets: &[OutcomeStatement],
    ) -> AlignResult<MatrixReport> {
        validate_outcomes("sources", sources)?;
        validate_outcomes("targets", targets)?;
        let _span = align_core::matrix_span!(sources.len(), targets.len()).entered();

        let rows = sources
            .par_iter()
            .map(|source| {
                let scores = targets
                    .par_iter()
                    .map(|target| self.pair_score(source, target))
                    .collect::<AlignResult<Vec<_>>>()?;
                Ok(matrix::build_row(&source.id, targets, scores))
            })
            .collect::<AlignResult<Vec<_>>>()?;

        Ok(MatrixReport {
            rows,
            pair_count: sources.len() * targets.len(),
        })
    }

    fn pair_score(&self, source: &OutcomeStatement, target: &OutcomeStatement) -> AlignResult<PairScore> {
        let result = self.analyze(&source.text, &target.text, 0.0)?;
        Ok(PairScore {
            target_id: target.id.clone(),
            enhanced_score: result.enhanced_score,
            confidence: result.confidence,
            reasoning: result.reasoning,
        })
    }
}

fn compile_catalogs(config: &AlignConfig) -> AlignResult<(Arc<ConceptCatalog>, Arc<LevelCatalog>)> {
    let (catalog, levels) = match config.catalog.path.as_deref() {
        Some(path) => load_catalogs(Path::new(path))?,
        None => builtin_catalogs()?,
    };
    Ok((Arc::new(catalog), Arc::new(levels)))
}
