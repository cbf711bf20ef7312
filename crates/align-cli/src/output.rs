//! Human-readable and JSON rendering. Renderers return strings so they can be tested.

use std::fmt::Write;

use align_core::models::{AlignmentResult, CapabilityReport, MatrixReport, StatusReport};
use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}

pub fn render_result(r: &AlignmentResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Score:        {:.2} / 5 (confidence {:.2})", r.enhanced_score, r.confidence);
    let _ = writeln!(
        out,
        "Sub-scores:   semantic {:.2}, concepts {:.2}, coherence {:.2}",
        r.semantic_similarity, r.concept_alignment, r.cognitive_coherence
    );
    let _ = writeln!(out, "Levels:       {} -> {}", r.source_level, r.target_level);
    let _ = writeln!(out, "Aligned:      {}", join_or_none(&r.aligned_concepts));
    let _ = writeln!(out, "Missing:      {}", join_or_none(&r.missing_concepts));
    for b in &r.bridges {
        let _ = writeln!(out, "Bridge:       {} via {}", b.concept_id, b.via);
    }
    let _ = writeln!(out, "Method:       {}", r.analysis_method);
    let _ = writeln!(out, "\n{}", r.reasoning);
    if !r.suggestions.is_empty() {
        let _ = writeln!(out, "\nSuggestions:");
        for (i, s) in r.suggestions.iter().enumerate() {
            let _ = writeln!(out, "  {}. {}", i + 1, s);
        }
    }
    out
}

pub fn render_capabilities(caps: &CapabilityReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Semantic backend: {} (v{})", caps.semantic_backend, caps.version);
    let levels: Vec<String> = caps.levels.iter().map(|l| l.to_string()).collect();
    let _ = writeln!(out, "Levels: {}", levels.join(" < "));
    let _ = writeln!(out, "\nConcepts ({}):", caps.concepts.len());
    for c in &caps.concepts {
        let _ = writeln!(
            out,
            "  {:<22} weight {:.2}  {:<10} related: {}",
            c.id,
            c.weight,
            c.cognitive_level.to_string(),
            join_or_none(&c.related_concepts)
        );
    }
    out
}

pub fn render_status(s: &StatusReport) -> String {
    let mut out = String::new();
    let status = serde_json::to_value(s.overall_status)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default();
    let _ = writeln!(out, "Status:  {status} (initialized: {})", s.initialized);
    let _ = writeln!(
        out,
        "Catalog: {} concepts, {} level patterns",
        s.concept_count, s.level_pattern_count
    );
    if let Some(backend) = &s.semantic_backend {
        let _ = writeln!(out, "Backend: {backend}");
    }
    for sub in &s.subsystems {
        let _ = writeln!(
            out,
            "  {:<12} {:?} {}",
            sub.name,
            sub.status,
            sub.message.as_deref().unwrap_or("")
        );
    }
    for d in &s.degradations {
        let _ = writeln!(
            out,
            "  degraded {} at {}: {} (fallback {})",
            d.component, d.timestamp, d.failure, d.fallback_used
        );
    }
    out
}

pub fn render_matrix(m: &MatrixReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} pairs", m.pair_count);
    for row in &m.rows {
        let _ = writeln!(out, "\n{}", row.source_id);
        for c in &row.categories {
            let _ = writeln!(
                out,
                "  {:<16} {} ({:.2}) over {} targets",
                c.category,
                c.score,
                c.exact_score,
                c.individual_scores.len()
            );
        }
    }
    out
}
