//! Built-in concept catalog and cognitive-level tables.
//!
//! Concepts cover the sustainability, management, and research themes common
//! in programme-level outcomes. Every pattern carries word boundaries so a
//! stem like "eco" never fires inside "economic".

use align_core::models::{CognitiveLevel, ConceptDefinition};

use crate::levels::LevelRule;

fn concept(
    id: &str,
    patterns: &[&str],
    synonyms: &[&str],
    weight: f64,
    cognitive_level: CognitiveLevel,
    related: &[&str],
) -> ConceptDefinition {
    ConceptDefinition {
        id: id.to_string(),
        detection_patterns: patterns.iter().map(|p| p.to_string()).collect(),
        synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        weight,
        cognitive_level,
        related_concepts: related.iter().map(|r| r.to_string()).collect(),
    }
}

/// The default concept catalog, in declaration order.
pub fn concept_definitions() -> Vec<ConceptDefinition> {
    use CognitiveLevel::*;

    vec![
        concept(
            "analysis",
            &[
                r"\banaly[sz](e|es|ed|ing|is)\b",
                r"\banalytical\b",
                r"\bexamin(e|es|ed|ing|ation)\b",
                r"\bbreak(s|ing)?\s+down\b",
                r"\bdissect(s|ed|ing)?\b",
            ],
            &["breakdown", "dissection", "analytic"],
            0.95,
            Analyze,
            &["evaluation", "critical_thinking", "research"],
        ),
        concept(
            "critical_thinking",
            &[
                r"\bcritical(ly)?\s+(thinking|reflection|reasoning)\b",
                r"\bproblem-solving\b",
                r"\bproblem\s+solving\b",
            ],
            &["critically reflect", "reasoned argument"],
            0.9,
            Evaluate,
            &["analysis", "evaluation"],
        ),
        concept(
            "sustainability",
            &[
                r"\bsustainab(le|ility)\b",
                r"\benvironmental(ly)?\b",
                r"\bgreen\b",
                r"\beco-[a-z]+\b",
                r"\brenewables?\b",
            ],
            &["eco-friendly", "net zero", "circular economy"],
            0.9,
            Apply,
            &["lifecycle_assessment", "environmental_impact", "resource_management"],
        ),
        concept(
            "lifecycle_assessment",
            &[
                r"\blife\s*-?\s*cycle\s+(assessment|analysis)\b",
                r"\blca\b",
            ],
            &["life cycle analysis", "lifecycle analysis", "cradle to grave"],
            0.95,
            Analyze,
            &["sustainability", "environmental_impact", "assessment"],
        ),
        concept(
            "environmental_impact",
            &[
                r"\benvironmental\s+(impacts?|effects?)\b",
                r"\bcarbon\s+footprints?\b",
                r"\beco-?impacts?\b",
            ],
            &["carbon footprint", "emissions"],
            0.85,
            Analyze,
            &["sustainability", "lifecycle_assessment", "assessment"],
        ),
        concept(
            "resource_management",
            &[
                r"\bresource\s+(management|efficiency|use)\b",
                r"\bwaste\s+(reduction|management)\b",
            ],
            &["resource allocation", "material efficiency"],
            0.8,
            Apply,
            &["sustainability", "management"],
        ),
        concept(
            "management",
            &[
                r"\bmanag(e|es|ed|ing|ement)\b",
                r"\borgani[sz](e|es|ed|ing)\b",
                r"\bcoordinat(e|es|ed|ing|ion)\b",
                r"\blead(s|ing)?\b",
                r"\bsupervis(e|es|ed|ing|ion)\b",
            ],
            &["leadership", "governance"],
            0.8,
            Apply,
            &["strategy", "resource_management", "collaboration"],
        ),
        concept(
            "strategy",
            &[
                r"\bstrateg(y|ies|ic|ically)\b",
                r"\bplanning\b",
                r"\bframeworks?\b",
                r"\bapproach(es)?\b",
            ],
            &["road map", "roadmap", "business model"],
            0.85,
            Create,
            &["management", "methodology"],
        ),
        concept(
            "evaluation",
            &[
                r"\bevaluat(e|es|ed|ing|ion|ions)\b",
                r"\bassess(es|ed|ing)?\b",
                r"\bapprais(e|es|ed|ing|al)\b",
                r"\bcritiqu(e|es|ed|ing)\b",
                r"\bjudg(e|es|ed|ing|ement|ment)\b",
            ],
            &["critical appraisal", "weigh up"],
            0.9,
            Evaluate,
            &["analysis", "assessment", "critical_thinking"],
        ),
        concept(
            "assessment",
            &[
                r"\bassessments?\b",
                r"\bmeasur(e|es|ed|ing|ement|ements)\b",
                r"\btest(s|ed|ing)?\b",
                r"\bmetrics?\b",
            ],
            &["rubric", "evaluation criteria", "key performance indicator"],
            0.85,
            Evaluate,
            &["evaluation", "lifecycle_assessment"],
        ),
        concept(
            "design",
            &[
                r"\bdesign(s|ed|ing)?\b",
                r"\bcreat(e|es|ed|ing)\b",
                r"\bdevelop(s|ed|ing)?\b",
                r"\bconstruct(s|ed|ing)?\b",
                r"\bbuild(s|ing)?\b",
                r"\bformulat(e|es|ed|ing)\b",
            ],
            &["prototype", "blueprint"],
            0.85,
            Create,
            &["innovation", "methodology"],
        ),
        concept(
            "innovation",
            &[
                r"\binnovat(e|es|ed|ing|ion|ions|ive)\b",
                r"\bcreativ(e|ity)\b",
                r"\bnovel\b",
                r"\bbreakthroughs?\b",
            ],
            &["original idea", "entrepreneur"],
            0.9,
            Create,
            &["design", "strategy"],
        ),
        concept(
            "communication",
            &[
                r"\bcommunicat(e|es|ed|ing|ion)\b",
                r"\bpresent(s|ed|ing|ation|ations)?\b",
                r"\barticulat(e|es|ed|ing)\b",
                r"\bconvey(s|ed|ing)?\b",
            ],
            &["report writing", "written and oral", "public speaking"],
            0.8,
            Apply,
            &["collaboration"],
        ),
        concept(
            "collaboration",
            &[
                r"\bcollaborat(e|es|ed|ing|ion|ive)\b",
                r"\bteamwork\b",
                r"\bcooperat(e|es|ed|ing|ion)\b",
                r"\bwork(ing)?\s+together\b",
                r"\bpartnerships?\b",
            ],
            &["group work", "team project", "multidisciplinary team"],
            0.75,
            Apply,
            &["communication", "management"],
        ),
        concept(
            "research",
            &[
                r"\bresearch(es|ed|ing)?\b",
                r"\binvestigat(e|es|ed|ing|ion|ions)\b",
                r"\bstud(y|ies|ied|ying)\b",
                r"\bexplor(e|es|ed|ing|ation)\b",
                r"\binquir(y|ies)\b",
            ],
            &["literature review", "data collection", "empirical"],
            0.85,
            Analyze,
            &["analysis", "methodology"],
        ),
        concept(
            "methodology",
            &[
                r"\bmethodolog(y|ies|ical)\b",
                r"\bmethods?\b",
                r"\btechniques?\b",
                r"\bprocedures?\b",
                r"\bprocess(es)?\b",
            ],
            &["systematic approach", "toolkit"],
            0.8,
            Understand,
            &["strategy", "research", "application"],
        ),
        concept(
            "application",
            &[
                r"\bappl(y|ies|ied|ying|ication)\b",
                r"\bimplement(s|ed|ing|ation)?\b",
                r"\bexecut(e|es|ed|ing|ion)\b",
                r"\bcarr(y|ies|ied|ying)\s+out\b",
                r"\bperform(s|ed|ing)?\b",
            ],
            &["put into practice", "make use of"],
            0.8,
            Apply,
            &["practical", "methodology"],
        ),
        concept(
            "practical",
            &[
                r"\bpractical(ly)?\b",
                r"\bhands-on\b",
                r"\breal-world\b",
                r"\bapplied\b",
                r"\bfield\s?work\b",
            ],
            &["case study", "work-based", "placement"],
            0.75,
            Apply,
            &["application"],
        ),
    ]
}

/// Level patterns and indicator words, lowest level first.
pub fn level_rules() -> Vec<LevelRule> {
    vec![
        LevelRule::new(
            CognitiveLevel::Remember,
            &[
                r"\bremember(s|ed|ing)?\b",
                r"\brecall(s|ed|ing)?\b",
                r"\brecogni[sz](e|es|ed|ing)\b",
                r"\bidentif(y|ies|ied|ying)\b",
                r"\bdefin(e|es|ed|ing)\b",
                r"\blist(s|ed|ing)?\b",
                r"\bname(s|d)?\b",
                r"\bstate(s|d)?\b",
            ],
            &[
                "basic", "fundamental", "elementary", "simple", "knowledge", "facts",
                "information", "terminology",
            ],
        ),
        LevelRule::new(
            CognitiveLevel::Understand,
            &[
                r"\bunderstand(s|ing)?\b",
                r"\bcomprehend(s|ed|ing)?\b",
                r"\bexplain(s|ed|ing)?\b",
                r"\binterpret(s|ed|ing)?\b",
                r"\bsummari[sz](e|es|ed|ing)\b",
                r"\bparaphras(e|es|ed|ing)\b",
                r"\bdescrib(e|es|ed|ing)\b",
            ],
            &[
                "meaning", "concept", "concepts", "idea", "principle", "principles",
                "illustrate", "demonstrate", "show",
            ],
        ),
        LevelRule::new(
            CognitiveLevel::Apply,
            &[
                r"\bappl(y|ies|ied|ying)\b",
                r"\buse(s|d)?\b",
                r"\busing\b",
                r"\bimplement(s|ed|ing)?\b",
                r"\bexecut(e|es|ed|ing)\b",
                r"\bcarr(y|ies|ied|ying)\s+out\b",
                r"\bperform(s|ed|ing)?\b",
            ],
            &[
                "practical", "practice", "hands-on", "real-world", "solve", "calculate",
                "operate",
            ],
        ),
        LevelRule::new(
            CognitiveLevel::Analyze,
            &[
                r"\banaly[sz](e|es|ed|ing)\b",
                r"\bexamin(e|es|ed|ing)\b",
                r"\binvestigat(e|es|ed|ing)\b",
                r"\bcompar(e|es|ed|ing)\b",
                r"\bcontrast(s|ed|ing)?\b",
                r"\bdifferentiat(e|es|ed|ing)\b",
            ],
            &[
                "breakdown", "deconstruct", "dissect", "separate", "relationships", "patterns",
                "structure",
            ],
        ),
        LevelRule::new(
            CognitiveLevel::Evaluate,
            &[
                r"\bevaluat(e|es|ed|ing)\b",
                r"\bassess(es|ed|ing)?\b",
                r"\bcritiqu(e|es|ed|ing)\b",
                r"\bjudg(e|es|ed|ing)\b",
                r"\bjustif(y|ies|ied|ying)\b",
                r"\bdefend(s|ed|ing)?\b",
            ],
            &[
                "quality", "value", "worth", "effectiveness", "validity", "criteria",
                "standards",
            ],
        ),
        LevelRule::new(
            CognitiveLevel::Create,
            &[
                r"\bcreat(e|es|ed|ing)\b",
                r"\bdesign(s|ed|ing)?\b",
                r"\bdevelop(s|ed|ing)?\b",
                r"\bgenerat(e|es|ed|ing)\b",
                r"\bproduc(e|es|ed|ing)\b",
                r"\bconstruct(s|ed|ing)?\b",
                r"\bformulat(e|es|ed|ing)\b",
            ],
            &[
                "original", "new", "innovative", "novel", "synthesize", "synthesise", "combine",
                "integrate",
            ],
        ),
    ]
}

/// Sample pair used by the self-test call.
pub const SAMPLE_SOURCE: &str = "Students will analyze environmental sustainability frameworks \
     and evaluate lifecycle assessment methodologies";
pub const SAMPLE_TARGET: &str = "Apply lifecycle assessment tools and environmental evaluation \
     methods to assess sustainability of products";
pub const SAMPLE_BASELINE: f64 = 3.0;
