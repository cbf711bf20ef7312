pub mod alignment_result;
pub mod capability;
pub mod classification;
pub mod cognitive_level;
pub mod concept;
pub mod confidence;
pub mod degradation_event;
pub mod health_report;
pub mod matrix;
pub mod text_profile;

pub use alignment_result::{AlignmentResult, Suggestion, SuggestionKind};
pub use capability::{CapabilityReport, CatalogEntryView};
pub use classification::CognitiveLevelClassification;
pub use cognitive_level::CognitiveLevel;
pub use concept::{ConceptBridge, ConceptDefinition, ConceptMatch};
pub use confidence::Confidence;
pub use degradation_event::DegradationEvent;
pub use health_report::{HealthStatus, StatusReport, SubsystemHealth};
pub use matrix::{
    CategoryAlignment, MatrixReport, MatrixRow, OutcomeStatement, PairScore, DEFAULT_CATEGORY,
};
pub use text_profile::TextProfile;
