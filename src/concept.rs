//! Restaurant concept generation: the staged model pipeline, output
//! normalization and the static fallback used when the model is unavailable.

pub mod fallback;
pub mod generator;
pub mod model;
pub mod normalize;
pub mod params;
pub mod service;

pub use fallback::fallback_concept;
pub use generator::{SequentialGenerator, Stage, STAGES};
pub use model::{RestaurantConcept, StageOutputs, DESCRIPTION_KEY, MENU_KEY, NAME_KEY};
pub use normalize::{degraded_concept, Normalizer, DEFAULT_BOILERPLATE_PREFIXES};
pub use params::{ParamField, RestaurantParams};
pub use service::{ConceptService, GenerationOutcome};
