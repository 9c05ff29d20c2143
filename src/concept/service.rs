use std::sync::Arc;

use tracing::{info, warn};

use super::fallback::fallback_concept;
use super::generator::SequentialGenerator;
use super::model::RestaurantConcept;
use super::normalize::Normalizer;
use super::params::{ParamField, RestaurantParams};
use crate::ai::{LanguageModel, SamplingParams};

/// Result of a generation request. Both variants always carry a usable concept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Generated(RestaurantConcept),
    Fallback {
        concept: RestaurantConcept,
        reason: String,
    },
}

impl GenerationOutcome {
    pub fn concept(&self) -> &RestaurantConcept {
        match self {
            GenerationOutcome::Generated(concept) => concept,
            GenerationOutcome::Fallback { concept, .. } => concept,
        }
    }

    pub fn into_concept(self) -> RestaurantConcept {
        match self {
            GenerationOutcome::Generated(concept) => concept,
            GenerationOutcome::Fallback { concept, .. } => concept,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, GenerationOutcome::Fallback { .. })
    }
}

/// Ties the model, the stage pipeline, normalization and the fallback table together.
#[derive(Clone)]
pub struct ConceptService {
    model: Arc<dyn LanguageModel>,
    sampling: SamplingParams,
    normalizer: Normalizer,
}

impl ConceptService {
    pub fn new(model: Arc<dyn LanguageModel>, normalizer: Normalizer) -> Self {
        Self {
            model,
            sampling: SamplingParams::default(),
            normalizer,
        }
    }

    pub async fn generate(&self, params: &RestaurantParams) -> GenerationOutcome {
        info!(cuisine = params.cuisine(), "Generating restaurant concept");
        let generator = SequentialGenerator::new(self.model.as_ref(), self.sampling);
        match generator.run(params).await {
            Ok(outputs) => {
                let concept = self.normalizer.normalize(&outputs);
                info!("Restaurant concept generated successfully");
                GenerationOutcome::Generated(concept)
            }
            Err(err) => {
                let reason = format!("{err:#}");
                warn!(error = %reason, "Generation failed; using fallback concept");
                GenerationOutcome::Fallback {
                    concept: fallback_concept(params),
                    reason,
                }
            }
        }
    }

    /// Generate from a cuisine alone, every other field at its default.
    pub async fn generate_for_cuisine(&self, cuisine: &str) -> GenerationOutcome {
        let params = RestaurantParams::default().with(ParamField::Cuisine, cuisine);
        self.generate(&params).await
    }
}
