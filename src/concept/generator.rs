use std::collections::BTreeMap;

use anyhow::{Context, Result};
use tracing::{debug, instrument, trace};

use super::model::{StageOutputs, DESCRIPTION_KEY, MENU_KEY, NAME_KEY};
use super::params::RestaurantParams;
use crate::ai::prompts::{DESCRIPTION_PROMPT, MENU_PROMPT, NAME_PROMPT};
use crate::ai::template::PromptTemplate;
use crate::ai::{LanguageModel, SamplingParams};

/// One prompt and the key its completion is stored under.
#[derive(Debug, Clone, Copy)]
pub struct Stage {
    pub output_key: &'static str,
    pub prompt: PromptTemplate,
}

pub const STAGES: [Stage; 3] = [
    Stage {
        output_key: NAME_KEY,
        prompt: NAME_PROMPT,
    },
    Stage {
        output_key: DESCRIPTION_KEY,
        prompt: DESCRIPTION_PROMPT,
    },
    Stage {
        output_key: MENU_KEY,
        prompt: MENU_PROMPT,
    },
];

/// Runs stages in order, feeding each completion into the next stage's context.
pub struct SequentialGenerator<'a> {
    model: &'a dyn LanguageModel,
    sampling: SamplingParams,
    stages: &'a [Stage],
}

impl<'a> SequentialGenerator<'a> {
    pub fn new(model: &'a dyn LanguageModel, sampling: SamplingParams) -> Self {
        Self::with_stages(model, sampling, &STAGES)
    }

    pub fn with_stages(
        model: &'a dyn LanguageModel,
        sampling: SamplingParams,
        stages: &'a [Stage],
    ) -> Self {
        Self {
            model,
            sampling,
            stages,
        }
    }

    /// Execute every stage. The first failing stage aborts the run.
    #[instrument(level = "debug", skip_all, fields(cuisine = params.cuisine()))]
    pub async fn run(&self, params: &RestaurantParams) -> Result<StageOutputs> {
        let mut context: BTreeMap<String, String> = params
            .vars()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let mut outputs = StageOutputs::new();

        for stage in self.stages {
            let prompt = stage
                .prompt
                .render(&context)
                .with_context(|| format!("rendering `{}` prompt", stage.output_key))?;
            debug!(stage = stage.output_key, "running stage");
            let text = self
                .model
                .complete(&prompt, &self.sampling)
                .await
                .with_context(|| format!("stage `{}` failed", stage.output_key))?;
            trace!(stage = stage.output_key, text = %text, "stage output");
            context.insert(stage.output_key.to_string(), text.clone());
            outputs.insert(stage.output_key, text);
        }

        Ok(outputs)
    }
}
