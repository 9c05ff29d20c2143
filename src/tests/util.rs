use std::collections::VecDeque;
use std::sync::Mutex;

use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;

use crate::ai::{LanguageModel, SamplingParams};
use crate::db::{connect_db, Database};

pub async fn init_test_db() -> Database {
    let db = connect_db("sqlite::memory:", 1)
        .await
        .expect("failed to create in-memory database");
    db.migrate().await.expect("failed to run migrations");
    db
}

/// Replies with canned completions in order and records every prompt it sees.
/// Errors once the script runs out.
#[derive(Default)]
pub struct ScriptedModel {
    responses: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedModel {
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: Mutex::new(responses.into_iter().map(Into::into).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LanguageModel for ScriptedModel {
    async fn complete(&self, prompt: &str, _sampling: &SamplingParams) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| anyhow!("scripted model has no more responses"))
    }
}

/// A model whose every call fails like an unreachable server.
pub struct UnavailableModel;

#[async_trait]
impl LanguageModel for UnavailableModel {
    async fn complete(&self, _prompt: &str, _sampling: &SamplingParams) -> Result<String> {
        bail!("connection refused")
    }
}
