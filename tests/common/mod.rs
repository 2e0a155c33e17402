// Shared fixtures for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use essay_engine::providers::{GenerationError, TextGenerator};

pub const INTRODUCTION: &str = "Cities across the world are rethinking how people move through dense streets. \
This essay will examine why protected bike lanes deserve public investment and how they reshape daily travel. \
Protected bike lanes make cities safer, healthier, and more efficient for everyone.";

pub const THESIS: &str = "Protected bike lanes make cities safer, healthier, and more efficient for everyone.";

/// Five paragraphs: introduction, three full body paragraphs, conclusion.
pub const ESSAY: &str = "Cities across the world are rethinking how people move through dense streets. \
This essay will examine why protected bike lanes deserve public investment and how they reshape daily travel. \
Protected bike lanes make cities safer, healthier, and more efficient for everyone.

For example, physical barriers between cyclists and traffic sharply reduce serious injuries on busy roads. \
Studies from several cities show fewer collisions after protected lanes open. \
Drivers also slow down when the street feels narrower and more predictable. \
Pedestrians benefit as well, because shorter crossing distances give them more time and space at every intersection.

Moreover, safe lanes encourage residents to replace short car trips with regular cycling. \
Daily exercise lowers the risk of heart disease and improves mental health. \
Cleaner air near schools and homes helps children breathe more easily. \
Public health budgets gain when fewer people need treatment for preventable illnesses. \
Doctors in many regions now recommend cycling as part of routine care.

However, critics argue that bike lanes remove parking and hurt local shops along commercial streets. \
Evidence from retail surveys suggests the opposite effect over time. \
Cyclists visit nearby stores more often and spend more money across each month. \
Freight deliveries can still use loading zones placed at the ends of each block.

In conclusion, protected bike lanes deliver safer streets, healthier residents, and stronger local economies. \
Cities that invest in them today will therefore enjoy lasting benefits for decades.";

/// `ESSAY` with lowercase sentence openings and stray double spaces.
pub const RAW_ESSAY: &str = "cities across the world are rethinking how people move through dense streets.  \
this essay will examine why protected bike lanes deserve public investment and how they reshape daily travel. \
protected bike lanes make cities safer, healthier, and more efficient for everyone.

for example, physical barriers between cyclists and traffic sharply reduce serious injuries on busy roads. \
studies from several cities show fewer collisions after protected lanes open. \
drivers also slow down when the street feels narrower and more predictable. \
pedestrians benefit as well, because shorter crossing distances give them more time and space at every intersection.

moreover, safe lanes encourage residents to replace short car trips with regular cycling. \
daily exercise lowers the risk of heart disease and improves mental health.  \
cleaner air near schools and homes helps children breathe more easily. \
public health budgets gain when fewer people need treatment for preventable illnesses. \
doctors in many regions now recommend cycling as part of routine care.

however, critics argue that bike lanes remove parking and hurt local shops along commercial streets. \
evidence from retail surveys suggests the opposite effect over time. \
cyclists visit nearby stores more often and spend more money across each month. \
freight deliveries can still use loading zones placed at the ends of each block.

in conclusion, protected bike lanes deliver safer streets, healthier residents, and stronger local economies. \
cities that invest in them today will therefore enjoy lasting benefits for decades.";

/// Replays canned replies in order and records every prompt it receives.
pub struct ScriptedGenerator {
    model: String,
    replies: Mutex<VecDeque<Result<String, GenerationError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new(model: &str, replies: Vec<Result<String, GenerationError>>) -> Self {
        Self {
            model: model.to_string(),
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn replying(model: &str, reply: &str) -> Self {
        Self::new(model, vec![Ok(reply.to_string())])
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn call(&self, prompt: &str) -> Result<String, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(GenerationError::EmptyResponse))
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}
