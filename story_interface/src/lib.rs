#[allow(unused_imports)]
pub(crate) use anyhow::{anyhow, bail, Error, Result};
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn, Level};

pub mod llms;
pub mod logging;
pub mod requests;

pub use async_trait::async_trait;

pub struct LlmInterface {}

impl LlmInterface {
    pub fn openai() -> llms::api::openai::builder::OpenAiBackendBuilder {
        llms::api::openai::builder::OpenAiBackendBuilder::default()
    }
}
