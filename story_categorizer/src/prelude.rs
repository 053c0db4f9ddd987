pub use crate::{
    categories::{CategorySet, CategorySetError, DEFAULT_CATEGORIES},
    categorizer::{Categorizer, CategorizerBuilder, SAMPLE_STORY},
    classification::{ClassificationResult, UNCATEGORIZED},
    error::ServiceError,
};
pub use story_interface::{
    llms::{LlmApiConfigTrait, LlmBackend},
    logging::LoggingConfigTrait,
};
