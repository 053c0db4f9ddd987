pub mod categories;
pub mod categorizer;
pub mod classification;
pub mod error;
pub mod prelude;
pub mod prompt;
#[allow(unused_imports)]
pub(crate) use anyhow::{anyhow, bail, Result};
pub use prelude::*;
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn, Level};
