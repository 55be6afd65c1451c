//! LLM Provider protocol definitions.
//!
//! Providers connect to LLM backends (a mock, OpenAI, OpenRouter) and turn a
//! single prompt into a [`NormalizedResult`].

mod credentials;
mod request;
mod response;
mod traits;

pub use credentials::*;
pub use request::*;
pub use response::*;
pub use traits::*;
