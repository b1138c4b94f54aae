mod gemini_client;
mod llm_client_factory;
mod mock_llm_client;
mod scaffold_llm_client;

pub use gemini_client::{GeminiClient, parse_generate_response};
pub use llm_client_factory::create_llm_client;
pub use mock_llm_client::{MockLlmClient, MockOutcome};
pub use scaffold_llm_client::ScaffoldLlmClient;
