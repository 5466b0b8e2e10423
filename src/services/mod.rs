pub mod groq_client;
pub mod prompt;
pub mod sse;

pub use groq_client::GroqClient;
pub use prompt::{render_itinerary_prompt, DEFAULT_MODEL, SYSTEM_INSTRUCTION};
