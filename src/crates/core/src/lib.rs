// Sidekick Core Library - Platform-agnostic completion logic
// Three-layer architecture: Util -> Infrastructure -> Service

pub mod infrastructure; // Infrastructure layer - assistant service client, wire types
pub mod service; // Service layer - completion orchestration, configuration
pub mod util; // Utility layer - errors, helpers

// Export main types
pub use util::errors::*;

// Export infrastructure components
pub use infrastructure::assistant::{AssistantClient, RunStatus};

// Export service layer components
pub use service::completion::{CompletionConfig, CompletionOrchestrator, NO_RESPONSE_FALLBACK};

// Re-export shared DTOs so hosts depend on one crate
pub use sidekick_core_types::{CompletionRequest, CompletionResponse, MessageRole};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CORE_NAME: &str = "Sidekick Core";
