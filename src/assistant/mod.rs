pub mod adapters;
pub mod endpoint;
pub mod error;
pub mod session;
pub mod telemetry;
pub mod types;

pub use endpoint::{EndpointReply, LanguageModelEndpoint};
pub use error::{EndpointError, EndpointErrorKind};
pub use session::{ChatSession, SessionLimits};
pub use types::{ConversationEntry, ConversationLog, Speaker, SubmitOutcome};
