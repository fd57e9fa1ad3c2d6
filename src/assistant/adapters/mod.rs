pub mod generative_language;

pub use generative_language::GenerativeLanguageEndpoint;
