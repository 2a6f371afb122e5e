//! Repository and boundary traits.

pub mod chat_upstream;
pub mod suggestion_repository;
pub mod vote_repository;

pub use chat_upstream::ChatUpstream;
pub use suggestion_repository::SuggestionRepository;
pub use vote_repository::VoteRepository;

#[cfg(test)]
pub use chat_upstream::MockChatUpstream;
#[cfg(test)]
pub use suggestion_repository::MockSuggestionRepository;
#[cfg(test)]
pub use vote_repository::MockVoteRepository;
