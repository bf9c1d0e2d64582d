//! SubjectMapper: translates payloads to store calls and store results to envelopes.

mod mapper;
mod validation;
pub use mapper::SubjectMapper;
pub use validation::RequestValidator;
