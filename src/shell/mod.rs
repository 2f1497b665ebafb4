// Composition root.
//
// Responsibilities
// - Read settings from the environment.
// - Wire the in-memory adapters into the use case handlers.
// - Expose the handlers over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
