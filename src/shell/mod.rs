// Composition root for the users service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the concrete repository and wire it into the service.
// - Expose the HTTP router.

pub mod config;
pub mod http;
pub mod state;
