// Composition root for the cart service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire them into the cart manager and expose the HTTP router.

pub mod config;
pub mod http;
pub mod persistence;
pub mod state;
