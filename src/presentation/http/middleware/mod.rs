pub mod error_responder;

pub use error_responder::{ErrorResponder, handle_panic, respond_to_failures};
