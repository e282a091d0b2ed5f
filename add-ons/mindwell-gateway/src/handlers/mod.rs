//! Request handlers. Every business-logic failure is answered with supportive
//! content and HTTP 200; nothing here returns an error status.

pub(crate) mod mood;
pub(crate) mod resources;
pub(crate) mod wellness;
