//! Types and client-less behavior for the riff custom resources
//!
//! This crate holds the custom resource types of the riff api groups,
//! together with the field-level error type and validation helpers used by
//! the `riff` command line before anything is sent to the cluster.
//!
//! - [`build`] with [`Application`](build::Application) and [`Function`](build::Function)
//! - [`request`] with [`RequestProcessor`](request::RequestProcessor)
//! - [`streaming`] with [`Stream`](streaming::Stream)
//! - [`core`](mod@core) and [`knative`] with the runtime deployers, addressed dynamically
//! - [`validation`] and [`parsers`] for raw flag values

pub mod build;
pub mod core;
pub mod knative;
pub mod parsers;
pub mod request;
pub mod status;
pub mod streaming;
pub mod validation;

mod error;
pub use error::{FieldError, Violation};

/// The api groups served by a riff installation
pub const GROUPS: [&str; 5] = [build::GROUP, core::GROUP, knative::GROUP, request::GROUP, streaming::GROUP];
