//! Shared plumbing for riff commands: flag names, common options, validation and output
use riff_core::FieldError;

use crate::error::{Error, Result};

mod config;
pub use config::Config;
mod options;
pub use options::{DeleteOptions, ListOptions, ResourceOptions};
mod table;
pub use table::Table;

pub const NAME_ARG: &str = "<name>";
pub const NAMES_ARG: &str = "<name(s)>";

pub const ALL_FLAG: &str = "--all";
pub const ALL_NAMESPACES_FLAG: &str = "--all-namespaces";
pub const APPLICATION_REF_FLAG: &str = "--application-ref";
pub const CONTENT_TYPE_FLAG: &str = "--content-type";
pub const ENV_FLAG: &str = "--env";
pub const FUNCTION_REF_FLAG: &str = "--function-ref";
pub const GIT_REPO_FLAG: &str = "--git-repo";
pub const GIT_REVISION_FLAG: &str = "--git-revision";
pub const IMAGE_FLAG: &str = "--image";
pub const ITEM_FLAG: &str = "--item-name";
pub const NAMESPACE_FLAG: &str = "--namespace";
pub const PROVIDER_FLAG: &str = "--provider";

/// Options that can check themselves before anything is sent to the cluster
pub trait Validate {
    /// Collect every problem with the options; empty when they are usable
    fn validate(&self) -> FieldError;
}

/// Turn validation problems into an [`Error::Validation`]
pub fn validate_options(opts: &impl Validate) -> Result<()> {
    opts.validate().into_result().map_err(Error::Validation)
}

/// The value of an optional string flag, treating an empty value as unset
pub fn flag_value(flag: &Option<String>) -> Option<&str> {
    flag.as_deref().filter(|v| !v.is_empty())
}

/// Require a string flag to be set
pub fn required(flag: &Option<String>, name: &str) -> FieldError {
    if flag_value(flag).is_some() {
        FieldError::empty()
    } else {
        FieldError::missing_field(name)
    }
}

/// Write a line of command output
macro_rules! outln {
    ($out:expr, $($arg:tt)*) => {
        writeln!($out, $($arg)*).map_err($crate::error::Error::Output)
    };
}
pub(crate) use outln;
