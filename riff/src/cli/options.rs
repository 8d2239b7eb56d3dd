use riff_client::Clientset;
use riff_core::{validation, FieldError};

use super::{Validate, ALL_FLAG, ALL_NAMESPACES_FLAG, NAMESPACE_FLAG, NAMES_ARG, NAME_ARG};

fn validate_namespace(namespace: &Option<String>) -> FieldError {
    match namespace {
        Some(ns) => validation::namespace(ns, NAMESPACE_FLAG),
        None => FieldError::empty(),
    }
}

/// Namespace and name of the single resource a command acts on
#[derive(clap::Args, Debug, Default, Clone)]
pub struct ResourceOptions {
    /// Kubernetes namespace, defaulting to the kubeconfig context's namespace
    #[arg(long, short = 'n', value_name = "name")]
    pub namespace: Option<String>,

    /// Name of the resource
    #[arg(value_name = "name")]
    pub name: Option<String>,
}

impl ResourceOptions {
    /// The namespace to act in, falling back to the clientset's default
    pub fn namespace<'a>(&'a self, c: &'a Clientset) -> &'a str {
        self.namespace.as_deref().unwrap_or_else(|| c.default_namespace())
    }

    /// The resource name; only meaningful once the options have validated
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

impl Validate for ResourceOptions {
    fn validate(&self) -> FieldError {
        let errs = validate_namespace(&self.namespace);
        match self.name.as_deref() {
            None | Some("") => errs.also(FieldError::missing_field(NAME_ARG)),
            Some(name) => errs.also(validation::k8s_name(name, NAME_ARG)),
        }
    }
}

/// Scope of a list command
#[derive(clap::Args, Debug, Default, Clone)]
pub struct ListOptions {
    /// Kubernetes namespace, defaulting to the kubeconfig context's namespace
    #[arg(long, short = 'n', value_name = "name")]
    pub namespace: Option<String>,

    /// List resources in every namespace
    #[arg(long, short = 'A')]
    pub all_namespaces: bool,
}

impl ListOptions {
    /// The namespace to list in, or `None` when listing across all namespaces
    pub fn namespace<'a>(&'a self, c: &'a Clientset) -> Option<&'a str> {
        if self.all_namespaces {
            None
        } else {
            Some(self.namespace.as_deref().unwrap_or_else(|| c.default_namespace()))
        }
    }
}

impl Validate for ListOptions {
    fn validate(&self) -> FieldError {
        let errs = validate_namespace(&self.namespace);
        if self.namespace.is_some() && self.all_namespaces {
            errs.also(FieldError::multiple_one_of(&[NAMESPACE_FLAG, ALL_NAMESPACES_FLAG]))
        } else {
            errs
        }
    }
}

/// Targets of a delete command
#[derive(clap::Args, Debug, Default, Clone)]
pub struct DeleteOptions {
    /// Kubernetes namespace, defaulting to the kubeconfig context's namespace
    #[arg(long, short = 'n', value_name = "name")]
    pub namespace: Option<String>,

    /// Names of the resources to delete
    #[arg(value_name = "name")]
    pub names: Vec<String>,

    /// Delete every resource of this type in the namespace
    #[arg(long)]
    pub all: bool,
}

impl DeleteOptions {
    /// The namespace to delete from, falling back to the clientset's default
    pub fn namespace<'a>(&'a self, c: &'a Clientset) -> &'a str {
        self.namespace.as_deref().unwrap_or_else(|| c.default_namespace())
    }
}

impl Validate for DeleteOptions {
    fn validate(&self) -> FieldError {
        let errs = validate_namespace(&self.namespace);
        let errs = match (self.all, self.names.is_empty()) {
            (true, false) => errs.also(FieldError::multiple_one_of(&[ALL_FLAG, NAMES_ARG])),
            (false, true) => errs.also(FieldError::missing_one_of(&[ALL_FLAG, NAMES_ARG])),
            _ => errs,
        };
        errs.also(validation::k8s_names(&self.names, NAMES_ARG))
    }
}
