//! Validation of raw flag values
//!
//! Every helper returns a [`FieldError`] which is empty when the value is acceptable,
//! so results can be chained with [`FieldError::also`].
use crate::FieldError;

const DNS1123_LABEL_MAX_LENGTH: usize = 63;
const DNS1123_SUBDOMAIN_MAX_LENGTH: usize = 253;

const DNS1123_LABEL_DETAILS: &str = "a lowercase RFC 1123 label must consist of lower case alphanumeric \
    characters or '-', and must start and end with an alphanumeric character";
const DNS1123_SUBDOMAIN_DETAILS: &str = "a lowercase RFC 1123 subdomain must consist of lower case \
    alphanumeric characters, '-' or '.', and must start and end with an alphanumeric character";

fn is_dns1123_label(value: &str) -> bool {
    let alnum = |b: &u8| b.is_ascii_lowercase() || b.is_ascii_digit();
    let bytes = value.as_bytes();
    match (bytes.first(), bytes.last()) {
        (Some(first), Some(last)) => {
            bytes.len() <= DNS1123_LABEL_MAX_LENGTH
                && alnum(first)
                && alnum(last)
                && bytes.iter().all(|b| alnum(b) || *b == b'-')
        }
        _ => false,
    }
}

fn is_dns1123_subdomain(value: &str) -> bool {
    value.len() <= DNS1123_SUBDOMAIN_MAX_LENGTH && value.split('.').all(is_dns1123_label)
}

/// Validate a resource name
///
/// Names of riff resources follow the Kubernetes object name rules (RFC 1123 subdomain).
pub fn k8s_name(name: &str, field: &str) -> FieldError {
    if is_dns1123_subdomain(name) {
        FieldError::empty()
    } else {
        FieldError::invalid_value(name, field).with_details(DNS1123_SUBDOMAIN_DETAILS)
    }
}

/// Validate a list of resource names, reporting offenders by index
pub fn k8s_names(names: &[String], field: &str) -> FieldError {
    names
        .iter()
        .enumerate()
        .filter(|(_, name)| !is_dns1123_subdomain(name))
        .fold(FieldError::empty(), |errs, (i, name)| {
            errs.also(FieldError::invalid_array_value(name, field, i).with_details(DNS1123_SUBDOMAIN_DETAILS))
        })
}

/// Validate a namespace name (RFC 1123 label)
pub fn namespace(ns: &str, field: &str) -> FieldError {
    if is_dns1123_label(ns) {
        FieldError::empty()
    } else {
        FieldError::invalid_value(ns, field).with_details(DNS1123_LABEL_DETAILS)
    }
}

fn is_env_var(env: &str) -> bool {
    matches!(env.split_once('='), Some((key, _)) if !key.is_empty())
}

/// Validate a single `KEY=VALUE` environment entry
pub fn env_var(env: &str, field: &str) -> FieldError {
    if is_env_var(env) {
        FieldError::empty()
    } else {
        FieldError::invalid_value(env, field)
    }
}

/// Validate repeated `KEY=VALUE` environment entries, reporting offenders by index
pub fn env_vars(envs: &[String], field: &str) -> FieldError {
    envs.iter()
        .enumerate()
        .filter(|(_, env)| !is_env_var(env))
        .fold(FieldError::empty(), |errs, (i, env)| {
            errs.also(FieldError::invalid_array_value(env, field, i))
        })
}

/// Validate a `type/subtype` media type, optionally followed by `;` parameters
pub fn mime_type(value: &str, field: &str) -> FieldError {
    let essence = value.split(';').next().unwrap_or_default().trim();
    let valid = match essence.split_once('/') {
        Some((kind, subtype)) => {
            let token = |s: &str| !s.is_empty() && !s.contains(|c: char| c.is_whitespace() || c == '/');
            token(kind) && token(subtype)
        }
        None => false,
    };
    if valid {
        FieldError::empty()
    } else {
        FieldError::invalid_value(value, field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert!(k8s_name("my-function", "<name>").is_empty());
        assert!(k8s_name("a.b-c.d0", "<name>").is_empty());
        assert!(k8s_name("9lives", "<name>").is_empty());

        for bad in ["", "Upper", "trailing-", "-leading", "under_score", "dot..dot", ".x"] {
            let err = k8s_name(bad, "<name>");
            assert!(!err.is_empty(), "{bad:?} should be rejected");
            assert_eq!(err.violations()[0].paths, vec!["<name>"]);
        }
        assert!(!k8s_name(&"a".repeat(254), "<name>").is_empty());
    }

    #[test]
    fn name_lists_report_index() {
        let names = vec!["ok".to_string(), "Not_Ok".to_string()];
        let err = k8s_names(&names, "<name>");
        assert_eq!(err.violations().len(), 1);
        assert_eq!(err.violations()[0].paths, vec!["<name>[1]"]);
    }

    #[test]
    fn namespaces_are_labels() {
        assert!(namespace("default", "--namespace").is_empty());
        assert!(!namespace("has.dot", "--namespace").is_empty());
        assert!(!namespace(&"n".repeat(64), "--namespace").is_empty());
    }

    #[test]
    fn env_entries() {
        assert!(env_var("FOO=bar", "--env").is_empty());
        assert!(env_var("FOO=", "--env").is_empty());
        assert!(env_var("FOO=a=b", "--env").is_empty());
        assert!(!env_var("FOO", "--env").is_empty());
        assert!(!env_var("=bar", "--env").is_empty());

        let envs = vec!["A=1".to_string(), "B".to_string(), "C=3".to_string(), "=4".to_string()];
        let err = env_vars(&envs, "--env");
        let paths: Vec<_> = err.violations().iter().flat_map(|v| v.paths.clone()).collect();
        assert_eq!(paths, vec!["--env[1]", "--env[3]"]);
    }

    #[test]
    fn media_types() {
        assert!(mime_type("application/json", "--content-type").is_empty());
        assert!(mime_type("text/plain; charset=utf-8", "--content-type").is_empty());
        assert!(!mime_type("json", "--content-type").is_empty());
        assert!(!mime_type("application/", "--content-type").is_empty());
        assert!(!mime_type("a/b/c", "--content-type").is_empty());
    }
}
