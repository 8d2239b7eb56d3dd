//! Conversions from validated flag values into Kubernetes types
use k8s_openapi::api::core::v1::EnvVar;

/// Parse a `KEY=VALUE` entry into an [`EnvVar`]
///
/// Only the first `=` separates key from value, so values may themselves contain `=`.
/// Entries are expected to have passed [`validation::env_var`](crate::validation::env_var);
/// an entry without `=` yields a variable with an empty value.
pub fn env_var(env: &str) -> EnvVar {
    let (name, value) = env.split_once('=').unwrap_or((env, ""));
    EnvVar {
        name: name.to_string(),
        value: Some(value.to_string()),
        value_from: None,
    }
}

/// Parse repeated `KEY=VALUE` entries, preserving their order
pub fn env_vars(envs: &[String]) -> Vec<EnvVar> {
    envs.iter().map(|e| env_var(e)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_equals() {
        let env = env_var("JAVA_OPTS=-Dfoo=bar");
        assert_eq!(env.name, "JAVA_OPTS");
        assert_eq!(env.value.as_deref(), Some("-Dfoo=bar"));
        assert!(env.value_from.is_none());
    }

    #[test]
    fn keeps_input_order() {
        let envs = env_vars(&["B=2".into(), "A=1".into()]);
        let names: Vec<_> = envs.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["B", "A"]);
    }
}
