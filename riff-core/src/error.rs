//! Field level errors reported by option validation
use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
};

const MISSING_FIELD: &str = "missing field(s)";
const MISSING_ONE_OF: &str = "expected exactly one, got neither";
const MULTIPLE_ONE_OF: &str = "expected exactly one, got both";

/// A single problem with one or more fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Human readable description of the problem
    pub message: String,
    /// The fields the problem applies to, as named on the command line
    pub paths: Vec<String>,
    /// Optional extended explanation, rendered on its own line
    pub details: Option<String>,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.paths.is_empty() {
            write!(f, "{}", self.message)?;
        } else {
            write!(f, "{}: {}", self.message, self.paths.join(", "))?;
        }
        if let Some(details) = &self.details {
            write!(f, "\n{details}")?;
        }
        Ok(())
    }
}

/// An aggregate of field violations
///
/// Validation collects every problem instead of stopping at the first one,
/// so a `FieldError` is built up with [`FieldError::also`] and only turned
/// into a failure at the end via [`FieldError::into_result`].
///
/// When rendered, violations sharing a message and details are folded into one
/// line listing all of their paths, and lines are ordered by message.
///
/// ```
/// use riff_core::FieldError;
///
/// let errs = FieldError::empty()
///     .also(FieldError::missing_field("<name>"))
///     .also(FieldError::multiple_one_of(&["--image", "--function-ref"]))
///     .also(FieldError::missing_field("--item-name"));
/// assert_eq!(
///     errs.to_string(),
///     "expected exactly one, got both: --function-ref, --image\nmissing field(s): --item-name, <name>"
/// );
/// ```
#[derive(thiserror::Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("{}", render(self))]
pub struct FieldError {
    violations: Vec<Violation>,
}

impl FieldError {
    /// An error with no violations
    pub fn empty() -> Self {
        Self::default()
    }

    fn single(message: impl Into<String>, paths: Vec<String>) -> Self {
        Self {
            violations: vec![Violation {
                message: message.into(),
                paths,
                details: None,
            }],
        }
    }

    /// A required field was not provided
    pub fn missing_field(field: &str) -> Self {
        Self::single(MISSING_FIELD, vec![field.to_string()])
    }

    /// None of a set of mutually exclusive fields was provided
    pub fn missing_one_of(fields: &[&str]) -> Self {
        Self::single(MISSING_ONE_OF, fields.iter().map(|f| f.to_string()).collect())
    }

    /// More than one of a set of mutually exclusive fields was provided
    pub fn multiple_one_of(fields: &[&str]) -> Self {
        Self::single(MULTIPLE_ONE_OF, fields.iter().map(|f| f.to_string()).collect())
    }

    /// A field was provided with a value that is not acceptable
    pub fn invalid_value(value: &str, field: &str) -> Self {
        Self::single(format!("invalid value: {value}"), vec![field.to_string()])
    }

    /// An element of a repeated field was provided with an unacceptable value
    pub fn invalid_array_value(value: &str, field: &str, index: usize) -> Self {
        Self::invalid_value(value, &format!("{field}[{index}]"))
    }

    /// Attach extended details to every violation in this error
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        let details = details.into();
        for v in &mut self.violations {
            v.details = Some(details.clone());
        }
        self
    }

    /// Merge the violations of `other` into this error
    #[must_use]
    pub fn also(mut self, other: FieldError) -> Self {
        for v in other.violations {
            if !self.violations.contains(&v) {
                self.violations.push(v);
            }
        }
        self
    }

    /// Whether no violations were recorded
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// The recorded violations in the order they were found
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// The violations as rendered: one per message and details, with sorted unique paths
    pub fn normalized(&self) -> Vec<Violation> {
        let mut merged: BTreeMap<(&str, Option<&str>), BTreeSet<&str>> = BTreeMap::new();
        for v in &self.violations {
            merged
                .entry((v.message.as_str(), v.details.as_deref()))
                .or_default()
                .extend(v.paths.iter().map(String::as_str));
        }
        merged
            .into_iter()
            .map(|((message, details), paths)| Violation {
                message: message.to_string(),
                paths: paths.into_iter().map(String::from).collect(),
                details: details.map(String::from),
            })
            .collect()
    }

    /// `Ok(())` when empty, otherwise `Err(self)`
    pub fn into_result(self) -> Result<(), FieldError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

fn render(err: &FieldError) -> String {
    err.normalized().iter().map(Violation::to_string).collect::<Vec<_>>().join("\n")
}
