use std::collections::BTreeMap;

use crate::error::{Error, Result, Violation};

/// Permitted values per request field.
#[derive(Debug, Clone, Default)]
pub struct AllowLists {
    fields: BTreeMap<&'static str, &'static [&'static str]>,
}

impl AllowLists {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the permitted set for `field`, replacing any previous one.
    pub fn field(mut self, field: &'static str, permitted: &'static [&'static str]) -> Self {
        self.fields.insert(field, permitted);
        self
    }

    pub fn permitted(&self, field: &str) -> Option<&'static [&'static str]> {
        self.fields.get(field).copied()
    }

    pub fn allows(&self, field: &str, value: &str) -> bool {
        self.permitted(field)
            .is_some_and(|p| p.iter().any(|x| *x == value))
    }

    /// Start collecting checks. Nothing fails until [`Validator::finish`].
    pub fn validator(&self) -> Validator<'_> {
        Validator {
            lists: self,
            violations: Vec::new(),
        }
    }
}

/// Accumulates violations so all bad values are reported together.
#[derive(Debug)]
pub struct Validator<'a> {
    lists: &'a AllowLists,
    violations: Vec<Violation>,
}

impl Validator<'_> {
    /// Check one value. A field without a registered set permits nothing.
    pub fn value(&mut self, field: &str, value: &str) -> &mut Self {
        if !self.lists.allows(field, value) {
            self.violations.push(Violation {
                field: field.to_string(),
                value: value.to_string(),
            });
        }
        self
    }

    /// Check every element of a list-valued field. An empty list is a violation.
    pub fn values<S: AsRef<str>>(&mut self, field: &str, values: &[S]) -> &mut Self {
        if values.is_empty() {
            self.violations.push(Violation {
                field: field.to_string(),
                value: String::new(),
            });
        }
        for v in values {
            self.value(field, v.as_ref());
        }
        self
    }

    pub fn finish(&mut self) -> Result<()> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(Error::Validation(std::mem::take(&mut self.violations)))
        }
    }
}

/// Single-field check without building an [`AllowLists`].
pub fn ensure_allowed(field: &str, value: &str, permitted: &[&str]) -> Result<()> {
    if permitted.contains(&value) {
        Ok(())
    } else {
        Err(Error::Validation(vec![Violation {
            field: field.to_string(),
            value: value.to_string(),
        }]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLORS: &[&str] = &["red", "green"];
    const SIZES: &[&str] = &["s", "m", "l"];

    fn lists() -> AllowLists {
        AllowLists::new().field("color", COLORS).field("size", SIZES)
    }

    #[test]
    fn all_valid() {
        let lists = lists();
        lists
            .validator()
            .value("color", "red")
            .values("size", &["s", "l"])
            .finish()
            .unwrap();
    }

    #[test]
    fn collects_every_violation() {
        let lists = lists();
        let err = lists
            .validator()
            .value("color", "blue")
            .values("size", &["m", "xl", "xxl"])
            .finish()
            .unwrap_err();
        let Error::Validation(vs) = err else {
            panic!("expected validation error, got {err:?}");
        };
        let got: Vec<_> = vs.iter().map(|v| (v.field.as_str(), v.value.as_str())).collect();
        assert_eq!(got, vec![("color", "blue"), ("size", "xl"), ("size", "xxl")]);
    }

    #[test]
    fn unknown_field_permits_nothing() {
        let lists = lists();
        assert!(!lists.allows("shape", "round"));
        assert!(lists.validator().value("shape", "round").finish().is_err());
    }

    #[test]
    fn empty_list_is_rejected() {
        let lists = lists();
        let empty: [&str; 0] = [];
        assert!(lists.validator().values("size", &empty).finish().is_err());
    }

    #[test]
    fn matching_is_exact() {
        assert!(ensure_allowed("color", "red", COLORS).is_ok());
        assert!(ensure_allowed("color", "Red", COLORS).is_err());
        assert!(ensure_allowed("color", "red ", COLORS).is_err());
    }
}
