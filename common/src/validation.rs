//! Required-field checks for forms that opt into validation.

pub const INCOMPLETE: &str = "Please complete required fields";
pub const SUBMITTED: &str = "Submitted";

/// A form control as seen at submit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field<'a> {
    pub name: &'a str,
    pub value: &'a str,
    pub required: bool,
}

impl<'a> Field<'a> {
    pub fn required(name: &'a str, value: &'a str) -> Self {
        Self {
            name,
            value,
            required: true,
        }
    }

    pub fn optional(name: &'a str, value: &'a str) -> Self {
        Self {
            name,
            value,
            required: false,
        }
    }

    fn is_missing(&self) -> bool {
        self.required && self.value.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    Submitted,
    /// Submission cancelled. Names of the blank required fields, in form
    /// order; the first one should receive focus.
    Blocked { missing: Vec<String> },
}

impl FormOutcome {
    pub fn is_blocked(&self) -> bool {
        matches!(self, FormOutcome::Blocked { .. })
    }

    pub fn is_invalid(&self, name: &str) -> bool {
        match self {
            FormOutcome::Submitted => false,
            FormOutcome::Blocked { missing } => missing.iter().any(|m| m == name),
        }
    }
}

pub fn validate(fields: &[Field<'_>]) -> FormOutcome {
    let missing: Vec<String> = fields
        .iter()
        .filter(|f| f.is_missing())
        .map(|f| f.name.to_string())
        .collect();
    if missing.is_empty() {
        FormOutcome::Submitted
    } else {
        FormOutcome::Blocked { missing }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_counts_as_blank() {
        let outcome = validate(&[
            Field::required("name", "Ada"),
            Field::required("email", "   "),
            Field::optional("phone", ""),
        ]);
        assert_eq!(
            outcome,
            FormOutcome::Blocked {
                missing: vec!["email".into()]
            }
        );
        assert!(outcome.is_invalid("email"));
        assert!(!outcome.is_invalid("phone"));
    }

    #[test]
    fn filled_form_submits() {
        let outcome = validate(&[Field::required("name", "Ada"), Field::required("email", "a@b.c")]);
        assert!(!outcome.is_blocked());
    }
}
