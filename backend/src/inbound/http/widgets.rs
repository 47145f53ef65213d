//! Field widgets: presentational leaves of the candidate form.
//!
//! Each widget receives the field name, its placeholder, the current value
//! and an optional error message. Edits travel back as `name=value` pairs in
//! the form post, which the handler applies through the form controller.

use askama::Template;

use crate::domain::{CandidateField, FormController, JOB_ROLE_OPTIONS};

/// Single-line text input.
#[derive(Debug, Template)]
#[template(path = "widgets/input.html")]
pub struct TextInput<'a> {
    pub name: &'static str,
    pub input_type: &'static str,
    pub placeholder: &'static str,
    pub value: &'a str,
    pub error: Option<&'a str>,
}

/// Multi-line text input.
#[derive(Debug, Template)]
#[template(path = "widgets/textarea.html")]
pub struct TextArea<'a> {
    pub name: &'static str,
    pub placeholder: &'static str,
    pub value: &'a str,
    pub error: Option<&'a str>,
}

/// One rendered `<option>` of a [`Select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Job role selector. Never shows an error: any role is accepted.
#[derive(Debug, Template)]
#[template(path = "widgets/select.html")]
pub struct Select {
    pub name: &'static str,
    pub options: Vec<SelectOption>,
}

impl Select {
    /// Selector over the job role catalogue with `current` preselected.
    pub fn job_role(current: &str) -> Self {
        let options = JOB_ROLE_OPTIONS
            .iter()
            .map(|option| SelectOption {
                value: option.value,
                label: option.label,
                selected: option.value == current,
            })
            .collect();
        Self {
            name: CandidateField::JobRole.as_str(),
            options,
        }
    }
}

/// The six widgets bound to a form's current state.
#[derive(Debug)]
pub struct FormWidgets<'a> {
    pub job_role: Select,
    pub full_name: TextInput<'a>,
    pub email: TextInput<'a>,
    pub address: TextArea<'a>,
    pub qualification: TextArea<'a>,
    pub comments: TextArea<'a>,
}

impl<'a> FormWidgets<'a> {
    /// Bind every widget to `form`'s values and errors.
    pub fn bind(form: &'a FormController) -> Self {
        let input = |field: CandidateField, input_type, placeholder| TextInput {
            name: field.as_str(),
            input_type,
            placeholder,
            value: form.value(field),
            error: form.error(field),
        };
        let area = |field: CandidateField, placeholder| TextArea {
            name: field.as_str(),
            placeholder,
            value: form.value(field),
            error: form.error(field),
        };
        Self {
            job_role: Select::job_role(form.value(CandidateField::JobRole)),
            full_name: input(CandidateField::FullName, "text", "Full Name"),
            email: input(CandidateField::Email, "email", "Email"),
            address: area(CandidateField::Address, "Address"),
            qualification: area(CandidateField::Qualification, "Qualification"),
            comments: area(CandidateField::Comments, "comments"),
        }
    }
}
