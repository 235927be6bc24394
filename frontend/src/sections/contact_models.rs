use std::collections::BTreeMap;
use std::rc::Rc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;
use yew::Reducible;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Company,
    LicenseType,
    Message,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Email,
        Field::Company,
        Field::LicenseType,
        Field::Message,
    ];

    /// The input's `name`/`id` attribute.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Company => "company",
            Field::LicenseType => "licenseType",
            Field::Message => "message",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    fn required_message(self) -> &'static str {
        match self {
            Field::Name => "Name is required",
            Field::Email => "Email is required",
            Field::Company => "Company is required",
            Field::LicenseType => "Please select a license type",
            Field::Message => "Message is required",
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("{}", .0.required_message())]
    Required(Field),
    #[error("Invalid email address")]
    InvalidEmail,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LicenseType {
    Microsoft,
    Adobe,
    Oracle,
    Sap,
    Autodesk,
    Other,
}

impl LicenseType {
    pub const ALL: [LicenseType; 6] = [
        LicenseType::Microsoft,
        LicenseType::Adobe,
        LicenseType::Oracle,
        LicenseType::Sap,
        LicenseType::Autodesk,
        LicenseType::Other,
    ];

    pub fn value(self) -> &'static str {
        match self {
            LicenseType::Microsoft => "microsoft",
            LicenseType::Adobe => "adobe",
            LicenseType::Oracle => "oracle",
            LicenseType::Sap => "sap",
            LicenseType::Autodesk => "autodesk",
            LicenseType::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LicenseType::Microsoft => "Microsoft",
            LicenseType::Adobe => "Adobe",
            LicenseType::Oracle => "Oracle",
            LicenseType::Sap => "SAP",
            LicenseType::Autodesk => "Autodesk",
            LicenseType::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.value() == value)
    }
}

/// Field-scoped validation errors, in form order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormErrors(BTreeMap<Field, FieldError>);

impl FormErrors {
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn clear(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub license_type: Option<LicenseType>,
    pub message: String,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::LicenseType => self.license_type.map(LicenseType::value).unwrap_or(""),
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Company => self.company = value,
            Field::LicenseType => self.license_type = LicenseType::from_value(&value),
            Field::Message => self.message = value,
        }
    }

    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();

        for field in [Field::Name, Field::Company, Field::Message] {
            if self.value(field).trim().is_empty() {
                errors.insert(field, FieldError::Required(field));
            }
        }

        if self.email.trim().is_empty() {
            errors.insert(Field::Email, FieldError::Required(Field::Email));
        } else if !EMAIL_RE.is_match(&self.email) {
            errors.insert(Field::Email, FieldError::InvalidEmail);
        }

        if self.license_type.is_none() {
            errors.insert(Field::LicenseType, FieldError::Required(Field::LicenseType));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactFormState {
    pub form: ContactForm,
    pub errors: FormErrors,
    pub status: FormStatus,
}

pub enum FormAction {
    Edit(Field, String),
    Submit,
    /// The simulated request came back.
    Finished,
    /// Back to an empty form, from the thank-you panel.
    Reset,
}

impl Reducible for ContactFormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            FormAction::Edit(field, value) => {
                next.form.set(field, value);
                next.errors.clear(field);
            }
            FormAction::Submit => {
                if next.status != FormStatus::Editing {
                    return self;
                }
                match next.form.validate() {
                    Ok(()) => {
                        next.errors = FormErrors::default();
                        next.status = FormStatus::Submitting;
                    }
                    Err(errors) => {
                        log::debug!(
                            "Contact form rejected with {} errors: {:?}",
                            errors.len(),
                            errors.fields().map(Field::name).collect::<Vec<_>>()
                        );
                        next.errors = errors;
                    }
                }
            }
            FormAction::Finished => {
                if next.status != FormStatus::Submitting {
                    return self;
                }
                next.form = ContactForm::default();
                next.status = FormStatus::Submitted;
            }
            FormAction::Reset => {
                if next.status != FormStatus::Submitted {
                    return self;
                }
                next.status = FormStatus::Editing;
            }
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "John Doe".to_string(),
            email: "john@company.com".to_string(),
            company: "Acme Inc.".to_string(),
            license_type: Some(LicenseType::Adobe),
            message: "Ten unused seats".to_string(),
        }
    }

    #[test]
    fn test_empty_form_has_five_errors() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), 5);
        assert_eq!(errors.fields().collect::<Vec<_>>(), Field::ALL.to_vec());
        assert_eq!(
            errors.get(Field::LicenseType).unwrap().to_string(),
            "Please select a license type"
        );
        assert_eq!(errors.get(Field::Name).unwrap().to_string(), "Name is required");
    }

    #[test]
    fn test_whitespace_counts_as_empty() {
        let mut form = filled();
        form.company = "   ".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(Field::Company), Some(&FieldError::Required(Field::Company)));
    }

    #[test]
    fn test_email_pattern() {
        let mut form = filled();
        assert!(form.validate().is_ok());

        for bad in ["john@company", "johncompany.com", "john doe@company.com"] {
            form.email = bad.to_string();
            let errors = form.validate().unwrap_err();
            assert_eq!(errors.get(Field::Email), Some(&FieldError::InvalidEmail), "{bad}");
            assert_eq!(errors.get(Field::Email).unwrap().to_string(), "Invalid email address");
        }
    }

    #[test]
    fn test_license_type_from_select_value() {
        let mut form = filled();
        form.set(Field::LicenseType, "sap".to_string());
        assert_eq!(form.license_type, Some(LicenseType::Sap));
        assert_eq!(form.value(Field::LicenseType), "sap");

        form.set(Field::LicenseType, String::new());
        assert_eq!(form.license_type, None);
        assert_eq!(form.value(Field::LicenseType), "");
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in Field::ALL {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("phone"), None);
    }

    #[test]
    fn test_fixing_one_field_clears_only_its_error() {
        let state = Rc::new(ContactFormState::default());
        let state = state.reduce(FormAction::Submit);
        assert_eq!(state.errors.len(), 5);
        assert_eq!(state.status, FormStatus::Editing);

        let state = state.reduce(FormAction::Edit(Field::Name, "Jane".to_string()));
        assert_eq!(state.errors.len(), 4);
        assert!(state.errors.get(Field::Name).is_none());

        let state = state.reduce(FormAction::Submit);
        assert_eq!(state.errors.len(), 4);
        assert!(state.errors.get(Field::Name).is_none());
        assert!(state.errors.get(Field::Email).is_some());
    }

    #[test]
    fn test_submission_lifecycle() {
        let mut state = ContactFormState::default();
        state.form = filled();
        let state = Rc::new(state).reduce(FormAction::Submit);
        assert_eq!(state.status, FormStatus::Submitting);
        assert!(state.errors.is_empty());

        // double submit while in flight is a no-op
        let again = state.clone().reduce(FormAction::Submit);
        assert!(Rc::ptr_eq(&state, &again));

        let state = state.reduce(FormAction::Finished);
        assert_eq!(state.status, FormStatus::Submitted);
        assert_eq!(state.form, ContactForm::default());

        let state = state.reduce(FormAction::Reset);
        assert_eq!(state.status, FormStatus::Editing);
    }

    #[test]
    fn test_stray_timer_actions_are_ignored() {
        let state = Rc::new(ContactFormState::default());
        let next = state.clone().reduce(FormAction::Finished);
        assert!(Rc::ptr_eq(&state, &next));
        let next = state.clone().reduce(FormAction::Reset);
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn test_payload_uses_form_field_names() {
        let json = serde_json::to_value(filled()).unwrap();
        assert_eq!(json["licenseType"], "adobe");
        assert_eq!(json["email"], "john@company.com");
    }
}
