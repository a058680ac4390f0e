//! Contact and booking forms.
//!
//! Both forms are display-only: they describe labelled fields and a button
//! caption. There is no submission target and nothing is transmitted.

use serde::Serialize;

/// HTML input kind of a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Date,
    Time,
    /// Multi-line text area.
    Textarea,
}

impl FieldKind {
    /// Value for the `type` attribute of an `<input>`.
    #[must_use]
    pub const fn input_type(self) -> &'static str {
        match self {
            Self::Text | Self::Textarea => "text",
            Self::Email => "email",
            Self::Date => "date",
            Self::Time => "time",
        }
    }

    #[must_use]
    pub const fn is_textarea(self) -> bool {
        matches!(self, Self::Textarea)
    }
}

/// One labelled input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub placeholder: Option<&'static str>,
}

impl FormField {
    const fn new(
        id: &'static str,
        label: &'static str,
        kind: FieldKind,
        placeholder: Option<&'static str>,
    ) -> Self {
        Self {
            id,
            label,
            kind,
            placeholder,
        }
    }

    /// Placeholder text, empty when none.
    #[must_use]
    pub fn placeholder_text(&self) -> &'static str {
        self.placeholder.unwrap_or_default()
    }
}

/// A display-only form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub title: &'static str,
    pub fields: Vec<FormField>,
    pub submit_label: &'static str,
}

impl ContactForm {
    /// "Send Us a Message" form: name, email, subject, message.
    #[must_use]
    pub fn message() -> Self {
        Self {
            title: "Send Us a Message",
            fields: vec![
                FormField::new("name", "Name", FieldKind::Text, Some("Your Name")),
                FormField::new("email", "Email", FieldKind::Email, Some("your@email.com")),
                FormField::new(
                    "subject",
                    "Subject",
                    FieldKind::Text,
                    Some("How can we help you?"),
                ),
                FormField::new(
                    "message",
                    "Message",
                    FieldKind::Textarea,
                    Some("Your message here..."),
                ),
            ],
            submit_label: "Send Message",
        }
    }

    /// "Book an Appointment" form: name, date, time.
    #[must_use]
    pub fn booking() -> Self {
        Self {
            title: "Book an Appointment",
            fields: vec![
                FormField::new("name", "Name", FieldKind::Text, Some("Your Name")),
                FormField::new("date", "Date", FieldKind::Date, None),
                FormField::new("time", "Time", FieldKind::Time, None),
            ],
            submit_label: "Schedule Now",
        }
    }
}
