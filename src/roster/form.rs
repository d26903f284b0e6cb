//! Transient input state for adding and editing records.
//!
//! A submission is built from whatever the form holds at the moment of submit.
//! The form belongs to the session rather than the store: it is seeded when an
//! edit begins and cleared after a commit or a cancel.

use crate::image::{ImagePoll, PendingImage};
use crate::model::{Employee, EmployeeFields};
use std::fmt;
use std::str::FromStr;

/// A text input of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Surname,
    Email,
    Telephone,
    Position,
    IdentityNumber,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Surname,
        FormField::Email,
        FormField::Telephone,
        FormField::Position,
        FormField::IdentityNumber,
    ];

    /// Label as shown to the user; required inputs are starred.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Name *",
            FormField::Surname => "Surname *",
            FormField::Email => "Email Address *",
            FormField::Telephone => "Telephone",
            FormField::Position => "Employee Position *",
            FormField::IdentityNumber => "Identity Number",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Surname => "surname",
            FormField::Email => "email",
            FormField::Telephone => "telephone",
            FormField::Position => "position",
            FormField::IdentityNumber => "identity-number",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "name" => Ok(FormField::Name),
            "surname" => Ok(FormField::Surname),
            "email" => Ok(FormField::Email),
            "telephone" | "phone" => Ok(FormField::Telephone),
            "position" => Ok(FormField::Position),
            "identity-number" | "number" => Ok(FormField::IdentityNumber),
            other => Err(format!("Unknown form field: {}", other)),
        }
    }
}

/// The image input of the form.
#[derive(Debug, Default)]
pub enum ImageSlot {
    #[default]
    Empty,
    Pending(PendingImage),
    Ready(String),
}

impl ImageSlot {
    pub fn is_pending(&self) -> bool {
        matches!(self, ImageSlot::Pending(_))
    }
}

#[derive(Debug, Default)]
pub struct EmployeeForm {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub telephone: String,
    pub position: String,
    pub identity_number: String,
    image: ImageSlot,
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// A form pre-populated with the current values of `employee`.
    pub fn seeded(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            surname: employee.surname.clone(),
            email: employee.email.clone(),
            telephone: employee.telephone.clone().unwrap_or_default(),
            position: employee.position.clone(),
            identity_number: employee.identity_number.clone().unwrap_or_default(),
            image: employee
                .image
                .clone()
                .map_or(ImageSlot::Empty, ImageSlot::Ready),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Surname => &self.surname,
            FormField::Email => &self.email,
            FormField::Telephone => &self.telephone,
            FormField::Position => &self.position,
            FormField::IdentityNumber => &self.identity_number,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Surname => self.surname = value,
            FormField::Email => self.email = value,
            FormField::Telephone => self.telephone = value,
            FormField::Position => self.position = value,
            FormField::IdentityNumber => self.identity_number = value,
        }
    }

    pub fn is_blank(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_empty())
            && matches!(self.image, ImageSlot::Empty)
    }

    pub fn image(&self) -> &ImageSlot {
        &self.image
    }

    /// Replaces the image input; a previous pending encoding is cancelled.
    pub fn attach_image(&mut self, pending: PendingImage) {
        self.image = ImageSlot::Pending(pending);
    }

    pub fn set_image(&mut self, encoded: impl Into<String>) {
        self.image = ImageSlot::Ready(encoded.into());
    }

    pub fn clear_image(&mut self) {
        self.image = ImageSlot::Empty;
    }

    /// Moves a finished encoding into the form. Returns the failure message if
    /// the encoding failed, in which case the image input is emptied.
    pub fn refresh_image(&mut self) -> Option<String> {
        let ImageSlot::Pending(pending) = &self.image else {
            return None;
        };
        match pending.poll() {
            ImagePoll::Pending => None,
            ImagePoll::Ready(encoded) => {
                self.image = ImageSlot::Ready(encoded);
                None
            }
            ImagePoll::Failed(reason) => {
                self.image = ImageSlot::Empty;
                Some(reason)
            }
        }
    }

    /// The candidate this form would submit right now.
    ///
    /// Blank optional inputs become `None`. An image that is still encoding is
    /// left out.
    pub fn to_fields(&self) -> EmployeeFields {
        EmployeeFields {
            name: self.name.clone(),
            surname: self.surname.clone(),
            email: self.email.clone(),
            telephone: optional(&self.telephone),
            position: self.position.clone(),
            identity_number: optional(&self.identity_number),
            image: match &self.image {
                ImageSlot::Ready(encoded) => Some(encoded.clone()),
                ImageSlot::Empty | ImageSlot::Pending(_) => None,
            },
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn optional(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
