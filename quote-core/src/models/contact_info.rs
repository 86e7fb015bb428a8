use std::fmt;

use serde::{Deserialize, Serialize};

/// Customer details collected on the contact step.
///
/// Name, phone, city and address are required and are only checked for
/// presence. Email is optional and never validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    pub phone: String,
    pub city: String,
    pub address: String,
    pub email: Option<String>,
}

/// Individual form fields of [`ContactInfo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactField {
    Name,
    Phone,
    City,
    Address,
    Email,
}

impl ContactField {
    /// Fields in the order the form asks for them.
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Phone,
        ContactField::City,
        ContactField::Email,
        ContactField::Address,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Phone => "Phone",
            Self::City => "City",
            Self::Address => "Address",
            Self::Email => "Email",
        }
    }

    pub fn is_required(&self) -> bool {
        !matches!(self, Self::Email)
    }
}

impl ContactInfo {
    /// Returns a copy with `field` set to `value`.
    ///
    /// A blank email clears it; other fields keep the text as typed.
    #[must_use]
    pub fn with_field(
        mut self,
        field: ContactField,
        value: impl Into<String>,
    ) -> Self {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Phone => self.phone = value,
            ContactField::City => self.city = value,
            ContactField::Address => self.address = value,
            ContactField::Email => {
                self.email = if value.trim().is_empty() {
                    None
                } else {
                    Some(value)
                }
            }
        }
        self
    }

    pub fn field(
        &self,
        field: ContactField,
    ) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Phone => &self.phone,
            ContactField::City => &self.city,
            ContactField::Address => &self.address,
            ContactField::Email => self.email.as_deref().unwrap_or(""),
        }
    }

    /// Required fields that are empty or whitespace-only.
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|field| field.is_required() && self.field(*field).trim().is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

impl fmt::Display for ContactInfo {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Name:     {}", self.name)?;
        writeln!(f, "Phone:    {}", self.phone)?;
        writeln!(f, "City:     {}", self.city)?;
        if let Some(email) = &self.email {
            writeln!(f, "Email:    {email}")?;
        }
        write!(f, "Address:  {}", self.address)
    }
}
