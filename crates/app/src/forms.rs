//! Edit buffers behind the person and user forms.

use data::person::NewPerson;
use data::user::{NewUser, Role, User, UserUpdate};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} ist erforderlich")]
    Required(&'static str),
}

fn required(value: &str, field: &'static str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        Err(FormError::Required(field))
    } else {
        Ok(value.to_string())
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    /// `None` when the stored role is unknown to this client.
    pub role: Option<Role>,
    pub is_active: bool,
    pub can_take_duty: bool,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            phone_number: String::new(),
            role: Some(Role::Planner),
            is_active: true,
            can_take_duty: true,
        }
    }
}

impl UserForm {
    /// Prefilled from an existing user; the password always starts empty.
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            password: String::new(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone_number: user.phone_number.clone().unwrap_or_default(),
            role: user.role,
            is_active: user.is_active,
            can_take_duty: user.can_take_duty,
        }
    }

    pub fn to_new_user(&self) -> Result<NewUser, FormError> {
        if self.password.is_empty() {
            return Err(FormError::Required("Passwort"));
        }

        let role = self.role.ok_or(FormError::Required("Rolle"))?;

        Ok(NewUser {
            username: required(&self.username, "Benutzername")?,
            email: required(&self.email, "E-Mail")?,
            password: self.password.clone(),
            first_name: required(&self.first_name, "Vorname")?,
            last_name: required(&self.last_name, "Nachname")?,
            phone_number: optional(&self.phone_number),
            role,
            is_active: self.is_active,
            can_take_duty: self.can_take_duty,
        })
    }

    /// The username cannot change. An empty password keeps the current one,
    /// and so does an unknown role.
    pub fn to_update(&self) -> UserUpdate {
        UserUpdate {
            email: Some(self.email.trim().to_string()),
            first_name: Some(self.first_name.trim().to_string()),
            last_name: Some(self.last_name.trim().to_string()),
            phone_number: optional(&self.phone_number),
            role: self.role,
            is_active: Some(self.is_active),
            can_take_duty: Some(self.can_take_duty),
            password: (!self.password.is_empty()).then(|| self.password.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PersonForm {
    pub first_name: String,
    pub last_name: String,
    pub external_number: String,
}

impl PersonForm {
    pub fn to_new_person(&self) -> Result<NewPerson, FormError> {
        Ok(NewPerson {
            first_name: required(&self.first_name, "Vorname")?,
            last_name: required(&self.last_name, "Nachname")?,
            external_number: required(&self.external_number, "Nummer")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PasswordForm {
    pub old_password: String,
    pub new_password: String,
}

impl PasswordForm {
    pub fn is_complete(&self) -> bool {
        !self.old_password.is_empty() && !self.new_password.is_empty()
    }
}
