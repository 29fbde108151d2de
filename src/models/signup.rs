use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Marketplace role chosen on the first step of sign-up
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Role {
    #[serde(rename = "annotator")]
    Annotator,
    #[serde(rename = "project manager")]
    ProjectManager,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Annotator => "annotator",
            Role::ProjectManager => "project manager",
        }
    }

    /// Project managers need an invitation code before they can register
    pub fn requires_invitation(&self) -> bool {
        matches!(self, Role::ProjectManager)
    }
}

/// Text inputs of the sign-up form, keyed the same way the inputs are
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Email,
    Password,
    Name,
    Phone,
    Location,
    InvitationCode,
}

/// Everything the user typed or picked during one sign-up flow
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormData {
    pub email: String,
    pub password: String,
    pub role: Option<Role>,
    pub name: String,
    pub phone: String,
    pub domain: Vec<String>,
    pub lang: Vec<String>,
    pub location: String,
    pub invitation_code: String,
}

impl FormData {
    pub fn set_field(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Email => &mut self.email,
            FormField::Password => &mut self.password,
            FormField::Name => &mut self.name,
            FormField::Phone => &mut self.phone,
            FormField::Location => &mut self.location,
            FormField::InvitationCode => &mut self.invitation_code,
        };
        *slot = value;
    }

    /// Builds the body for `/api/auth/signup`.
    ///
    /// Annotators must have picked at least one domain, one language and a
    /// location. Project managers only send the account fields plus the code.
    pub fn signup_payload(&self) -> Result<SignupPayload, ValidationError> {
        match self.role {
            None => Err(ValidationError::RoleNotSelected),
            Some(Role::Annotator) => {
                if self.domain.is_empty() || self.lang.is_empty() || self.location.is_empty() {
                    return Err(ValidationError::MissingAnnotatorFields);
                }
                Ok(SignupPayload::Annotator(AnnotatorSignup {
                    email: self.email.clone(),
                    password: self.password.clone(),
                    role: Role::Annotator,
                    name: self.name.clone(),
                    phone: self.phone.clone(),
                    domain: self.domain.clone(),
                    lang: self.lang.clone(),
                    location: self.location.clone(),
                    invitation_code: self.invitation_code.clone(),
                }))
            }
            Some(Role::ProjectManager) => Ok(SignupPayload::ProjectManager(ProjectManagerSignup {
                email: self.email.clone(),
                password: self.password.clone(),
                role: Role::ProjectManager,
                name: self.name.clone(),
                invitation_code: self.invitation_code.clone(),
            })),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("No role selected")]
    RoleNotSelected,
    #[error("Domain, language and location are required for annotators")]
    MissingAnnotatorFields,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatorSignup {
    pub email: String,
    pub password: String,
    pub role: Role,
    pub name: String,
    pub phone: String,
    pub domain: Vec<String>,
    pub lang: Vec<String>,
    pub location: String,
    pub invitation_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectManagerSignup {
    pub email: String,
    pub password: String,
    pub role: Role,
    pub name: String,
    pub invitation_code: String,
}

/// Request body for `/api/auth/signup`; the shape depends on the role
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum SignupPayload {
    Annotator(AnnotatorSignup),
    ProjectManager(ProjectManagerSignup),
}

impl SignupPayload {
    pub fn role(&self) -> Role {
        match self {
            SignupPayload::Annotator(_) => Role::Annotator,
            SignupPayload::ProjectManager(_) => Role::ProjectManager,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvitationRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyInvitationRequest {
    pub code: String,
}

/// Failure body the auth endpoints return on non-2xx responses
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
