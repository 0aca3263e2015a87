//! Field identifiers and the form value record

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every named slot of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Email,
    CompanyName,
    Website,
    Revenue,
    StoreName,
    Description,
    Password,
    ConfirmPassword,
    /// Generic slot for a failed hand-off after validation passed
    Submit,
}

impl Field {
    /// Input fields in display order (the submit slot is not an input)
    pub const INPUTS: [Field; 8] = [
        Field::Email,
        Field::CompanyName,
        Field::Website,
        Field::StoreName,
        Field::Password,
        Field::ConfirmPassword,
        Field::Description,
        Field::Revenue,
    ];

    /// Stable key used in serialized results
    pub fn key(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::CompanyName => "companyName",
            Self::Website => "website",
            Self::Revenue => "revenue",
            Self::StoreName => "storeName",
            Self::Description => "description",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::Submit => "submit",
        }
    }

    /// Human name used inside error messages
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::CompanyName => "Company Name",
            Self::Website => "Website",
            Self::Revenue => "Estimated Annual Revenue",
            Self::StoreName => "Store Name",
            Self::Description => "Description",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
            Self::Submit => "Submit",
        }
    }

    /// Label rendered above the input
    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email Id*",
            Self::CompanyName => "Company Name*",
            Self::Website => "Website Link (If Any)",
            Self::Revenue => "Estimated Annual Revenue*",
            Self::StoreName => "Store Name*",
            Self::Description => "Description*",
            Self::Password => "Password*",
            Self::ConfirmPassword => "Confirm Password*",
            Self::Submit => "Create Account",
        }
    }

    /// Placeholder shown while the input is empty
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Email => "demo@company.com",
            Self::CompanyName => "Demo Inc.",
            Self::Website => "http://example.com",
            Self::StoreName => "My Store",
            Self::Description => "Describe your store",
            Self::Password | Self::ConfirmPassword => "******",
            Self::Revenue | Self::Submit => "",
        }
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Description)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Estimated annual revenue buckets offered by the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevenueBucket {
    #[serde(rename = "0-10000")]
    UpTo10K,
    #[serde(rename = "10000-100000")]
    UpTo100K,
    #[serde(rename = "100000-1M")]
    UpTo1M,
    #[serde(rename = "1M-10M")]
    UpTo10M,
    #[serde(rename = "10+")]
    Above10M,
}

impl RevenueBucket {
    pub const ALL: [RevenueBucket; 5] = [
        Self::UpTo10K,
        Self::UpTo100K,
        Self::UpTo1M,
        Self::UpTo10M,
        Self::Above10M,
    ];

    /// Every accepted label, in display order
    pub const LABELS: [&'static str; 5] = ["0-10000", "10000-100000", "100000-1M", "1M-10M", "10+"];

    pub fn label(&self) -> &'static str {
        match self {
            Self::UpTo10K => "0-10000",
            Self::UpTo100K => "10000-100000",
            Self::UpTo1M => "100000-1M",
            Self::UpTo10M => "1M-10M",
            Self::Above10M => "10+",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown revenue bucket: {0}")]
pub struct UnknownRevenueBucket(pub String);

impl FromStr for RevenueBucket {
    type Err = UnknownRevenueBucket;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|b| b.label() == s)
            .ok_or_else(|| UnknownRevenueBucket(s.to_string()))
    }
}

/// Snapshot of every input value, recreated per validation pass
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormValues {
    pub email: String,
    pub company_name: String,
    pub website: String,
    pub revenue: String,
    pub store_name: String,
    pub description: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormValues {
    /// Raw value of a field; the submit slot has none
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::CompanyName => &self.company_name,
            Field::Website => &self.website,
            Field::Revenue => &self.revenue,
            Field::StoreName => &self.store_name,
            Field::Description => &self.description,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::Submit => "",
        }
    }

    /// Copy with both password fields masked, safe to log
    pub fn redacted(&self) -> Self {
        Self {
            password: mask(&self.password),
            confirm_password: mask(&self.confirm_password),
            ..self.clone()
        }
    }
}

fn mask(secret: &str) -> String {
    if secret.is_empty() {
        String::new()
    } else {
        "[redacted]".to_string()
    }
}

impl fmt::Debug for FormValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shown = self.redacted();
        f.debug_struct("FormValues")
            .field("email", &shown.email)
            .field("company_name", &shown.company_name)
            .field("website", &shown.website)
            .field("revenue", &shown.revenue)
            .field("store_name", &shown.store_name)
            .field("description", &shown.description)
            .field("password", &shown.password)
            .field("confirm_password", &shown.confirm_password)
            .finish()
    }
}
