use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// An issued training certificate, looked up by its normalized number on
/// the verification page and the API.
#[derive(Debug, Clone, Serialize)]
pub struct Certificate {
    pub id: i64,
    pub number: String,
    pub holder_name: String,
    pub program_title: String,
    pub issued_on: NaiveDate,
    pub expires_on: Option<NaiveDate>,
    pub revoked: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificateStanding {
    Valid,
    Expired,
    Revoked,
}

impl FromStr for CertificateStanding {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "valid" => Ok(Self::Valid),
            "expired" => Ok(Self::Expired),
            "revoked" => Ok(Self::Revoked),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for CertificateStanding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Valid => write!(f, "valid"),
            Self::Expired => write!(f, "expired"),
            Self::Revoked => write!(f, "revoked"),
        }
    }
}

impl Certificate {
    /// Standing as of `date`. Revocation wins over expiry; a certificate
    /// expiring on `date` is still valid on that day ("valid through").
    pub fn standing_on(&self, date: NaiveDate) -> CertificateStanding {
        if self.revoked {
            return CertificateStanding::Revoked;
        }
        match self.expires_on {
            Some(expires) if expires < date => CertificateStanding::Expired,
            _ => CertificateStanding::Valid,
        }
    }
}

/// A certificate paired with its standing at the moment it was checked.
#[derive(Debug, Clone, Serialize)]
pub struct Verification {
    pub certificate: Certificate,
    pub standing: CertificateStanding,
    pub checked_on: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct NewCertificate {
    pub number: String,
    pub holder_name: String,
    pub program_title: String,
    pub issued_on: String,
    pub expires_on: Option<String>,
    #[serde(default)]
    pub revoked: bool,
}
