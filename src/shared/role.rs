//! Account roles.
//!
//! Every user holds exactly one role. The set is fixed; anything else coming
//! in from a request is rejected with `Invalid role`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shared::error::SharedError;

/// Role of a user account.
///
/// Stored as lowercase text in the `users.role` column and embedded in
/// session tokens.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Buyer,
    Seller,
    Agent,
    Admin,
}

impl Role {
    /// Every role, in privilege order.
    pub const ALL: [Role; 4] = [Role::Buyer, Role::Seller, Role::Agent, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Buyer => "buyer",
            Role::Seller => "seller",
            Role::Agent => "agent",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buyer" => Ok(Role::Buyer),
            "seller" => Ok(Role::Seller),
            "agent" => Ok(Role::Agent),
            "admin" => Ok(Role::Admin),
            _ => Err(SharedError::validation("role", "Invalid role")),
        }
    }
}
