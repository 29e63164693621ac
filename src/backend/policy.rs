//! Ownership Policy
//!
//! One decision function for every owner-gated action on the catalogue.
//! Handlers resolve who owns the resource (a property's `owner_id`, or a
//! listing's owner through its property) and ask `authorize`; none of them
//! compares ids themselves.
//!
//! Rules:
//! - admin: allowed on everything
//! - seller: allowed iff the resolved owner is the actor
//! - everyone else: denied
//!
//! The route-level role guard normally stops buyers and agents earlier; the
//! policy denies them anyway so it is safe to call on its own.

use uuid::Uuid;

use crate::backend::error::BackendError;
use crate::backend::middleware::AuthenticatedUser;
use crate::shared::Role;

/// An owner-gated action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// List a property for sale
    CreateListing,
    UpdateListing,
    DeleteListing,
    /// Attach images to a listing
    ManageImages,
}

impl Action {
    fn denial_message(self) -> &'static str {
        match self {
            Action::CreateListing => "You can only list your own properties",
            Action::UpdateListing => "You can only edit your own listings",
            Action::DeleteListing => "You can only delete your own listings",
            Action::ManageImages => "You can only manage images on your own listings",
        }
    }
}

/// Decide whether `actor` may perform `action` on a resource owned by `owner`
///
/// `owner` is `None` when the resource could not be resolved; only an admin
/// passes in that case.
pub fn can_act(actor: &AuthenticatedUser, _action: Action, owner: Option<Uuid>) -> bool {
    match actor.role {
        Role::Admin => true,
        Role::Seller => owner == Some(actor.user_id),
        Role::Buyer | Role::Agent => false,
    }
}

/// `can_act`, turned into a `Forbidden` error on denial
pub fn authorize(
    actor: &AuthenticatedUser,
    action: Action,
    owner: Option<Uuid>,
) -> Result<(), BackendError> {
    if can_act(actor, action, owner) {
        Ok(())
    } else {
        tracing::warn!(
            user_id = %actor.user_id,
            role = %actor.role,
            ?action,
            "Ownership check failed"
        );
        Err(BackendError::forbidden(action.denial_message()))
    }
}
