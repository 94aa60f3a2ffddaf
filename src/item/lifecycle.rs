//! # Item Lifecycle
//!
//! Review and claim transitions: `pending -> verified -> claimed`.
//!
//! The raw status setter on the store accepts any target; these rules back the
//! named actions (approve, reject, claim) that the review and detail screens
//! offer.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use thiserror::Error;

use super::{Item, ItemKind, Status};

/// A named lifecycle action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Admin accepts a pending report
    Approve,
    /// Admin declines a pending report
    Reject,
    /// A found item is handed back to its owner
    Claim,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Approve => write!(f, "approve"),
            Self::Reject => write!(f, "reject"),
            Self::Claim => write!(f, "claim"),
        }
    }
}

/// Why a lifecycle action is not allowed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("cannot {action} item '{id}': status is {status}")]
    WrongStatus {
        id: String,
        action: Action,
        status: Status,
    },
    #[error("cannot claim item '{id}': only found items can be claimed")]
    NotFoundItem { id: String },
}

/// Returns the status an action leads to, or why it is refused.
///
/// `Reject` is accepted for pending items but leads nowhere: the status is
/// left as it is.
pub fn next_status(item: &Item, action: Action) -> Result<Status, TransitionError> {
    let wrong_status = || TransitionError::WrongStatus {
        id: item.id.clone(),
        action,
        status: item.status,
    };

    match action {
        Action::Approve => match item.status {
            Status::Pending => Ok(Status::Verified),
            _ => Err(wrong_status()),
        },
        Action::Reject => match item.status {
            Status::Pending => Ok(Status::Pending),
            _ => Err(wrong_status()),
        },
        Action::Claim => {
            if item.kind != ItemKind::Found {
                return Err(TransitionError::NotFoundItem {
                    id: item.id.clone(),
                });
            }
            match item.status {
                Status::Verified => Ok(Status::Claimed),
                _ => Err(wrong_status()),
            }
        }
    }
}

/// Returns true if `action` is currently offered for `item`.
pub fn is_available(item: &Item, action: Action) -> bool {
    next_status(item, action).is_ok()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::item::tests::{sample_draft, sample_user};

    fn item(kind: ItemKind, status: Status) -> Item {
        let mut draft = sample_draft();
        draft.kind = kind;
        let mut item = Item::from_draft("A1".to_string(), draft, &sample_user(), Utc::now());
        item.status = status;
        item
    }

    #[test]
    fn test_approve_pending() {
        let it = item(ItemKind::Lost, Status::Pending);
        assert_eq!(next_status(&it, Action::Approve), Ok(Status::Verified));
    }

    #[test]
    fn test_approve_twice_is_refused() {
        let it = item(ItemKind::Lost, Status::Verified);
        assert!(matches!(
            next_status(&it, Action::Approve),
            Err(TransitionError::WrongStatus {
                status: Status::Verified,
                ..
            })
        ));
    }

    #[test]
    fn test_reject_keeps_status() {
        let it = item(ItemKind::Found, Status::Pending);
        assert_eq!(next_status(&it, Action::Reject), Ok(Status::Pending));
        assert!(!is_available(
            &item(ItemKind::Found, Status::Claimed),
            Action::Reject
        ));
    }

    #[test]
    fn test_claim_only_verified_found() {
        assert_eq!(
            next_status(&item(ItemKind::Found, Status::Verified), Action::Claim),
            Ok(Status::Claimed)
        );
        assert!(!is_available(
            &item(ItemKind::Found, Status::Pending),
            Action::Claim
        ));
        assert_eq!(
            next_status(&item(ItemKind::Lost, Status::Verified), Action::Claim),
            Err(TransitionError::NotFoundItem {
                id: "A1".to_string()
            })
        );
    }

    #[test]
    fn test_error_message() {
        let err = next_status(&item(ItemKind::Lost, Status::Claimed), Action::Approve).unwrap_err();
        assert_eq!(
            err.to_string(),
            "cannot approve item 'A1': status is claimed"
        );
    }
}
