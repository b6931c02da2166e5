//! Who may do what.
//!
//! Every protected operation is listed once in [`POLICY`] together with the
//! requirement it carries. Handlers and services call [`authorize`] instead of
//! checking roles themselves.

use super::entities::{Role, User, UserId};

/// The caller of an operation, as loaded from the user store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: UserId,
    pub username: String,
    pub role: Role,
    pub is_staff: bool,
}

impl Actor {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin || self.is_staff
    }

    pub fn is_moderator(&self) -> bool {
        self.role == Role::Moderator
    }
}

impl From<&User> for Actor {
    fn from(user: &User) -> Self {
        Actor {
            id: user.id,
            username: user.username.clone(),
            role: user.role,
            is_staff: user.is_staff,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    // Users
    ManageUsers,
    ViewOwnProfile,
    UpdateOwnProfile,
    // Vocabulary
    ListTerms,
    CreateTerm,
    DeleteTerm,
    // Titles
    ListTitles,
    ReadTitle,
    CreateTitle,
    ReplaceTitle,
    PatchTitle,
    DeleteTitle,
    // Reviews
    ListReviews,
    ReadReview,
    CreateReview,
    UpdateReview,
    DeleteReview,
    // Comments
    ListComments,
    ReadComment,
    CreateComment,
    UpdateComment,
    DeleteComment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Anyone,
    Authenticated,
    /// Role admin or the staff flag.
    Admin,
    /// The record's author, a moderator or an admin.
    AuthorOrStaff,
}

pub const POLICY: &[(Operation, Requirement)] = &[
    (Operation::ManageUsers, Requirement::Admin),
    (Operation::ViewOwnProfile, Requirement::Authenticated),
    (Operation::UpdateOwnProfile, Requirement::Authenticated),
    (Operation::ListTerms, Requirement::Anyone),
    (Operation::CreateTerm, Requirement::Admin),
    (Operation::DeleteTerm, Requirement::Admin),
    (Operation::ListTitles, Requirement::Anyone),
    (Operation::ReadTitle, Requirement::Anyone),
    (Operation::CreateTitle, Requirement::Admin),
    (Operation::ReplaceTitle, Requirement::Admin),
    (Operation::PatchTitle, Requirement::Admin),
    (Operation::DeleteTitle, Requirement::Admin),
    (Operation::ListReviews, Requirement::Anyone),
    (Operation::ReadReview, Requirement::Anyone),
    (Operation::CreateReview, Requirement::Authenticated),
    (Operation::UpdateReview, Requirement::AuthorOrStaff),
    (Operation::DeleteReview, Requirement::AuthorOrStaff),
    (Operation::ListComments, Requirement::Anyone),
    (Operation::ReadComment, Requirement::Anyone),
    (Operation::CreateComment, Requirement::Authenticated),
    (Operation::UpdateComment, Requirement::AuthorOrStaff),
    (Operation::DeleteComment, Requirement::AuthorOrStaff),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Allow,
    /// No actor where one is required (HTTP 401).
    Unauthenticated,
    /// Actor known but not permitted (HTTP 403).
    Forbidden,
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Decision::Allow)
    }
}

/// Operations missing from the table fall back to the strictest requirement.
pub fn requirement_for(operation: Operation) -> Requirement {
    POLICY
        .iter()
        .find(|(op, _)| *op == operation)
        .map(|(_, req)| *req)
        .unwrap_or(Requirement::Admin)
}

/// `owner` is the author of the target record, for operations that have one.
pub fn authorize(operation: Operation, actor: Option<&Actor>, owner: Option<UserId>) -> Decision {
    let requirement = requirement_for(operation);

    if requirement == Requirement::Anyone {
        return Decision::Allow;
    }

    let Some(actor) = actor else {
        return Decision::Unauthenticated;
    };

    let allowed = match requirement {
        Requirement::Anyone | Requirement::Authenticated => true,
        Requirement::Admin => actor.is_admin(),
        Requirement::AuthorOrStaff => {
            owner == Some(actor.id) || actor.is_moderator() || actor.is_admin()
        }
    };

    if allowed {
        Decision::Allow
    } else {
        Decision::Forbidden
    }
}
