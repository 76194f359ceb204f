//! User-facing alert texts for controller actions.
//!
//! Every action a controller performs is an [`Operation`]: an action applied
//! to a resource family. Failures are turned into one sentence for the error
//! slot; recognized server codes map to fixed texts that never depend on the
//! server message, every other code quotes the server message verbatim and
//! appends the code for diagnosis.

use std::fmt;

use crate::{
    error::ClientError,
    models::{EntityKind, ErrorCode, Id},
};

/// What a controller tried to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Load,
    Create,
    Update,
    Delete,
}

impl Action {
    pub fn verb(&self) -> &'static str {
        match self {
            Action::Load => "load",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

/// An action applied to a resource family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub entity: EntityKind,
    pub action: Action,
}

impl Operation {
    pub const fn new(entity: EntityKind, action: Action) -> Self {
        Self { entity, action }
    }

    pub const fn load(entity: EntityKind) -> Self {
        Self::new(entity, Action::Load)
    }

    pub const fn create(entity: EntityKind) -> Self {
        Self::new(entity, Action::Create)
    }

    pub const fn update(entity: EntityKind) -> Self {
        Self::new(entity, Action::Update)
    }

    pub const fn delete(entity: EntityKind) -> Self {
        Self::new(entity, Action::Delete)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.action.verb(), self.entity)
    }
}

/// Maps a server error code and message to the text shown in the error slot.
///
/// ```rust
/// use airport_core::{
///     messages::{map_error, Operation},
///     models::{EntityKind, ErrorCode},
/// };
///
/// let op = Operation::delete(EntityKind::Steward);
/// assert_eq!(
///     map_error(op, &ErrorCode::PersistenceException, "constraint violation"),
///     "Steward has assigned flights. Cannot be deleted."
/// );
/// assert_eq!(
///     map_error(op, &ErrorCode::Other("ServerException".into()), "disk full"),
///     "Cannot delete steward! Reason given by the server: disk full (ServerException)"
/// );
/// ```
pub fn map_error(operation: Operation, code: &ErrorCode, message: &str) -> String {
    let Operation { entity, action } = operation;
    match code {
        ErrorCode::PersistenceException | ErrorCode::JpaSystemException => match action {
            Action::Delete => format!("{} has assigned flights. Cannot be deleted.", entity.title()),
            _ => format!(
                "Cannot {} {}! It conflicts with records stored on the server.",
                action.verb(),
                entity
            ),
        },
        ErrorCode::InvalidRequestException => {
            "Sent data were found to be invalid by server!".to_string()
        }
        ErrorCode::ResourceNotFoundException => {
            format!("Cannot {} non-existent {}!", action.verb(), entity)
        }
        ErrorCode::Other(raw) => format!(
            "Cannot {} {}! Reason given by the server: {message} ({raw})",
            action.verb(),
            entity
        ),
    }
}

/// Maps any client failure to the text shown in the error slot.
pub fn describe_failure(operation: Operation, error: &ClientError) -> String {
    if let Some(server) = error.server_error() {
        return map_error(operation, &server.code, &server.message);
    }

    match error {
        ClientError::Transport { message, source } => format!(
            "Cannot {operation}! The server could not be reached: {message} ({source})"
        ),
        other => format!("Cannot {operation}! {other}"),
    }
}

/// Text shown in the success slot after a mutation.
pub fn success_message(operation: Operation, id: Id) -> String {
    let Operation { entity, action } = operation;
    match action {
        Action::Load => format!("{} {id} was loaded.", entity.title()),
        Action::Create => format!("A new {entity} \"{id}\" was created."),
        Action::Update => format!("{} \"{id}\" was successfully updated.", entity.title()),
        Action::Delete => format!("{} \"{id}\" was successfully deleted.", entity.title()),
    }
}
