use strum::{AsRefStr, Display};

/// Backend call that failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Operation {
    ListItems,
    CreateItem,
    DeleteItem,
    ItemAdvice,
    MultiItemRecipe,
    GenerateRecipe,
    UpdatePreferences,
}

impl Operation {
    fn generates(self) -> bool {
        matches!(
            self,
            Self::ItemAdvice | Self::MultiItemRecipe | Self::GenerateRecipe
        )
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("{operation}: invalid input: {source}")]
    Invalid {
        operation: Operation,
        #[source]
        source: validator::ValidationErrors,
    },

    #[error("{operation}: request failed: {source}")]
    Http {
        operation: Operation,
        #[source]
        source: reqwest::Error,
    },

    #[error("{operation}: server returned {status}: {body}")]
    Status {
        operation: Operation,
        status: u16,
        body: String,
    },

    #[error("{operation}: invalid response: {source}")]
    Decode {
        operation: Operation,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    pub fn operation(&self) -> Option<Operation> {
        match self {
            Self::InvalidBaseUrl { .. } => None,
            Self::Invalid { operation, .. }
            | Self::Http { operation, .. }
            | Self::Status { operation, .. }
            | Self::Decode { operation, .. } => Some(*operation),
        }
    }

    /// The single message shown to the user for any failure.
    pub fn user_message(&self) -> &'static str {
        match self.operation() {
            Some(operation) if operation.generates() => "failed to generate",
            _ => "failed to load",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(operation: Operation) -> ClientError {
        ClientError::Status {
            operation,
            status: 500,
            body: "boom".to_owned(),
        }
    }

    #[test]
    fn messages_per_operation() {
        assert_eq!(status(Operation::ListItems).user_message(), "failed to load");
        assert_eq!(status(Operation::DeleteItem).user_message(), "failed to load");
        assert_eq!(
            status(Operation::GenerateRecipe).user_message(),
            "failed to generate"
        );
        assert_eq!(status(Operation::ItemAdvice).user_message(), "failed to generate");
    }

    #[test]
    fn display_names_the_operation() {
        assert_eq!(
            status(Operation::UpdatePreferences).to_string(),
            "update_preferences: server returned 500: boom"
        );
    }
}
