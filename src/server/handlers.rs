//! MCP tool handlers for the messenger server.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.
//! Every tool runs against the one session owned by the server.

use crate::config::Config;
use crate::domain::ValidationError;
use crate::matching::MatchType;
use crate::models::Contact;
use crate::session::MessengerSession;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;
use tokio::sync::Mutex;

/// The messenger MCP server.
#[derive(Clone)]
pub struct MessengerMcpServer {
    session: Arc<Mutex<MessengerSession>>,
    suggestion_limit: Option<usize>,
    tool_router: ToolRouter<Self>,
}

#[tool_handler]
impl ServerHandler for MessengerMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "wa-messenger".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("Local contact directory and WhatsApp composer - store contacts by name and phone, then compose wa.me links with a pre-filled message. Open the returned URL to send.".into()),
        }
    }
}

#[derive(Debug, Deserialize, JsonSchema)]
struct AddContactParams {
    name: String,
    phone: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct RemoveContactParams {
    index: usize,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct SuggestContactsParams {
    partial_name: String,
    #[serde(default)]
    limit: Option<usize>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct FindContactParams {
    name: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ComposeMessageParams {
    recipient_name: String,
    message: String,
}

fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

// Validation failures carry the user-facing message unchanged
fn validation_error(e: ValidationError) -> McpError {
    tracing::warn!("Validation failed: {}", e);
    McpError::invalid_params(e.to_string(), None)
}

fn json_result(value: serde_json::Value) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(&value).map_err(to_mcp_error)?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

fn contact_json(index: usize, contact: &Contact) -> serde_json::Value {
    serde_json::json!({
        "index": index,
        "name": contact.name(),
        "phone": contact.phone(),
    })
}

#[tool_router]
impl MessengerMcpServer {
    /// Create a server around an empty session.
    pub fn new(config: &Config) -> Self {
        Self::with_session(MessengerSession::new(), config)
    }

    /// Create a server around an existing session.
    pub fn with_session(session: MessengerSession, config: &Config) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            suggestion_limit: config.suggestion_limit(),
            tool_router: Self::tool_router(),
        }
    }

    /// Shared handle to the underlying session.
    pub fn session(&self) -> Arc<Mutex<MessengerSession>> {
        self.session.clone()
    }

    /// Add a contact to the directory.
    #[tool(
        description = "Add a contact with a name and a phone number including country code. Formatting characters are stripped; at least 10 digits are required. Duplicate names are allowed."
    )]
    async fn add_contact(
        &self,
        params: Parameters<AddContactParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let mut session = self.session.lock().await;

        session.open_add_contact();
        session.set_new_contact_name(params.name);
        session.set_new_contact_phone(params.phone);

        let contact = match session.submit_add_contact() {
            Ok(contact) => contact,
            Err(e) => {
                session.cancel_add_contact();
                return Err(validation_error(e));
            }
        };

        let index = session.directory().len() - 1;
        tracing::info!(index, "Contact added");
        json_result(contact_json(index, &contact))
    }

    /// Remove a contact by its list index.
    #[tool(
        description = "Remove the contact at the given zero-based index. An index past the end of the list removes nothing."
    )]
    async fn remove_contact(
        &self,
        params: Parameters<RemoveContactParams>,
    ) -> Result<CallToolResult, McpError> {
        let index = params.0.index;
        let mut session = self.session.lock().await;

        let removed = session.remove_contact(index);
        tracing::info!(index, removed = removed.is_some(), "Remove contact");

        json_result(serde_json::json!({
            "removed": removed,
            "remaining": session.directory().len(),
        }))
    }

    /// List every stored contact in order.
    #[tool(description = "List all stored contacts in the order they were added, with their indices")]
    async fn list_contacts(&self) -> Result<CallToolResult, McpError> {
        let session = self.session.lock().await;
        let contacts = session.directory().contacts();

        json_result(serde_json::json!({
            "count": contacts.len(),
            "contacts": contacts
                .iter()
                .enumerate()
                .map(|(i, c)| contact_json(i, c))
                .collect::<Vec<_>>(),
        }))
    }

    /// Suggest recipients whose names contain the typed text.
    #[tool(
        description = "Suggest contacts whose names contain the given text, ignoring case, in list order. Blank input returns no suggestions. An optional limit caps the result count; 0 means unlimited."
    )]
    async fn suggest_contacts(
        &self,
        params: Parameters<SuggestContactsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        // A per-call 0 defers to MAX_SUGGESTIONS, where 0 is unlimited
        let limit = params
            .limit
            .filter(|&n| n > 0)
            .or(self.suggestion_limit)
            .unwrap_or(usize::MAX);
        let mut session = self.session.lock().await;

        session.set_recipient_name(params.partial_name.clone());
        let matcher = *session.directory().matcher();

        let suggestions: Vec<serde_json::Value> = session
            .suggestions()
            .iter()
            .take(limit)
            .map(|c| {
                serde_json::json!({
                    "name": c.name(),
                    "phone": c.phone(),
                    "match_type": matcher
                        .classify(&params.partial_name, c.name())
                        .map(MatchType::as_str),
                })
            })
            .collect();

        tracing::debug!(count = suggestions.len(), "Suggestions computed");

        json_result(serde_json::json!({
            "query": params.partial_name,
            "suggestions": suggestions,
        }))
    }

    /// Look up a contact by exact name.
    #[tool(description = "Find the first contact whose name equals the given name, ignoring case")]
    async fn find_contact(
        &self,
        params: Parameters<FindContactParams>,
    ) -> Result<CallToolResult, McpError> {
        let name = params.0.name;
        let session = self.session.lock().await;

        let contact = session
            .directory()
            .find_by_name(&name)
            .ok_or_else(|| validation_error(ValidationError::ContactNotFound(name.clone())))?;

        json_result(serde_json::to_value(contact).map_err(to_mcp_error)?)
    }

    /// Compose a WhatsApp link with the message pre-filled.
    #[tool(
        description = "Compose a https://wa.me link that opens a WhatsApp chat with the named contact and the message pre-filled. The recipient must match a stored contact name, ignoring case. Open the returned url to send."
    )]
    async fn compose_message(
        &self,
        params: Parameters<ComposeMessageParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let mut session = self.session.lock().await;

        session.set_recipient_name(params.recipient_name);
        session.set_message(params.message);

        // Resolve before submitting, which clears the compose form on success
        let recipient = session
            .directory()
            .find_by_name(session.recipient_name())
            .cloned();

        let url = session.submit_message().map_err(validation_error)?;

        tracing::info!("wa.me link composed");
        json_result(serde_json::json!({
            "recipient": recipient.as_ref().map(|c| c.name()),
            "phone": recipient.as_ref().map(|c| c.phone()),
            "url": url,
        }))
    }
}
