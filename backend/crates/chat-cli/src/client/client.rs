use crate::{CliClientResult, ClientError};

use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Serialize;
use serde_json::{Value, json};

const FAILED_RESPONSE: &str = "Failed to get response. Please try again.";

/// HTTP client for the chat-server API
pub struct Client {
    pub base_url: String,
    pub token: Option<String>,
    client: ReqwestClient,
}

/// Result of one question put to the chatbot through the server
#[derive(Debug, Serialize)]
pub struct AskOutcome {
    pub question: String,
    pub answer: String,
    /// Whether the exchange was appended to the signed-in conversation
    pub saved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_error: Option<String>,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    /// * `token` - Optional session token sent as a bearer credential
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);

        if let Some(ref token) = self.token {
            req = req.bearer_auth(token);
        }

        req
    }

    fn require_token(&self) -> CliClientResult<()> {
        match self.token {
            Some(_) => Ok(()),
            None => Err(ClientError::not_signed_in()),
        }
    }

    /// Execute request and turn error envelopes into `ClientError::Api`
    async fn execute(&self, req: reqwest::RequestBuilder) -> CliClientResult<Value> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        let body: Value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)?
        };

        if status.is_success() {
            return Ok(body);
        }

        Err(api_error(status, &body))
    }

    // =========================================================================
    // Chat
    // =========================================================================

    /// Relay a message to the chatbot, returning its reply unchanged
    pub async fn chat(&self, message: &str) -> CliClientResult<Value> {
        let req = self
            .request(Method::POST, "/chat")
            .json(&json!({ "message": message }));
        self.execute(req).await
    }

    /// Ask the chatbot and, when signed in, keep the exchange.
    ///
    /// Relay failures become the answer text instead of an error, so the
    /// caller always has something to show. Only successful replies are saved.
    pub async fn ask(&self, message: &str) -> CliClientResult<AskOutcome> {
        let question = message.trim().to_string();

        let failure = |answer: String| AskOutcome {
            question: question.clone(),
            answer,
            saved: false,
            save_error: None,
        };

        let answer = match self.chat(&question).await {
            Ok(Value::String(text)) => text,
            Ok(other) => serde_json::to_string(&other)?,
            Err(ClientError::Api { message, .. }) => {
                return Ok(failure(format!("Error: {}", message)));
            }
            Err(ClientError::Http { .. }) | Err(ClientError::Json { .. }) => {
                return Ok(failure(FAILED_RESPONSE.to_string()));
            }
            Err(e) => return Err(e),
        };

        if self.token.is_none() {
            return Ok(AskOutcome {
                question,
                answer,
                saved: false,
                save_error: None,
            });
        }

        let (saved, save_error) = match self.append_exchange(&question, &answer).await {
            Ok(_) => (true, None),
            Err(e) => (false, Some(e.to_string())),
        };

        Ok(AskOutcome {
            question,
            answer,
            saved,
            save_error,
        })
    }

    // =========================================================================
    // Conversation
    // =========================================================================

    pub async fn list_conversation(&self) -> CliClientResult<Value> {
        self.require_token()?;
        let req = self.request(Method::GET, "/conversation");
        self.execute(req).await
    }

    pub async fn append_exchange(&self, question: &str, answer: &str) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct AppendRequest<'a> {
            question: &'a str,
            answer: &'a str,
        }

        self.require_token()?;
        let req = self
            .request(Method::POST, "/conversation")
            .json(&AppendRequest { question, answer });
        self.execute(req).await
    }

    pub async fn clear_conversation(&self) -> CliClientResult<Value> {
        self.require_token()?;
        let req = self.request(Method::DELETE, "/conversation");
        self.execute(req).await
    }

    // =========================================================================
    // Accounts
    // =========================================================================

    pub async fn signup(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> CliClientResult<Value> {
        #[derive(Serialize)]
        struct SignupRequest<'a> {
            email: &'a str,
            password: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            name: Option<&'a str>,
        }

        let body = SignupRequest {
            email,
            password,
            name,
        };
        let req = self.request(Method::POST, "/signup").json(&body);
        self.execute(req).await
    }

    /// Exchange credentials for a session token
    pub async fn login(&self, email: &str, password: &str) -> CliClientResult<Value> {
        let req = self
            .request(Method::POST, "/login")
            .json(&json!({ "email": email, "password": password }));
        self.execute(req).await
    }

    // =========================================================================
    // Session
    // =========================================================================

    pub async fn profile(&self) -> CliClientResult<Value> {
        self.require_token()?;
        let req = self.request(Method::GET, "/session");
        self.execute(req).await
    }

    /// Change the display name. `None` clears it.
    pub async fn rename(&self, name: Option<&str>) -> CliClientResult<Value> {
        self.require_token()?;
        let req = self
            .request(Method::POST, "/session")
            .json(&json!({ "name": name }));
        self.execute(req).await
    }

    pub async fn delete_account(&self) -> CliClientResult<Value> {
        self.require_token()?;
        let req = self.request(Method::DELETE, "/session");
        self.execute(req).await
    }
}

#[track_caller]
fn api_error(status: StatusCode, body: &Value) -> ClientError {
    let error = body.get("error");

    // Accepts both `{"error": {"message": ..}}` and `{"error": ".."}`
    let message = error
        .and_then(|e| e.get("message").or(Some(e)))
        .and_then(|v| v.as_str())
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error"));
    let code = error
        .and_then(|e| e.get("code"))
        .and_then(|v| v.as_str())
        .unwrap_or("UNKNOWN");

    ClientError::api_error(status.as_u16(), code, message)
}
