//! Groq chat-completions client used for remote instruction resolution.
//!
//! Speaks the OpenAI-compatible dialect: one user message plus the four
//! calculator operations declared as callable functions. The response is
//! decoded strictly, and every deviation from the expected shape maps to a
//! distinct `RemoteFailure` kind in a fixed validation order.

use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::model::types::RemoteFailure;
use crate::ops::{Operation, ResolvedOperation};

pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";

/// Bound on each completion call. Expiry surfaces as a Transport failure like
/// any other connection problem.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct GroqClient {
    api_key: String,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl GroqClient {
    pub fn new(api_key: String, model: Option<String>, base_url: Option<String>) -> Self {
        Self {
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            client: reqwest::Client::new(),
        }
    }

    pub fn model_id(&self) -> String {
        self.model.clone()
    }

    /// Ask the model to select one of the four operations for `instruction`.
    pub async fn resolve(&self, instruction: &str) -> Result<ResolvedOperation, RemoteFailure> {
        let endpoint = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: instruction.to_string(),
            }],
            functions: function_declarations(),
        };

        let response = self
            .client
            .post(&endpoint)
            .timeout(REQUEST_TIMEOUT)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| RemoteFailure::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| RemoteFailure::Transport(e.to_string()))?;

        tracing::debug!("groq API response: status={}", status);

        if !status.is_success() {
            return Err(RemoteFailure::Transport(format!("groq error {status}: {text}")));
        }

        decode_tool_call(&text)
    }
}

/// The four operations as function declarations with the flat
/// `{a: "number", b: "number"}` parameter schema the endpoint expects.
fn function_declarations() -> Vec<FunctionDecl> {
    Operation::all()
        .iter()
        .map(|op| FunctionDecl {
            name: op.as_str(),
            parameters: json!({ "a": "number", "b": "number" }),
        })
        .collect()
}

/// Decode a successful completion body into a resolved operation.
///
/// Validation order: envelope shape, presence of a function call, argument
/// payload, then function name.
pub fn decode_tool_call(body: &str) -> Result<ResolvedOperation, RemoteFailure> {
    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|e| RemoteFailure::MalformedResponse(e.to_string()))?;

    let call = parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.tool_calls)
        .and_then(|calls| calls.into_iter().next())
        .ok_or(RemoteFailure::NoSelection)?;

    let arguments: serde_json::Value = serde_json::from_str(&call.function.arguments)
        .map_err(|e| RemoteFailure::InvalidArguments(e.to_string()))?;
    let a = coerce_operand(arguments.get("a"))
        .ok_or_else(|| RemoteFailure::InvalidArguments("missing or non-numeric 'a'".to_string()))?;
    let b = coerce_operand(arguments.get("b"))
        .ok_or_else(|| RemoteFailure::InvalidArguments("missing or non-numeric 'b'".to_string()))?;

    let op = Operation::from_str(&call.function.name)
        .map_err(|_| RemoteFailure::UnknownFunction(call.function.name.clone()))?;

    Ok(ResolvedOperation::new(op, a, b))
}

/// Accept JSON numbers and numeric strings; anything else, or a non-finite
/// value, fails coercion.
fn coerce_operand(value: Option<&serde_json::Value>) -> Option<f64> {
    let number = match value? {
        serde_json::Value::Number(n) => n.as_f64()?,
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    functions: Vec<FunctionDecl>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct FunctionDecl {
    name: &'static str,
    parameters: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    tool_calls: Option<Vec<ToolCall>>,
}

#[derive(Debug, Deserialize)]
struct ToolCall {
    function: FunctionCall,
}

#[derive(Debug, Deserialize)]
struct FunctionCall {
    name: String,
    /// JSON-encoded object, per the tool-calling wire format.
    arguments: String,
}
