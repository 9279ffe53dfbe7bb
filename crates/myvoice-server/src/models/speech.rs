//! Speech - Text-to-speech stub

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const SPEECH_STUB_MESSAGE: &str = "Speech synthesis would be handled here";

/// Speak request
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SpeakRequest {
    #[serde(default)]
    pub text: String,
    pub voice: Option<String>,
}

/// Speak response; echoes the request, nothing is synthesized
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SpeakResponse {
    pub success: bool,
    pub text: String,
    pub voice: String,
    pub message: String,
}
