use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

/// Payload shipped with the tool.
pub const DEFAULT_PAYLOAD: &str = "PVlqTTNNVE00TXpNM0V6WHlNak53TVROZlJUTTNJRE0yRUROM0VETXdFVEw=";

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Decoded payload is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelRef {
    pub channel_id: String,
    pub message_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    /// `None` unless the text splits on `-` into exactly two parts.
    pub reference: Option<ChannelRef>,
}

pub fn decode_payload(payload: &str) -> Result<Decoded, DecodeError> {
    let bytes = STANDARD.decode(payload.trim())?;
    let text = String::from_utf8(bytes)?;
    let reference = split_reference(&text);
    Ok(Decoded { text, reference })
}

pub fn split_reference(text: &str) -> Option<ChannelRef> {
    let parts: Vec<&str> = text.split('-').collect();
    match parts.as_slice() {
        [channel_id, message_id] => Some(ChannelRef {
            channel_id: channel_id.to_string(),
            message_id: message_id.to_string(),
        }),
        _ => None,
    }
}

/// Lines printed for a decoded payload.
pub fn report(decoded: &Decoded) -> Vec<String> {
    let mut lines = vec![format!("Decoded string: {}", decoded.text)];
    match &decoded.reference {
        Some(reference) => {
            lines.push(format!("Channel ID: {}", reference.channel_id));
            lines.push(format!("Message ID: {}", reference.message_id));
        }
        None => lines.push("Invalid decoded format.".to_string()),
    }
    lines
}
