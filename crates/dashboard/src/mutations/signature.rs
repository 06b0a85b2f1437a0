use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use super::error::MutationError;

/// Whose signature is being captured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureRole {
    Staff,
    ServiceUser,
}

impl SignatureRole {
    pub fn file_name(&self) -> &'static str {
        match self {
            SignatureRole::Staff => "signature.png",
            SignatureRole::ServiceUser => "su_signature.png",
        }
    }
}

/// Decodes `data:<mime>;base64,<payload>` into the mime type and bytes.
pub fn decode_data_url(data_url: &str) -> Result<(String, Vec<u8>), MutationError> {
    let invalid = || MutationError::invalid("Invalid Signature", "Signature image could not be read.");

    let rest = data_url.trim().strip_prefix("data:").ok_or_else(invalid)?;
    let (meta, payload) = rest.split_once(',').ok_or_else(invalid)?;
    let mime = meta.strip_suffix(";base64").ok_or_else(invalid)?;
    let mime = if mime.is_empty() { "image/png" } else { mime };
    let bytes = STANDARD.decode(payload.trim()).map_err(|_| invalid())?;
    if bytes.is_empty() {
        return Err(invalid());
    }
    Ok((mime.to_string(), bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_png_data_url() {
        let url = format!("data:image/png;base64,{}", STANDARD.encode([0x89, b'P', b'N', b'G']));
        let (mime, bytes) = decode_data_url(&url).unwrap();
        assert_eq!(mime, "image/png");
        assert_eq!(bytes, vec![0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(decode_data_url("image/png;base64,AAAA").is_err());
        assert!(decode_data_url("data:image/png,AAAA").is_err());
        assert!(decode_data_url("data:image/png;base64,@@@").is_err());
        assert!(decode_data_url("data:image/png;base64,").is_err());
    }

    #[test]
    fn test_file_names() {
        assert_eq!(SignatureRole::Staff.file_name(), "signature.png");
        assert_eq!(SignatureRole::ServiceUser.file_name(), "su_signature.png");
    }
}
