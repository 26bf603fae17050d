use encoding_rs::{Encoding, UTF_8};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub had_bom: bool,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("not valid UTF-8 text (invalid byte sequence at offset {offset})")]
    InvalidUtf8 { offset: usize },
    #[error("{encoding} text is not supported, save the file as UTF-8")]
    UnsupportedEncoding { encoding: String },
}

/// Strict UTF-8 decode. A UTF-8 BOM is dropped; any other BOM or any malformed
/// sequence is an error, never a lossy replacement.
pub fn decode_utf8(bytes: &[u8]) -> Result<DecodedText, DecodeError> {
    let (body, bom_len) = match Encoding::for_bom(bytes) {
        Some((encoding, len)) if encoding == UTF_8 => (&bytes[len..], len),
        Some((encoding, _)) => {
            return Err(DecodeError::UnsupportedEncoding {
                encoding: encoding.name().to_string(),
            })
        }
        None => (bytes, 0),
    };

    let (text, had_errors) = UTF_8.decode_without_bom_handling(body);
    if had_errors {
        return Err(DecodeError::InvalidUtf8 {
            offset: bom_len + Encoding::utf8_valid_up_to(body),
        });
    }
    Ok(DecodedText {
        text: text.into_owned(),
        had_bom: bom_len > 0,
    })
}
