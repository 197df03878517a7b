use crate::client::ApiClient;
use crate::error::Result;
use once_cell::sync::Lazy;
use phongtro_types::AgreementId;
use regex::Regex;

/// `filename="hop-dong-abc.pdf"` or the bare `filename=...` form.
static FILENAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"filename="?([^";]+)"?"#).unwrap());

/// A downloaded signed-agreement file.
#[derive(Debug, Clone)]
pub struct AgreementFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ApiClient {
    /// Download the signed-agreement file for a confirmation.
    ///
    /// The filename comes from `Content-Disposition`; when the header is
    /// missing or unparsable a deterministic fallback name is used.
    pub fn download_agreement(&self, id: &AgreementId) -> Result<AgreementFile> {
        let (bytes, disposition) = self.get_bytes(&format!("/api/agreements/{}/file", id))?;

        let filename = disposition
            .as_deref()
            .and_then(parse_filename)
            .unwrap_or_else(|| format!("hop-dong-{}.pdf", id));

        Ok(AgreementFile { filename, bytes })
    }
}

fn parse_filename(disposition: &str) -> Option<String> {
    FILENAME_RE
        .captures(disposition)
        .map(|caps| caps[1].trim().to_string())
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quoted_filename() {
        assert_eq!(
            parse_filename(r#"attachment; filename="hop-dong-64fa.pdf""#),
            Some("hop-dong-64fa.pdf".to_string())
        );
    }

    #[test]
    fn test_parse_bare_filename() {
        assert_eq!(
            parse_filename("attachment; filename=contract.pdf"),
            Some("contract.pdf".to_string())
        );
    }

    #[test]
    fn test_parse_missing_filename() {
        assert_eq!(parse_filename("inline"), None);
    }
}
