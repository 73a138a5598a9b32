/// An encoded image ready to hand to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportFile {
    /// File name including extension.
    pub name: String,
    /// MIME type of `bytes`.
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// Payload offered to a native share sheet.
#[derive(Clone, Copy, Debug)]
pub struct SharePayload<'a> {
    pub title: &'a str,
    pub text: &'a str,
    pub file: &'a ExportFile,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ShareError {
    /// The user dismissed the share sheet. Not a failure.
    #[error("share cancelled by user")]
    Cancelled,
    #[error("share failed: {0}")]
    Failed(String),
}

/// Platform share capability.
///
/// Contract: `share` is only called after `can_share` returned `true` for the same file.
pub trait ShareTarget {
    /// Whether the platform can share this file at all.
    fn can_share(&self, file: &ExportFile) -> bool;
    /// Offer the payload to the user.
    fn share(&mut self, payload: SharePayload<'_>) -> Result<(), ShareError>;
}

/// The capability is absent; exports always go straight to download.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoShare;

impl ShareTarget for NoShare {
    fn can_share(&self, _file: &ExportFile) -> bool {
        false
    }

    fn share(&mut self, _payload: SharePayload<'_>) -> Result<(), ShareError> {
        Err(ShareError::Failed("sharing is not available".to_string()))
    }
}
