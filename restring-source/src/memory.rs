//! An ephemeral, in-memory session source.

use restring_codec::{AccountInfo, ExportError, NativeExport};

use crate::source::{SessionSource, SettledSession, SourceError};

/// In-memory [`SessionSource`] holding whatever the caller hands it.
///
/// Useful for tests and for re-exporting credentials obtained elsewhere;
/// nothing touches disk or the network.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    settled: Option<SettledSession>,
    account: Option<AccountInfo>,
    native:  Option<String>,
}

impl MemorySource {
    /// A source holding a settled session.
    pub fn new(settled: SettledSession) -> Self {
        Self { settled: Some(settled), account: None, native: None }
    }

    /// A source holding nothing at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Attach the account identity the lookup round trip would return.
    pub fn with_account(mut self, account: AccountInfo) -> Self {
        self.account = Some(account);
        self
    }

    /// Attach a pre-exported native session string.
    pub fn with_native(mut self, native: impl Into<String>) -> Self {
        self.native = Some(native.into());
        self
    }
}

impl NativeExport for MemorySource {
    fn export_native(&self) -> Result<String, ExportError> {
        self.native
            .clone()
            .ok_or_else(|| ExportError::Native("no native session attached".into()))
    }
}

impl SessionSource for MemorySource {
    async fn settled(&self) -> Result<Option<SettledSession>, SourceError> {
        Ok(self.settled.clone())
    }

    async fn account_identity(&self) -> Result<AccountInfo, SourceError> {
        self.account
            .ok_or_else(|| SourceError::AccountLookup("no account attached".into()))
    }
}
