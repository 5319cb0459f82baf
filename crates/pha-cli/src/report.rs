//! # Output Rendering
//!
//! Every subcommand that produces an address reports it through
//! [`AddressReport`], rendered either as aligned plain text or as JSON.

use pha_core::{Address, KindTag};
use serde::Serialize;
use zeroize::Zeroizing;

/// Printable summary of one address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressReport {
    /// 48-character text form.
    pub text: String,
    /// Four-way kind.
    pub kind: KindTag,
    /// Interop platform, when the kind is interop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<u8>,
    /// The 34-byte layout as hex.
    pub hex: String,
    /// Exported WIF, only when explicitly requested. Wiped on drop.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wif: Option<Zeroizing<String>>,
}

impl AddressReport {
    /// Summarize an address.
    pub fn new(addr: &Address) -> Self {
        let kind = addr.kind();
        Self {
            text: addr.text().to_string(),
            kind: kind.tag(),
            platform: kind.platform().map(u8::from),
            hex: addr.to_hex(),
            wif: None,
        }
    }

    /// Render for the terminal.
    ///
    /// The rendered text may carry the WIF, so it is wiped on drop too.
    pub fn render(&self, json: bool) -> anyhow::Result<Zeroizing<String>> {
        if json {
            return Ok(Zeroizing::new(serde_json::to_string_pretty(self)?));
        }
        let mut out = Zeroizing::new(String::with_capacity(256));
        out.push_str(&format!("address:  {}\nkind:     {}\n", self.text, self.kind));
        if let Some(platform) = self.platform {
            out.push_str(&format!("platform: {platform}\n"));
        }
        out.push_str("bytes:    ");
        out.push_str(&self.hex);
        if let Some(wif) = &self.wif {
            out.push_str("\nwif:      ");
            out.push_str(wif);
        }
        Ok(out)
    }
}
