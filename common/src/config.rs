pub const DEFAULT_TITLE: &str = "Listening on:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnounceConfig {
    /// Heading printed above the list of addresses.
    pub title_text: String,
    /// Protocol used for records that carry none of their own.
    ///
    /// Takes precedence over the well-known-port table.
    pub default_protocol: Option<String>,
    /// Wraps IPv6 hostnames in brackets (`http://[::1]:8080`). Off by default.
    pub bracket_ipv6: bool,
}

impl Default for AnnounceConfig {
    fn default() -> Self {
        Self {
            title_text: DEFAULT_TITLE.to_string(),
            default_protocol: None,
            bracket_ipv6: false,
        }
    }
}

impl AnnounceConfig {
    pub fn with_title(mut self, title_text: impl Into<String>) -> Self {
        self.title_text = title_text.into();
        self
    }

    pub fn with_default_protocol(mut self, protocol: impl Into<String>) -> Self {
        self.default_protocol = Some(protocol.into());
        self
    }

    pub fn with_bracketed_ipv6(mut self) -> Self {
        self.bracket_ipv6 = true;
        self
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_title() {
        let cfg = AnnounceConfig::default();
        assert_eq!(cfg.title_text, "Listening on:");
        assert_eq!(cfg.default_protocol, None);
        assert!(!cfg.bracket_ipv6);
    }

    #[test]
    fn test_builders_replace_fields() {
        let cfg = AnnounceConfig::default()
            .with_title("custom text")
            .with_default_protocol("http");
        assert_eq!(cfg.title_text, "custom text");
        assert_eq!(cfg.default_protocol.as_deref(), Some("http"));
    }
}
