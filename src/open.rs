//! Dispatching search URLs to an opener.
//!
//! Opening is a side effect owned by the caller: a browser extension opens
//! tabs, the CLI hands URLs to the platform opener, tests record calls.

use std::process::Command;

use crate::error::{Error, Result};
use crate::marketplace::{build_search_urls, Marketplace};

/// Browsing-context hint passed along with each URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OpenTarget {
    /// Open in a new tab (`_blank`).
    #[default]
    NewTab,
}

impl OpenTarget {
    /// HTML target name for this hint.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NewTab => "_blank",
        }
    }
}

/// Fire-and-forget sink for URLs.
pub trait UrlOpener {
    /// Opens `url`. Failures are the opener's concern.
    fn open(&mut self, url: &str, target: OpenTarget);
}

impl<F> UrlOpener for F
where
    F: FnMut(&str, OpenTarget),
{
    fn open(&mut self, url: &str, target: OpenTarget) {
        self(url, target);
    }
}

/// Opens every non-empty marketplace URL for `query`.
///
/// URLs go to the opener in [`Marketplace::ALL`] order. Returns how many
/// were opened; an empty query opens nothing.
pub fn open_all<O: UrlOpener + ?Sized>(opener: &mut O, query: &str) -> usize {
    let urls = build_search_urls(query);
    let mut opened = 0;
    for (marketplace, url) in urls.iter() {
        if url.is_empty() {
            continue;
        }
        tracing::debug!(%marketplace, url, "opening search");
        opener.open(url, OpenTarget::NewTab);
        opened += 1;
    }
    opened
}

/// Opens the search URL of a single marketplace, looked up case-insensitively.
///
/// An unknown key, or a query that produced no URL, is logged and returned as
/// [`Error::UnknownMarketplace`]; nothing is opened in that case.
pub fn open_one<O: UrlOpener + ?Sized>(opener: &mut O, marketplace: &str, query: &str) -> Result<()> {
    let url = marketplace
        .parse::<Marketplace>()
        .map(|m| build_search_urls(query).get(m).to_string())
        .ok()
        .filter(|url| !url.is_empty());

    let Some(url) = url else {
        tracing::warn!("Invalid marketplace: {marketplace}");
        return Err(Error::UnknownMarketplace(marketplace.to_string()));
    };

    opener.open(&url, OpenTarget::NewTab);
    Ok(())
}

/// Opens URLs with the platform's default handler (`open`, `xdg-open`, `url.dll`).
///
/// Each launched handler is reaped on a background thread, so a long-lived
/// host does not accumulate zombie processes.
#[derive(Debug, Clone, Default)]
pub struct SystemOpener;

impl SystemOpener {
    /// Spawns the platform opener for `url` without waiting for it.
    pub fn try_open(&self, url: &str) -> Result<()> {
        spawn_reaped(platform_command(url), url)
    }
}

impl UrlOpener for SystemOpener {
    fn open(&mut self, url: &str, _target: OpenTarget) {
        if let Err(e) = self.try_open(url) {
            tracing::warn!("{e}");
        }
    }
}

fn spawn_reaped(mut command: Command, url: &str) -> Result<()> {
    let mut child = command.spawn().map_err(|e| Error::OpenFailed {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    std::thread::spawn(move || match child.wait() {
        Ok(status) if !status.success() => tracing::debug!(%status, "opener exited with failure"),
        Ok(_) => {}
        Err(e) => tracing::debug!("failed to wait for opener: {e}"),
    });
    Ok(())
}

#[cfg(target_os = "macos")]
fn platform_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(target_os = "windows")]
fn platform_command(url: &str) -> Command {
    // bypasses cmd.exe, which would expand %XX sequences and parentheses
    let mut command = Command::new("rundll32");
    command.arg("url.dll,FileProtocolHandler").arg(url);
    command
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn platform_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(String, OpenTarget)>,
    }

    impl UrlOpener for Recorder {
        fn open(&mut self, url: &str, target: OpenTarget) {
            self.calls.push((url.to_string(), target));
        }
    }

    #[test]
    fn open_all_opens_in_marketplace_order() {
        let mut recorder = Recorder::default();
        assert_eq!(open_all(&mut recorder, "desk lamp"), 3);

        let urls: Vec<_> = recorder.calls.iter().map(|(url, _)| url.as_str()).collect();
        assert_eq!(
            urls,
            [
                "https://www.amazon.com/s?k=desk%20lamp",
                "https://www.ebay.com/sch/i.html?_nkw=desk%20lamp",
                "https://www.aliexpress.com/wholesale?SearchText=desk%20lamp",
            ]
        );
        assert!(recorder.calls.iter().all(|(_, target)| *target == OpenTarget::NewTab));
    }

    #[test]
    fn open_all_with_empty_query_opens_nothing() {
        let mut recorder = Recorder::default();
        assert_eq!(open_all(&mut recorder, ""), 0);
        assert!(recorder.calls.is_empty());
    }

    #[test]
    fn open_one_is_case_insensitive() {
        let mut recorder = Recorder::default();
        assert!(open_one(&mut recorder, "Amazon", "desk lamp").is_ok());
        assert_eq!(recorder.calls.len(), 1);
        assert_eq!(recorder.calls[0].0, "https://www.amazon.com/s?k=desk%20lamp");
    }

    #[test]
    fn open_one_unknown_marketplace_opens_nothing() {
        let mut recorder = Recorder::default();
        let result = open_one(&mut recorder, "notasite", "desk lamp");
        assert_eq!(result, Err(Error::UnknownMarketplace("notasite".to_string())));
        assert!(recorder.calls.is_empty());
    }

    #[test]
    fn open_one_with_empty_query_is_reported() {
        let mut recorder = Recorder::default();
        assert!(open_one(&mut recorder, "ebay", "").is_err());
        assert!(recorder.calls.is_empty());
    }

    #[test]
    fn closures_are_openers() {
        let mut seen = Vec::new();
        let mut opener = |url: &str, _target: OpenTarget| seen.push(url.to_string());
        open_all(&mut opener, "mug");
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn target_names_match_html() {
        assert_eq!(OpenTarget::default().as_str(), "_blank");
    }

    #[test]
    fn platform_command_passes_url_verbatim() {
        let url = "https://www.amazon.com/s?k=usb%20cable%20(2m)";
        let command = platform_command(url);
        let last = command.get_args().last().and_then(|arg| arg.to_str());
        assert_eq!(last, Some(url));
    }

    #[cfg(target_os = "windows")]
    #[test]
    fn windows_opener_avoids_cmd() {
        let command = platform_command("https://www.ebay.com/sch/i.html?_nkw=a%20b");
        assert_eq!(command.get_program(), "rundll32");
    }

    #[cfg(unix)]
    #[test]
    fn spawned_opener_is_reaped() {
        assert!(spawn_reaped(Command::new("true"), "https://example.com").is_ok());
    }

    #[test]
    fn missing_opener_is_reported() {
        let result = spawn_reaped(Command::new("no-such-opener-binary"), "https://example.com");
        assert!(matches!(result, Err(Error::OpenFailed { url, .. }) if url == "https://example.com"));
    }
}
