//! Network reachability and the offline banner.

use crate::i18n::Messages;

/// Message key of the offline banner text.
pub const OFFLINE_MESSAGE_KEY: &str = "NetworkConnectivity.Offline";

/// Whether the engine is reachable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NetworkStatus {
    #[default]
    Online,
    Offline,
}

impl NetworkStatus {
    pub fn from_available(available: bool) -> Self {
        if available {
            Self::Online
        } else {
            Self::Offline
        }
    }

    pub fn is_available(self) -> bool {
        self == Self::Online
    }

    pub fn toggle(self) -> Self {
        Self::from_available(!self.is_available())
    }
}

/// Visual weight of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerAppearance {
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub appearance: BannerAppearance,
    pub text: String,
}

/// The banner to show for `status`, if any.
pub fn offline_banner(status: NetworkStatus, messages: &Messages) -> Option<Banner> {
    match status {
        NetworkStatus::Online => None,
        NetworkStatus::Offline => Some(Banner {
            appearance: BannerAppearance::Warning,
            text: messages.t(OFFLINE_MESSAGE_KEY).to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_banner_when_online() {
        assert!(offline_banner(NetworkStatus::Online, &Messages::default()).is_none());
    }

    #[test]
    fn test_warning_banner_when_offline() {
        let banner = offline_banner(NetworkStatus::from_available(false), &Messages::default())
            .unwrap();
        assert_eq!(banner.appearance, BannerAppearance::Warning);
        assert!(banner.text.contains("offline"));
    }

    #[test]
    fn test_toggle() {
        assert_eq!(NetworkStatus::Online.toggle(), NetworkStatus::Offline);
        assert_eq!(NetworkStatus::Offline.toggle(), NetworkStatus::Online);
    }
}
