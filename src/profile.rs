//! Contact channels listed beside the form.

use crate::config::Config;
use serde::Serialize;

/// One way to reach the portfolio owner directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactChannel {
    pub title: &'static str,
    pub value: String,
    pub link: String,
}

/// Build the configured channels, in display order (Email, Phone, Location).
///
/// Channels without a configured value are left out.
pub fn channels(config: &Config) -> Vec<ContactChannel> {
    let mut channels = Vec::new();

    if let Some(email) = &config.contact_email {
        channels.push(ContactChannel {
            title: "Email",
            value: email.clone(),
            link: format!("mailto:{}", email),
        });
    }

    if let Some(phone) = &config.contact_phone {
        let dialable: String = phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        channels.push(ContactChannel {
            title: "Phone",
            value: phone.clone(),
            link: format!("tel:{}", dialable),
        });
    }

    if let Some(location) = &config.contact_location {
        let link = config.contact_location_url.clone().unwrap_or_else(|| {
            format!(
                "https://www.google.com/maps/search/?api=1&query={}",
                urlencoding::encode(location)
            )
        });
        channels.push(ContactChannel {
            title: "Location",
            value: location.clone(),
            link,
        });
    }

    channels
}
