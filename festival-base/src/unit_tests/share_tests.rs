// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use test_case::test_case;

use super::*;

fn diwali_context(message: &str) -> ShareContext {
    ShareContext::new("Diwali", message, DEFAULT_SHARE_BASE_URL, TokenId::from(7))
}

#[test]
fn test_page_url() {
    assert_eq!(
        greeting_page_url("https://festivalgreetings.com/", TokenId::from(12)),
        "https://festivalgreetings.com/share/12"
    );
}

#[test_case("short", "short"; "short message")]
#[test_case(&"a".repeat(50), &"a".repeat(50); "exactly the limit")]
#[test_case(&"a".repeat(51), &format!("{}...", "a".repeat(50)); "one over the limit")]
#[test_case(&"é".repeat(60), &format!("{}...", "é".repeat(50)); "multi-byte characters")]
fn test_truncate_message(message: &str, expected: &str) {
    assert_eq!(truncate_message(message), expected);
}

#[test]
fn test_twitter_url() {
    let url = build_share_url(SharePlatform::Twitter, &diwali_context("Happy Diwali!"));
    assert_eq!(
        url,
        "https://twitter.com/intent/tweet?text=Check%20out%20my%20Diwali%20greeting%3A%20%22Happy%20Diwali!%22\
         &url=https%3A%2F%2Ffestivalgreetings.com%2Fshare%2F7"
    );
}

#[test]
fn test_facebook_url() {
    let url = build_share_url(SharePlatform::Facebook, &diwali_context("Hi"));
    assert_eq!(
        url,
        "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Ffestivalgreetings.com%2Fshare%2F7\
         &quote=Check%20out%20my%20Diwali%20greeting%3A%20%22Hi%22"
    );
}

#[test]
fn test_linkedin_url_carries_only_the_page() {
    let url = build_share_url(SharePlatform::Linkedin, &diwali_context("Hi"));
    assert_eq!(
        url,
        "https://www.linkedin.com/sharing/share-offsite/?url=https%3A%2F%2Ffestivalgreetings.com%2Fshare%2F7"
    );
}

#[test]
fn test_email_url() {
    let url = build_share_url(SharePlatform::Email, &diwali_context("Hi"));
    assert_eq!(
        url,
        "mailto:?subject=Diwali%20Greeting%20for%20you\
         &body=Check%20out%20my%20Diwali%20greeting%3A%20%22Hi%22%0A%0AView%20it%20here%3A%20\
         https%3A%2F%2Ffestivalgreetings.com%2Fshare%2F7"
    );
}

#[test]
fn test_long_messages_are_truncated_in_links() {
    let message = "x".repeat(80);
    let url = build_share_url(SharePlatform::Twitter, &diwali_context(&message));
    assert!(url.contains(&format!("{}...%22", "x".repeat(50))));
    assert!(!url.contains(&"x".repeat(51)));
}

#[test]
fn test_platform_names() {
    for platform in SharePlatform::ALL {
        assert_eq!(platform.to_string().parse::<SharePlatform>().unwrap(), platform);
    }
    assert_eq!("LinkedIn".parse::<SharePlatform>().unwrap(), SharePlatform::Linkedin);
}

#[test]
fn test_unknown_platform_yields_empty_url() {
    assert_eq!(build_share_url_for("myspace", &diwali_context("Hi")), "");
    assert!(build_share_url_for("email", &diwali_context("Hi")).starts_with("mailto:"));
}
