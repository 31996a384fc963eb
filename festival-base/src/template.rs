// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Placeholder substitution for SVG greeting designs.
//!
//! Substitution is literal and performs no escaping: callers that display user text
//! must sanitize it first.

use crate::data_types::GreetingTemplate;

pub const FESTIVAL_PLACEHOLDER: &str = "{{festival}}";
pub const MESSAGE_PLACEHOLDER: &str = "{{message}}";
pub const DATE_PLACEHOLDER: &str = "{{date}}";

/// Size used by greeting previews.
pub const PREVIEW_SIZE: (u32, u32) = (320, 240);
/// Size used by design thumbnails.
pub const THUMBNAIL_SIZE: (u32, u32) = (100, 100);

/// The values substituted into a template. Missing values render as empty strings.
#[derive(Clone, Copy, Debug, Default)]
pub struct TemplateValues<'a> {
    pub festival: Option<&'a str>,
    pub message: Option<&'a str>,
    pub date: Option<&'a str>,
}

impl<'a> TemplateValues<'a> {
    pub fn new(festival: &'a str, message: &'a str, date: &'a str) -> Self {
        Self {
            festival: Some(festival),
            message: Some(message),
            date: Some(date),
        }
    }
}

/// Replaces every `{{festival}}`, `{{message}}` and `{{date}}` in `template`, in that
/// order. Any other text, including unknown placeholders, is left as is.
pub fn render(template: &str, values: &TemplateValues<'_>) -> String {
    template
        .replace(FESTIVAL_PLACEHOLDER, values.festival.unwrap_or_default())
        .replace(MESSAGE_PLACEHOLDER, values.message.unwrap_or_default())
        .replace(DATE_PLACEHOLDER, values.date.unwrap_or_default())
}

/// Rewrites the first `width="500"` and `height="500"` attributes of a design.
pub fn resize(svg: &str, width: u32, height: u32) -> String {
    svg.replacen(r#"width="500""#, &format!(r#"width="{width}""#), 1)
        .replacen(r#"height="500""#, &format!(r#"height="{height}""#), 1)
}

/// Renders a design at preview size.
pub fn render_preview(design: &GreetingTemplate, values: &TemplateValues<'_>) -> String {
    let (width, height) = PREVIEW_SIZE;
    render(&resize(design.svg_template, width, height), values)
}

/// Renders a design thumbnail with sample text.
pub fn render_thumbnail(design: &GreetingTemplate) -> String {
    let (width, height) = THUMBNAIL_SIZE;
    let values = TemplateValues::new("Festival", "Your Message", "23/05/2025");
    render(&resize(design.svg_template, width, height), &values)
}

#[cfg(test)]
#[path = "unit_tests/template_tests.rs"]
mod template_tests;
