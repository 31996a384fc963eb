// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use test_case::test_case;

use super::*;
use crate::catalog::DesignCatalog;

#[test]
fn test_render_replaces_every_occurrence() {
    let template = "<t>{{festival}}|{{message}}|{{date}}|{{festival}}{{message}}</t>";
    let values = TemplateValues::new("Diwali", "Hi", "2025-05-23");
    assert_eq!(
        render(template, &values),
        "<t>Diwali|Hi|2025-05-23|DiwaliHi</t>"
    );
}

#[test]
fn test_render_leaves_other_text_alone() {
    let template = "a {{name}} b {{ message }} c {{message}}";
    let values = TemplateValues::new("Diwali", "Hi", "2025-05-23");
    assert_eq!(render(template, &values), "a {{name}} b {{ message }} c Hi");
}

#[test]
fn test_missing_values_render_empty() {
    let values = TemplateValues {
        message: Some("Hello"),
        ..TemplateValues::default()
    };
    assert_eq!(
        render("[{{festival}}][{{message}}][{{date}}]", &values),
        "[][Hello][]"
    );
}

#[test_case("", ""; "empty template")]
#[test_case("no placeholders", "no placeholders"; "plain text")]
fn test_render_without_placeholders(template: &str, expected: &str) {
    let values = TemplateValues::new("Eid", "Peace", "today");
    assert_eq!(render(template, &values), expected);
}

#[test]
fn test_every_builtin_design_renders_completely() {
    let values = TemplateValues::new("Diwali", "Hi", "2025-05-23");
    for design in DesignCatalog::builtin().list() {
        let svg = render(design.svg_template, &values);
        assert!(!svg.contains("{{"), "{} kept a placeholder", design.name);
        assert!(svg.contains("Diwali"));
        assert!(svg.contains("2025-05-23"));
        assert_eq!(
            svg.len(),
            design.svg_template.len() - FESTIVAL_PLACEHOLDER.len() - MESSAGE_PLACEHOLDER.len()
                - DATE_PLACEHOLDER.len()
                + "Diwali".len()
                + "Hi".len()
                + "2025-05-23".len()
        );
    }
}

#[test]
fn test_resize_only_touches_root_dimensions() {
    let design = DesignCatalog::builtin().first();
    let resized = resize(design.svg_template, 320, 240);
    assert!(resized.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="320" height="240""#));
    // The background rectangle keeps its size.
    assert!(resized.contains(r#"<rect width="500" height="500""#));
}

#[test]
fn test_thumbnail_uses_sample_text() {
    let design = DesignCatalog::builtin().get(3).unwrap();
    let thumbnail = render_thumbnail(design);
    assert!(thumbnail.contains(r#"width="100" height="100""#));
    assert!(thumbnail.contains("Your Message"));
    assert!(thumbnail.contains("23/05/2025"));
}
