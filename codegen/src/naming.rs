/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

//! Conversions from Smithy names to Rust identifiers.

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "box", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "macro", "match", "mod",
    "move", "mut", "priv", "pub", "ref", "return", "self", "Self", "static", "struct", "super",
    "trait", "true", "try", "type", "typeof", "unsafe", "unsized", "use", "virtual", "where",
    "while", "yield", "abstract", "become", "do", "final", "override",
];

// Keywords that can't be used as raw identifiers either.
const NON_RAW_KEYWORDS: &[&str] = &["crate", "self", "Self", "super"];

/// Converts a Smithy member or shape name to `snake_case`.
///
/// A word boundary is placed before an uppercase letter that follows a lowercase letter or a
/// digit, and before the last uppercase letter of an acronym that is followed by lowercase
/// letters: `DevEndpoint` becomes `dev_endpoint`, `XMLClassifier` becomes `xml_classifier`
/// and `S3Targets` becomes `s3_targets`.
pub fn to_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);
    for (i, &c) in chars.iter().enumerate() {
        if !c.is_ascii_alphanumeric() {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            continue;
        }
        if c.is_ascii_uppercase() && i > 0 && !out.is_empty() && !out.ends_with('_') {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).map_or(false, |n| n.is_ascii_lowercase());
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && next_is_lower)
            {
                out.push('_');
            }
        }
        out.push(c.to_ascii_lowercase());
    }
    while out.ends_with('_') {
        out.pop();
    }
    out
}

/// Converts an enum name or value into a `PascalCase` variant name.
///
/// Words are split on anything that isn't alphanumeric. Words written entirely in uppercase are
/// capitalized (`SSE_KMS` becomes `SseKms`), mixed-case words keep their casing, and a leading
/// digit is prefixed with `Value`.
pub fn to_pascal_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for word in name.split(|c: char| !c.is_ascii_alphanumeric()) {
        if word.is_empty() {
            continue;
        }
        let shout = word
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit());
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
            if shout {
                out.extend(chars.map(|c| c.to_ascii_lowercase()));
            } else {
                out.extend(chars);
            }
        }
    }
    if out.starts_with(|c: char| c.is_ascii_digit()) {
        out.insert_str(0, "Value");
    }
    out
}

/// Escapes identifiers that collide with Rust keywords.
pub fn escape_keyword(ident: String) -> String {
    if NON_RAW_KEYWORDS.contains(&ident.as_str()) {
        format!("{}_", ident)
    } else if RUST_KEYWORDS.contains(&ident.as_str()) {
        format!("r#{}", ident)
    } else {
        ident
    }
}

/// Field and method name for a structure member.
pub fn member_name(name: &str) -> String {
    escape_keyword(to_snake_case(name))
}

/// Enum variant name for an enum value, keeping clear of the `Unknown` catch-all.
pub fn enum_variant_name(name: &str) -> String {
    let variant = to_pascal_case(name);
    match variant.as_str() {
        "" => "Empty".to_owned(),
        "Unknown" => "UnknownValue".to_owned(),
        "Self" => "SelfValue".to_owned(),
        _ => variant,
    }
}

#[cfg(test)]
mod test {
    use super::{enum_variant_name, member_name, to_pascal_case, to_snake_case};

    #[test]
    fn snake_case() {
        assert_eq!(to_snake_case("DevEndpoint"), "dev_endpoint");
        assert_eq!(to_snake_case("XMLClassifier"), "xml_classifier");
        assert_eq!(to_snake_case("S3Targets"), "s3_targets");
        assert_eq!(to_snake_case("DynamoDBTargets"), "dynamo_db_targets");
        assert_eq!(to_snake_case("MLTransform"), "ml_transform");
        assert_eq!(to_snake_case("scanAll"), "scan_all");
        assert_eq!(to_snake_case("ExtraJarsS3Path"), "extra_jars_s3_path");
        assert_eq!(to_snake_case("F1"), "f1");
        assert_eq!(to_snake_case("ID"), "id");
        assert_eq!(to_snake_case("AreaUnderPRCurve"), "area_under_pr_curve");
        assert_eq!(
            to_snake_case("StartMLLabelingSetGenerationTaskRun"),
            "start_ml_labeling_set_generation_task_run"
        );
    }

    #[test]
    fn keywords_are_escaped() {
        assert_eq!(member_name("Type"), "r#type");
        assert_eq!(member_name("Match"), "r#match");
        assert_eq!(member_name("Self"), "self_");
        assert_eq!(member_name("Name"), "name");
    }

    #[test]
    fn pascal_case() {
        assert_eq!(to_pascal_case("SSE_KMS"), "SseKms");
        assert_eq!(to_pascal_case("SSE-KMS"), "SseKms");
        assert_eq!(to_pascal_case("G.1X"), "G1x");
        assert_eq!(to_pascal_case("Standard"), "Standard");
        assert_eq!(to_pascal_case("NOT_READY"), "NotReady");
        assert_eq!(to_pascal_case("ON_DEMAND"), "OnDemand");
        assert_eq!(to_pascal_case("camelCase"), "CamelCase");
        assert_eq!(to_pascal_case("1X"), "Value1x");
    }

    #[test]
    fn variant_names_avoid_the_catch_all() {
        assert_eq!(enum_variant_name("UNKNOWN"), "UnknownValue");
        assert_eq!(enum_variant_name("PRESENT"), "Present");
        assert_eq!(enum_variant_name("--"), "Empty");
    }

    proptest::proptest! {
        #[test]
        fn snake_case_is_a_valid_identifier(name in "[A-Za-z][A-Za-z0-9]{0,24}") {
            let snake = to_snake_case(&name);
            proptest::prop_assert!(!snake.is_empty());
            proptest::prop_assert!(snake
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'));
            proptest::prop_assert!(!snake.contains("__"));
            proptest::prop_assert!(!snake.starts_with('_') && !snake.ends_with('_'));
            proptest::prop_assert_eq!(to_snake_case(&snake), snake);
        }

        #[test]
        fn pascal_case_never_starts_with_a_digit(value in "[A-Za-z0-9._-]{1,24}") {
            let variant = to_pascal_case(&value);
            proptest::prop_assert!(variant.chars().all(|c| c.is_ascii_alphanumeric()));
            proptest::prop_assert!(!variant.starts_with(|c: char| c.is_ascii_digit()));
        }
    }
}
