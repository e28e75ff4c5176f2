//! Filename rules attached to a generic string pipeline.

use filegate_validator::compose;
use filegate_validator::filename::INVALID_FILENAME;
use filegate_validator::foundation::validate_with_all;
use filegate_validator::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn refinement_on_string_rule() {
    let windows = filename_for(System::Windows).unwrap();
    let field = string().refine(windows.predicate(), windows.message().unwrap());

    assert!(field.validate("report.pdf").is_ok());
    let err = field.validate("report.pdf.").unwrap_err();
    assert_eq!(err.message, windows.message().unwrap());
}

#[test]
fn into_refinement_keeps_filename_code() {
    let field = string().and(filename_for(System::Macos).unwrap().into_refinement());
    let err = field.validate("a:b").unwrap_err();
    assert_eq!(err.code, INVALID_FILENAME);
}

#[test]
fn validate_reports_system_param() {
    let err = filename_for(System::Fat32)
        .unwrap()
        .validate("PRN.txt")
        .unwrap_err();
    assert_eq!(err.code, INVALID_FILENAME);
    assert_eq!(err.param("system"), Some("fat32"));
}

#[test]
fn composed_platforms_behave_like_universal() {
    let portable = compose![
        filename_for(System::Linux).unwrap(),
        filename_for(System::Macos).unwrap(),
        filename_for(System::Windows).unwrap(),
    ];
    let universal = filename_for(System::Universal).unwrap();

    for name in ["ok.txt", "a:b", "CON", "x/y", "dot.", ""] {
        assert_eq!(
            portable.validate(name).is_ok(),
            universal.is_valid(name),
            "{name:?}"
        );
    }
}

#[test]
fn custom_message_wraps_rejection() {
    let field = filename_for(System::Linux)
        .unwrap()
        .with_message("pick another name");
    let err = field.validate("a/b").unwrap_err();
    assert_eq!(err.message, "pick another name");
    assert!(err.has_nested());
}

#[test]
fn collect_every_platform_rejection() {
    let linux = filename_for(System::Linux).unwrap();
    let macos = filename_for(System::Macos).unwrap();
    let windows = filename_for(System::Windows).unwrap();

    let errors = validate_with_all("a/b", &[&linux, &macos, &windows]).unwrap_err();
    assert_eq!(errors.len(), 3);

    let errors = validate_with_all("a:b", &[&linux, &macos, &windows]).unwrap_err();
    let systems: Vec<_> = errors
        .errors()
        .iter()
        .filter_map(|e| e.param("system"))
        .collect();
    assert_eq!(systems, ["macos", "windows"]);
}

#[cfg(feature = "serde")]
#[test]
fn rejection_as_json() {
    let err = filename_for(System::Linux)
        .unwrap()
        .validate("a/b")
        .unwrap_err();
    insta::assert_json_snapshot!(err.to_json_value(), @r#"
    {
      "code": "invalid_filename",
      "field": null,
      "help": null,
      "message": "Invalid Linux filename: cannot contain null or '/' characters.",
      "nested": [],
      "params": {
        "system": "linux"
      }
    }
    "#);
}
