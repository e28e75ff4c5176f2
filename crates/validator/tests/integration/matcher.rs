use filegate_validator::prelude::*;
use rstest::rstest;

#[rstest]
#[case(System::Apfs)]
#[case(System::HfsPlus)]
#[case(System::Ext4)]
#[case(System::Btrfs)]
#[case(System::Udf)]
#[case(System::Iso9660)]
#[case(System::Ios)]
#[case(System::Android)]
fn unsupported_systems_are_configuration_errors(#[case] system: System) {
    let err = filename(Some(FilenameArgs { system })).unwrap_err();
    assert_eq!(err.system(), system.as_str());
    assert_eq!(err.to_string(), format!("Unsupported system type: {system}"));
}

#[rstest]
#[case("")]
#[case("unsupportedOS")]
#[case("win32")]
fn garbage_identifiers_are_configuration_errors(#[case] raw: &str) {
    let err = filename_named(raw).unwrap_err();
    assert_eq!(err.to_string(), format!("Unsupported system type: {raw}"));
}

#[test]
fn named_and_typed_construction_agree() {
    for system in System::ALL {
        let typed = filename_for(system).map(|v| v.system());
        let named = filename_named(system.as_str()).map(|v| v.system());
        assert_eq!(typed, named, "{system}");
    }
}

#[test]
fn pass_through_accepts_everything() {
    let any = filename(None).unwrap();
    for name in ["", "anything", "CON", "a/b", "a:b", "\u{0}", "trailing. "] {
        assert!(any.check(name).is_accepted(), "{name:?}");
        assert!(any.validate(name).is_ok());
    }
}

#[test]
fn error_is_a_std_error() {
    fn boxed() -> Result<FilenameValidator, Box<dyn std::error::Error>> {
        Ok(filename_named("ext4")?)
    }
    assert_eq!(boxed().unwrap_err().to_string(), "Unsupported system type: ext4");
}
