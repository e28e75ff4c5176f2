use filegate_validator::filename::{Family, System, registry};
use pretty_assertions::assert_eq;

#[test]
fn registry_stats() {
    let stats = registry::stats();
    assert_eq!(stats.systems, 24);
    assert_eq!(stats.supported, 10);
    assert_eq!(stats.distinct_rules, 4);
}

#[test]
fn every_identifier_is_either_supported_or_not() {
    let supported = registry::supported().count();
    let unsupported = registry::unsupported().count();
    assert_eq!(supported + unsupported, System::ALL.len());
}

#[test]
fn lookups_return_the_same_rule() {
    for system in System::ALL {
        match (registry::lookup(system), registry::lookup(system)) {
            (Some(a), Some(b)) => assert!(std::ptr::eq(a, b), "{system}"),
            (None, None) => {}
            _ => panic!("unstable lookup for {system}"),
        }
    }
}

#[test]
fn only_four_families_have_rules() {
    for system in registry::unsupported() {
        assert!(
            matches!(
                system.family(),
                Family::Apple | Family::Linux | Family::Optical | Family::Mobile
            ),
            "{system}"
        );
    }
    for (system, rule) in registry::supported() {
        let expected = match system.family() {
            Family::Universal => "universal",
            Family::Windows => "windows",
            Family::Apple => "macos",
            Family::Linux => "linux",
            Family::Optical | Family::Mobile => unreachable!("{system} has no rule"),
        };
        assert_eq!(rule.name(), expected);
    }
}

#[test]
fn rule_messages() {
    insta::assert_debug_snapshot!(
        registry::supported()
            .filter(|(system, _)| matches!(
                system,
                System::Universal | System::Macos | System::Linux | System::Windows
            ))
            .map(|(_, rule)| rule)
            .collect::<Vec<_>>(),
        @r#"
    [
        Rule {
            name: "universal",
            message: "Invalid universal filename: contains illegal characters, is a reserved name, or ends with '.' or ' '.",
            ..
        },
        Rule {
            name: "macos",
            message: "Invalid macOS filename: cannot contain '/' or ':' characters.",
            ..
        },
        Rule {
            name: "linux",
            message: "Invalid Linux filename: cannot contain null or '/' characters.",
            ..
        },
        Rule {
            name: "windows",
            message: "Invalid Windows filename: contains illegal characters (< > : \" / \\ | ? *), is a reserved name, or ends with '.' or ' '.",
            ..
        },
    ]
    "#
    );
}
