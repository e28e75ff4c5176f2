//! Acceptance tables for every registered rule, driven through the public
//! matcher the way a host application would use it.

use filegate_validator::prelude::*;
use rstest::rstest;

fn validator(system: System) -> FilenameValidator {
    filename(Some(FilenameArgs { system })).unwrap()
}

// ============================================================================
// WINDOWS FAMILY
// ============================================================================

#[rstest]
#[case::reserved("NUL")]
#[case::reserved_with_extension("nul.txt")]
#[case::reserved_mixed_case("Com3.log")]
#[case::reserved_lpt("lpt9")]
#[case::reserved_double_extension("aux.tar.gz")]
#[case::illegal_char("file?.txt")]
#[case::pipe("a|b")]
#[case::quote("say \"hi\"")]
#[case::control_char("tab\there")]
#[case::trailing_space("file.txt ")]
#[case::trailing_dot("file.txt.")]
#[case::empty("")]
fn windows_rejects(
    #[values(
        System::Windows,
        System::Ntfs,
        System::Fat32,
        System::Exfat,
        System::Refs,
        System::Fat16,
        System::Fat12
    )]
    system: System,
    #[case] name: &str,
) {
    let check = validator(system).check(name);
    assert!(!check.is_accepted(), "{system}: {name:?}");
    assert_eq!(check.message(), validator(System::Windows).message());
}

#[rstest]
#[case("My File-1.doc")]
#[case("CONSOLE")]
#[case("COM10")]
#[case("LPT0.txt")]
#[case("xcon.txt")]
#[case(".gitignore")]
#[case("résumé.pdf")]
fn windows_accepts(#[case] name: &str) {
    for system in [System::Windows, System::Ntfs, System::Fat32] {
        assert!(validator(system).check(name).is_accepted(), "{system}: {name:?}");
    }
}

// ============================================================================
// LINUX / MACOS
// ============================================================================

#[rstest]
#[case("file/name", false)]
#[case("file\u{0}name", false)]
#[case(".hidden", true)]
#[case("a_b-c=d+e", true)]
#[case("CON", true)]
#[case("a:b", true)]
#[case("trailing. ", true)]
#[case("", false)]
fn linux_rule(#[case] name: &str, #[case] accepted: bool) {
    assert_eq!(validator(System::Linux).check(name).is_accepted(), accepted, "{name:?}");
}

#[rstest]
#[case("a:b", false)]
#[case("a/b", false)]
#[case("normal.name", true)]
#[case("NUL", true)]
#[case("a\\b", true)]
#[case("", false)]
fn macos_rule(#[case] name: &str, #[case] accepted: bool) {
    assert_eq!(validator(System::Macos).check(name).is_accepted(), accepted, "{name:?}");
}

// ============================================================================
// UNIVERSAL
// ============================================================================

#[rstest]
#[case("CON", false)]
#[case("a:b", false)]
#[case("a/b", false)]
#[case("a\u{0}b", false)]
#[case("ends.", false)]
#[case("ends ", false)]
#[case("what?", false)]
#[case("", false)]
#[case("plain_file-1.ext", true)]
#[case(".hidden", true)]
fn universal_rule(#[case] name: &str, #[case] accepted: bool) {
    assert_eq!(
        validator(System::Universal).check(name).is_accepted(),
        accepted,
        "{name:?}"
    );
}

#[test]
fn universal_rejects_whatever_any_platform_rejects() {
    let universal = validator(System::Universal);
    let platforms = [System::Windows, System::Linux, System::Macos].map(validator);
    let samples = [
        "ok", "CON", "con.txt", "a:b", "a/b", "a\\b", "x\u{0}", "x\u{1f}", "dot.", "space ", "",
        "*", "file.tar.gz",
    ];

    for name in samples {
        let rejected_somewhere = platforms.iter().any(|v| !v.check(name).is_accepted());
        assert_eq!(
            universal.check(name).is_accepted(),
            !rejected_somewhere,
            "{name:?}"
        );
    }
}

// ============================================================================
// DETERMINISM
// ============================================================================

#[test]
fn repeated_checks_agree() {
    let windows = validator(System::Windows);
    for name in ["My File-1.doc", "CON", "a?b", "fine.txt"] {
        let first = windows.check(name);
        for _ in 0..3 {
            assert_eq!(windows.check(name), first);
        }
        assert_eq!(validator(System::Windows).check(name), first);
    }
}
