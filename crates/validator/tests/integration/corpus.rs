//! Labelled reference corpora; every registered rule must classify them
//! without a single false positive or false negative.

use filegate_validator::prelude::*;
use rstest::rstest;

fn universal() -> Corpus {
    Corpus::new(
        [
            "file.txt",
            "my_document.docx",
            "notes_2024-07-01.md",
            "image_001.png",
            "README",
            "data123",
            "file.name.with.dots",
            "file-name_with-mixed.chars",
        ],
        [
            "CON",
            "file?.txt",
            "file/name",
            "file:name",
            "file\0name",
            "file<name>",
            "file|name",
            "file.txt ",
            "file.txt.",
            "AUX",
            "NUL",
            "LPT1",
            "PRN",
            "file/with/slash",
        ],
    )
}

fn macos() -> Corpus {
    Corpus::new(
        [
            "file.txt",
            "my_document.docx",
            "notes_2024-07-01.md",
            "README",
            "file-name_with-mixed.chars",
        ],
        [
            "file/name",
            "file:name",
            "my:file",
            "folder/file",
            ":",
            "/",
            "file/:name",
            "file/name:bad",
        ],
    )
}

fn linux() -> Corpus {
    Corpus::new(
        [
            "file.txt",
            "my_document.docx",
            "notes_2024-07-01.md",
            "README",
            "file-name_with-mixed.chars",
        ],
        ["file/name", "file\0name", "/etc/passwd", "folder/file", "\0", "file/\0name"],
    )
}

fn windows() -> Corpus {
    Corpus::new(
        [
            "file.txt",
            "my_document.docx",
            "notes_2024-07-01.md",
            "README",
            "file-name_with-mixed.chars",
            "data123",
            "file_name",
        ],
        [
            "CON",
            "PRN",
            "AUX",
            "NUL",
            "COM1",
            "LPT1",
            "file?.txt",
            "file<name>",
            "file|name",
            "file.txt ",
            "file.txt.",
            "file/name",
            "file:name",
            "file*name",
            "file\"name",
            "file\\name",
            "file>name",
            "file<name",
            "file.txt\t",
            "file\nname",
        ],
    )
}

#[rstest]
#[case::universal(System::Universal, universal())]
#[case::macos(System::Macos, macos())]
#[case::linux(System::Linux, linux())]
#[case::windows(System::Windows, windows())]
fn reference_corpus_is_classified_perfectly(#[case] system: System, #[case] corpus: Corpus) {
    let report = Report::evaluate(&filename_for(system).unwrap(), &corpus);

    assert!(report.is_perfect(), "{report}");
    assert_eq!(report.total, corpus.len());
    assert_eq!(report.accuracy(), 100.0);
    assert_eq!(report.fp_rate(), 0.0);
    assert_eq!(report.fn_rate(), 0.0);
}

#[test]
fn windows_corpus_holds_for_every_windows_filesystem() {
    let corpus = windows();
    for system in System::ALL.into_iter().filter(|s| s.family() == Family::Windows) {
        let report = Report::evaluate(&filename_for(system).unwrap(), &corpus);
        assert!(report.is_perfect(), "{report}");
    }
}
