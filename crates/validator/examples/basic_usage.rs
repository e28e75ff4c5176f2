//! Basic usage example for filegate-validator

use filegate_validator::prelude::*;

fn main() -> Result<(), UnsupportedSystemError> {
    let ntfs = filename(Some(FilenameArgs { system: System::Ntfs }))?;

    for name in ["My File-1.doc", "nul.txt", "draft?.md", "notes.txt "] {
        match ntfs.check(name) {
            Check::Accepted => println!("✓ {name:?} is valid on ntfs"),
            Check::Rejected { message } => println!("✗ {name:?}: {message}"),
        }
    }

    // Systems without a rule fail when the validator is built.
    match filename_named("ext4") {
        Ok(_) => println!("ext4 has a rule"),
        Err(e) => println!("\n{e}"),
    }

    let corpus = Corpus::new(["report.pdf", ".hidden"], ["CON", "a:b", "x/y"]);
    println!("\n{}", Report::evaluate(&filename_for(System::Universal)?, &corpus));

    Ok(())
}
