//! Example: Assembling a ZIP archive with zipwright-core
//!
//! Run with: `cargo run --example create_archive`

use zipwright_core::NamedFile;
use zipwright_core::ZipOperation;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let workdir = std::env::temp_dir().join("zipwright-example");
    let sources = workdir.join("dist");
    std::fs::create_dir_all(sources.join("lib"))?;
    std::fs::write(sources.join("app.class"), "app")?;
    std::fs::write(sources.join("lib/util.class"), "util")?;
    std::fs::write(sources.join("AppTest.class"), "test")?;
    std::fs::write(workdir.join("README.md"), "Hello, zipwright!")?;

    // Directory contents are flattened to basenames, the README is renamed
    let report = ZipOperation::new()
        .add_source_directory(&sources)
        .add_source_file(NamedFile::new("README.txt", workdir.join("README.md")))
        .with_destination_directory(workdir.join("out"))
        .with_destination_file_name("app.zip")
        .include_str(r"\.(class|md)$")?
        .exclude_str("Test")?
        .execute()?;

    println!("Created {}", report.destination.display());
    for entry in &report.entries {
        println!("  {:<12} {:o} {} bytes", entry.name, entry.mode, entry.size);
    }

    std::fs::remove_dir_all(&workdir)?;
    Ok(())
}
