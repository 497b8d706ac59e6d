//! Report the kind and protection status of documents on disk.
//!
//! ```text
//! cargo run --example check_protection -- report.docx scan.pdf
//! cargo run --example check_protection -- --strict --media-type application/pdf scan.bin
//! cargo run --example check_protection -- --kind xls ledger.dat
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use litchi_guard::{DetectOptions, DocumentKind, FileSource, ProtectionDetector, is_kind};

#[derive(Parser, Debug)]
#[command(about = "Detect password-protected Office and PDF documents")]
struct Args {
    /// Files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Declared media type applied to every file
    #[arg(long, default_value = "")]
    media_type: String,

    /// Trust only the declared media type
    #[arg(long)]
    strict: bool,

    /// Check as this kind instead of classifying (doc, docx, xls, xlsx, ppt, pptx, pdf)
    #[arg(long)]
    kind: Option<DocumentKind>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    let detector = ProtectionDetector::new();
    let options = DetectOptions {
        strict: args.strict,
    };
    let mut any_protected = false;

    for path in &args.files {
        let source = match FileSource::open(path, args.media_type.as_str()).await {
            Ok(source) => source,
            Err(e) => {
                eprintln!("{}: {e}", path.display());
                return ExitCode::from(2);
            },
        };

        let result = match args.kind {
            Some(kind) => {
                if !is_kind(&source, kind, options.strict) {
                    eprintln!("{}: does not classify as {kind}", path.display());
                }
                detector
                    .is_password_protected(&source, kind, options.strict)
                    .await
                    .map(|protected| Some((kind, protected)))
            },
            None => detector
                .check(&source, options)
                .await
                .map(|report| report.map(|r| (r.kind, r.protected))),
        };

        match result {
            Ok(Some((kind, protected))) => {
                any_protected |= protected;
                let status = if protected { "protected" } else { "not protected" };
                println!("{}: {kind}, {status}", path.display());
            },
            Ok(None) => println!("{}: unsupported", path.display()),
            Err(e) => {
                eprintln!("{}: {e}", path.display());
                return ExitCode::from(2);
            },
        }
    }

    if any_protected {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
