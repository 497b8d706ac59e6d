//! Synthetic documents for unit tests.
//!
//! Compound files are written with the `cfb` crate and OOXML packages with
//! the `zip` crate, so tests exercise genuine containers rather than
//! hand-assembled headers.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;

use crate::ole::consts::{ENCRYPTED_PACKAGE_STREAM, ENCRYPTION_INFO_STREAM};

/// Build a compound file with the given root-level streams.
pub fn compound_file(streams: &[(&str, &[u8])]) -> Vec<u8> {
    let mut compound = cfb::CompoundFile::create(Cursor::new(Vec::new())).unwrap();
    for (name, data) in streams {
        let mut stream = compound.create_stream(format!("/{name}")).unwrap();
        stream.write_all(data).unwrap();
        stream.flush().unwrap();
    }
    compound.flush().unwrap();
    compound.into_inner().into_inner()
}

/// Build a CDFV2-Encrypted envelope like the one Office writes for a
/// password-protected `.docx`, `.xlsx` or `.pptx`.
pub fn encrypted_envelope() -> Vec<u8> {
    // Standard Encryption version 3.2 header followed by opaque key data.
    let mut encryption_info = vec![0x03, 0x00, 0x02, 0x00, 0x24, 0x00, 0x00, 0x00];
    encryption_info.extend_from_slice(&[0xA5; 120]);

    let mut encrypted_package = 4096u64.to_le_bytes().to_vec();
    encrypted_package.extend((0..4096u32).map(|i| (i.wrapping_mul(31) % 251) as u8));

    let mut version = Vec::new();
    write_unicode_lpp4(&mut version, "Microsoft.Container.DataSpaces");
    for _ in 0..3 {
        version.extend_from_slice(&1u16.to_le_bytes());
        version.extend_from_slice(&0u16.to_le_bytes());
    }

    let mut compound = cfb::CompoundFile::create(Cursor::new(Vec::new())).unwrap();
    compound.create_storage("/\u{0006}DataSpaces").unwrap();
    for (path, data) in [
        (format!("/{ENCRYPTION_INFO_STREAM}"), &encryption_info),
        (format!("/{ENCRYPTED_PACKAGE_STREAM}"), &encrypted_package),
        ("/\u{0006}DataSpaces/Version".to_string(), &version),
    ] {
        let mut stream = compound.create_stream(path).unwrap();
        stream.write_all(data).unwrap();
        stream.flush().unwrap();
    }
    compound.flush().unwrap();
    compound.into_inner().into_inner()
}

/// Build a deflated ZIP package with the given entries.
pub fn ooxml_package(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    for (name, data) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(data).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Minimal unprotected word processing package.
pub fn docx_package() -> Vec<u8> {
    ooxml_package(&[
        (
            "[Content_Types].xml",
            b"<Types><Override PartName=\"/word/document.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml\"/></Types>",
        ),
        ("word/document.xml", b"<w:document><w:body><w:p/></w:body></w:document>"),
    ])
}

fn write_unicode_lpp4(buf: &mut Vec<u8>, s: &str) {
    let bytes: Vec<u8> = s.encode_utf16().flat_map(u16::to_le_bytes).collect();
    let len = bytes.len() as u32;
    buf.extend_from_slice(&len.to_le_bytes());
    buf.extend_from_slice(&bytes);
    if (len % 4) == 2 {
        buf.extend_from_slice(&0u16.to_le_bytes());
    }
}
