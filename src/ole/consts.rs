//! Constants for legacy Office binary formats.

/// Magic bytes that should be at the beginning of every OLE file
pub const MAGIC: &[u8; 8] = b"\xD0\xCF\x11\xE0\xA1\xB1\x1A\xE1";

// Encryption envelope stream names ([MS-OFFCRYPTO] 2.3.4, CDFV2-Encrypted)
/// Stream describing the encryption parameters of an encrypted package
pub const ENCRYPTION_INFO_STREAM: &str = "EncryptionInfo";
/// Stream holding the encrypted OOXML package
pub const ENCRYPTED_PACKAGE_STREAM: &str = "EncryptedPackage";

/// Directory entry names that mark a compound file as an encryption envelope
pub const ENCRYPTION_STREAMS: [&str; 2] = [ENCRYPTION_INFO_STREAM, ENCRYPTED_PACKAGE_STREAM];

// Word binary File Information Block ([MS-DOC] 2.5.2, FibBase)
/// Bytes read from the start of a .doc when looking at the FIB
pub const DOC_HEADER_WINDOW: usize = 512;
/// Offset of the FibBase flag byte holding fEncrypted
pub const FIB_FLAGS_OFFSET: usize = 0x0B;
/// fEncrypted bit within the flag byte
pub const FIB_ENCRYPTED_MASK: u8 = 0x01;

// BIFF FilePass record ([MS-XLS] 2.4.117), record id 0x002F stored little-endian
/// Record identifier bytes of a FilePass record
pub const FILE_PASS_RECORD: [u8; 2] = [0x2F, 0x00];
/// Bytes of a .xls scanned for a FilePass record
pub const XLS_SCAN_WINDOW: usize = 1024;
/// Bytes of a .ppt scanned for a FilePass record
pub const PPT_SCAN_WINDOW: usize = 512;
