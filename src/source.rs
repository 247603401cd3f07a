//! The trait boundary an external collaborator must satisfy to hand this
//! crate bytes: disc-image mounting, ISO-9660 directory lookup, and plain
//! filesystem access are all deliberately out of scope for implementation
//! (§1), but the core still needs *some* uniform way to ask "open this
//! file" without caring which backing store answers. [`GameSource`] is
//! that seam, modeled directly on the original reference tool's
//! duck-typed `GameImage`/`GameDirectory` pair.

use std::io::Read;

use crate::error::{self, Error};
use crate::version::Version;

/// A source of the game's files, indifferent to whether it's backed by a
/// mounted CD image or a plain directory tree. Implementations of this
/// trait are external collaborators (§1) — this crate only consumes it.
pub trait GameSource {
    /// Open a named file under a subdirectory, returning a seekable byte
    /// stream. `sub_dir` is `""` for files at the image root.
    fn open(&self, sub_dir: &str, file_name: &str) -> error::Result<Box<dyn Read + '_>>;

    /// Test whether a named file exists under a subdirectory.
    fn has_file(&self, sub_dir: &str, file_name: &str) -> bool;
}

/// The line `SYSTEM.CNF` must start with, parameterized by the
/// executable name that follows it.
const BOOT_PREFIX: &str = "BOOT";

/// Identify the game release a [`GameSource`] holds, by reading
/// `SYSTEM.CNF`'s boot line and, for Japanese releases, disambiguating
/// the two revisions via a single byte inside the executable. Returns
/// the resolved [`Version`] plus the executable file name the boot line
/// named (for example `"SCUS_946.08"`).
pub fn probe_version(source: &dyn GameSource) -> error::Result<(Version, String)> {
    let mut cnf = source.open("", "SYSTEM.CNF")?;
    let mut contents = String::new();
    cnf.read_to_string(&mut contents)
        .map_err(|e| Error::Malformed(format!("failed to read SYSTEM.CNF: {e}")))?;

    let line = contents
        .lines()
        .next()
        .ok_or_else(|| Error::Malformed("SYSTEM.CNF is empty".into()))?;

    let exec_file_name = parse_boot_line(line)?;

    let version = match exec_file_name.as_str() {
        "SCPS_100.28" => {
            let mut exe = source.open("EXE", "WILDARMS.EXE")?;
            let mut header = [0u8; 32];
            exe.read_exact(&mut header)
                .map_err(|e| Error::Malformed(format!("failed to read WILDARMS.EXE header: {e}")))?;

            if header[16] == 0x10 {
                Version::Jp2
            } else {
                Version::Jp1
            }
        }
        "SCUS_946.08" => Version::Us,
        "SCES_003.21" => Version::En,
        "SCES_011.71" => Version::Fr,
        "SCES_011.72" => Version::De,
        "SCES_011.73" => Version::It,
        "SCES_011.74" => Version::Es,
        other => {
            return Err(Error::Malformed(format!(
                "unrecognized game version (executable name '{other}')"
            )))
        }
    };

    Ok((version, exec_file_name))
}

/// Parse a `SYSTEM.CNF` boot line of the form
/// `BOOT = cdrom:\EXE\<NAME>(;1)?` and return `<NAME>`.
fn parse_boot_line(line: &str) -> error::Result<String> {
    let line = line.trim_end_matches(['\r', '\n']);

    let (head, rest) = line
        .split_once('=')
        .ok_or_else(|| Error::Malformed(format!("unrecognized line '{line}' in SYSTEM.CNF")))?;

    if head.trim() != BOOT_PREFIX {
        return Err(Error::Malformed(format!(
            "unrecognized line '{line}' in SYSTEM.CNF (not a Wild Arms image?)"
        )));
    }

    let rest = rest.trim();
    let rest = rest
        .strip_prefix(r"cdrom:\EXE\")
        .ok_or_else(|| Error::Malformed(format!("unrecognized line '{line}' in SYSTEM.CNF")))?;

    let name = rest.trim_end_matches(";1");

    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_') {
        return Err(Error::Malformed(format!("unrecognized line '{line}' in SYSTEM.CNF")));
    }

    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    struct FakeSource {
        files: std::collections::HashMap<(String, String), Vec<u8>>,
    }

    impl GameSource for FakeSource {
        fn open(&self, sub_dir: &str, file_name: &str) -> error::Result<Box<dyn Read + '_>> {
            self.files
                .get(&(sub_dir.to_string(), file_name.to_string()))
                .map(|data| Box::new(Cursor::new(data.clone())) as Box<dyn Read>)
                .ok_or_else(|| Error::Malformed(format!("no such file {sub_dir}/{file_name}")))
        }

        fn has_file(&self, sub_dir: &str, file_name: &str) -> bool {
            self.files.contains_key(&(sub_dir.to_string(), file_name.to_string()))
        }
    }

    fn source_with_cnf(boot_line: &str) -> FakeSource {
        let mut files = std::collections::HashMap::new();
        files.insert(("".to_string(), "SYSTEM.CNF".to_string()), boot_line.as_bytes().to_vec());
        FakeSource { files }
    }

    #[test]
    fn parses_boot_line() {
        assert_eq!(
            parse_boot_line(r"BOOT = cdrom:\EXE\SCUS_946.08;1").unwrap(),
            "SCUS_946.08"
        );
        assert_eq!(
            parse_boot_line(r"BOOT=cdrom:\EXE\SCES_003.21").unwrap(),
            "SCES_003.21"
        );
    }

    #[test]
    fn rejects_unrecognized_line() {
        assert!(parse_boot_line("NOT A BOOT LINE").is_err());
    }

    #[test]
    fn probes_us_version() {
        let source = source_with_cnf(r"BOOT = cdrom:\EXE\SCUS_946.08;1");
        let (version, name) = probe_version(&source).unwrap();
        assert_eq!(version, Version::Us);
        assert_eq!(name, "SCUS_946.08");
    }

    #[test]
    fn probes_jp2_via_executable_byte() {
        let mut files = std::collections::HashMap::new();
        files.insert(
            ("".to_string(), "SYSTEM.CNF".to_string()),
            br"BOOT = cdrom:\EXE\SCPS_100.28;1".to_vec(),
        );
        let mut exe_header = vec![0u8; 32];
        exe_header[16] = 0x10;
        files.insert(("EXE".to_string(), "WILDARMS.EXE".to_string()), exe_header);

        let source = FakeSource { files };
        let (version, _) = probe_version(&source).unwrap();
        assert_eq!(version, Version::Jp2);
    }

    #[test]
    fn probes_jp1_when_executable_byte_differs() {
        let mut files = std::collections::HashMap::new();
        files.insert(
            ("".to_string(), "SYSTEM.CNF".to_string()),
            br"BOOT = cdrom:\EXE\SCPS_100.28;1".to_vec(),
        );
        files.insert(("EXE".to_string(), "WILDARMS.EXE".to_string()), vec![0u8; 32]);

        let source = FakeSource { files };
        let (version, _) = probe_version(&source).unwrap();
        assert_eq!(version, Version::Jp1);
    }

    #[test]
    fn unrecognized_executable_name_is_an_error() {
        let source = source_with_cnf(r"BOOT = cdrom:\EXE\SOMETHING_ELSE;1");
        assert!(probe_version(&source).is_err());
    }
}
