use crate::division::Division;
use crate::elimination::DivisionReport;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub fn save_division<P: AsRef<Path>>(path: P, division: &Division) -> io::Result<()> {
    let bytes = bincode::serialize(division)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, format!("serialize division: {err}")))?;
    fs::write(path, bytes)
}

pub fn load_division<P: AsRef<Path>>(path: P) -> io::Result<Division> {
    let bytes = fs::read(path)?;
    bincode::deserialize(&bytes)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, format!("deserialize division: {err}")))
}

pub fn write_division_text<P: AsRef<Path>>(path: P, division: &Division) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    write!(file, "{division}")
}

pub fn write_report_json<W: Write>(writer: W, report: &DivisionReport) -> io::Result<()> {
    serde_json::to_writer_pretty(writer, report)
        .map_err(|err| io::Error::new(io::ErrorKind::Other, format!("serialize report: {err}")))
}

/// Whether a path names a binary snapshot rather than the text format.
pub fn is_binary_snapshot<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .is_some_and(|extension| extension == "bin")
}
