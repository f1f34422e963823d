use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::error::ReportError;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, ReportError> {
    if !path.exists() {
        return Err(ReportError::MissingInput(path.to_path_buf()));
    }
    let file = File::open(path)?;
    let mut reader: Box<dyn BufRead> = if path.extension().is_some_and(|ext| ext == "gz") {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };
    skip_bom(reader.as_mut())?;
    Ok(reader)
}

/// Report generators on Windows prefix UTF-8 output with a BOM, which would
/// otherwise end up glued to the first header name.
pub fn skip_bom(reader: &mut dyn BufRead) -> Result<(), ReportError> {
    let buf = reader.fill_buf()?;
    if buf.starts_with(UTF8_BOM) {
        reader.consume(UTF8_BOM.len());
    }
    Ok(())
}
