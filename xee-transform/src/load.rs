use std::{fs::File, io::Write, path::Path};

use xot::{Node, Xot};

use crate::error::{Error, Result};

/// Read a whole file as UTF-8 text.
pub(crate) fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::io(path, e))
}

/// Read and parse the XML document at `path`.
///
/// The bytes are decoded according to the document's encoding declaration,
/// so non UTF-8 documents load as well.
pub(crate) fn read_xml(xot: &mut Xot, path: &Path) -> Result<Node> {
    let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
    xot.parse_bytes(&bytes).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        src: String::from_utf8_lossy(&bytes).into_owned(),
        source,
    })
}

/// Create or truncate `path` and write `text` to it.
///
/// The file is closed again before this returns.
pub(crate) fn write_text(path: &Path, text: &str) -> Result<()> {
    let mut file = File::create(path).map_err(|e| Error::io(path, e))?;
    file.write_all(text.as_bytes())
        .map_err(|e| Error::io(path, e))?;
    file.flush().map_err(|e| Error::io(path, e))
}
