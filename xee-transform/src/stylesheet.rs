use std::path::{Path, PathBuf};

use tracing::warn;
use xee_interpreter::context::StaticContextBuilder;
use xee_interpreter::interpreter::Program;
use xot::Xot;

use crate::error::{Error, Result};
use crate::load::read_text;
use crate::output::{remove_output_elements, OutputDeclaration};

/// A compiled XSLT stylesheet.
///
/// Compiling is the expensive part of a transform; once compiled a
/// stylesheet is only read, so one instance can be applied to any number of
/// documents.
#[derive(Debug)]
pub struct Stylesheet {
    path: PathBuf,
    program: Program,
    output: OutputDeclaration,
}

impl Stylesheet {
    /// Read and compile the stylesheet at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let src = read_text(path)?;
        Self::compile(path, src)
    }

    /// Compile stylesheet source text. `path` is only used in errors.
    pub fn compile(path: &Path, src: String) -> Result<Self> {
        // the XSLT parser assumes well-formed input, so check that first to
        // get a proper error with a span
        let mut xot = Xot::new();
        let root = match xot.parse(&src) {
            Ok(root) => root,
            Err(source) => {
                return Err(Error::Parse {
                    path: path.to_path_buf(),
                    src,
                    source,
                })
            }
        };
        let output =
            OutputDeclaration::from_stylesheet(&xot, root).map_err(|message| Error::Output {
                path: path.to_path_buf(),
                message,
            })?;
        if let Some(encoding) = &output.encoding {
            if !encoding.eq_ignore_ascii_case("utf-8") {
                warn!(
                    stylesheet = %path.display(),
                    encoding = %encoding,
                    "output is always written as UTF-8"
                );
            }
        }
        // the output declaration is applied at serialization; the compiler
        // gets the stylesheet without it
        let removed = remove_output_elements(&mut xot, root).map_err(|e| Error::Output {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let src = if removed {
            xot.to_string(root).map_err(|e| Error::Output {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?
        } else {
            src
        };

        let static_context = StaticContextBuilder::default().build();
        match xee_xslt_compiler::parse(static_context, &src) {
            Ok(program) => Ok(Stylesheet {
                path: path.to_path_buf(),
                program,
                output,
            }),
            Err(source) => Err(Error::Stylesheet {
                path: path.to_path_buf(),
                src,
                source,
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    /// The stylesheet's `xsl:output` settings.
    pub fn output(&self) -> &OutputDeclaration {
        &self.output
    }
}
