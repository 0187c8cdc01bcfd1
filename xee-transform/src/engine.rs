use std::path::Path;

use tracing::debug;
use xee_interpreter::xml::Documents;
use xot::Xot;

use crate::error::{Error, Result};
use crate::load::read_xml;
use crate::stylesheet::Stylesheet;

/// Something that can compile a stylesheet and apply it to documents.
///
/// The runner only talks to this trait, so a batch can be driven by any
/// engine; [`XeeEngine`] is the real one.
pub trait Engine {
    /// A compiled stylesheet, reusable across documents.
    type Compiled;

    fn compile(&mut self, stylesheet: &Path) -> Result<Self::Compiled>;

    /// Apply a compiled stylesheet to the document at `input` and return
    /// the serialized result.
    fn apply(&mut self, compiled: &Self::Compiled, input: &Path) -> Result<String>;
}

/// Overrides of the stylesheet's `xsl:output` settings. `None` keeps what
/// the stylesheet declares.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformOptions {
    pub indent: Option<bool>,
    pub omit_xml_declaration: Option<bool>,
}

/// XSLT engine backed by the xee compiler and interpreter.
pub struct XeeEngine {
    xot: Xot,
    options: TransformOptions,
}

impl XeeEngine {
    pub fn new(options: TransformOptions) -> Self {
        XeeEngine {
            xot: Xot::new(),
            options,
        }
    }
}

impl Default for XeeEngine {
    fn default() -> Self {
        Self::new(TransformOptions::default())
    }
}

impl Engine for XeeEngine {
    type Compiled = Stylesheet;

    fn compile(&mut self, stylesheet: &Path) -> Result<Stylesheet> {
        debug!(stylesheet = %stylesheet.display(), "compiling stylesheet");
        Stylesheet::load(stylesheet)
    }

    fn apply(&mut self, stylesheet: &Stylesheet, input: &Path) -> Result<String> {
        let root = read_xml(&mut self.xot, input)?;

        let mut documents = Documents::new();
        documents
            .add_root(None, root)
            .map_err(|source| Error::Document {
                path: input.to_path_buf(),
                source,
            })?;

        let program = stylesheet.program();
        let mut builder = program.dynamic_context_builder();
        builder.context_node(root);
        builder.documents(documents);
        let context = builder.build();

        debug!(
            input = %input.display(),
            stylesheet = %stylesheet.path().display(),
            "applying stylesheet"
        );
        let result = program
            .runnable(&context)
            .many(&mut self.xot)
            .map_err(|source| Error::Transform {
                path: input.to_path_buf(),
                source,
            })?;

        stylesheet
            .output()
            .resolve(&self.options)
            .serialize(&result, &mut self.xot)
            .map_err(|source| Error::Serialize {
                path: input.to_path_buf(),
                source,
            })
    }
}
