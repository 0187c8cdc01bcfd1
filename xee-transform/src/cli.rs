use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use xee_transform::{Invocation, Result, TransformOptions, XeeEngine};

/// Apply an XSLT stylesheet to XML documents.
///
/// With three arguments, INPUT is transformed with STYLESHEET into OUTPUT.
/// With two arguments, the first is a `;` separated list of input files;
/// each of them is overwritten with its own transform result.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// `INPUT STYLESHEET OUTPUT` or `INPUT[;INPUT...] STYLESHEET`
    #[arg(value_name = "ARGS")]
    pub(crate) args: Vec<String>,
    /// Indent the output, whatever the stylesheet's xsl:output says
    #[arg(long)]
    pub(crate) indent: bool,
    /// Leave out the XML declaration, whatever the stylesheet's xsl:output
    /// says
    #[arg(long)]
    pub(crate) omit_xml_declaration: bool,
    /// Do not print the name of each file transformed in place
    #[arg(long, short)]
    pub(crate) quiet: bool,
    /// Log what is going on to stderr
    #[arg(long, short)]
    pub(crate) verbose: bool,
}

impl Cli {
    pub(crate) fn init_logging(&self) {
        if self.verbose {
            tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::new("xee_transform=debug"))
                .with_writer(std::io::stderr)
                .init();
        }
    }

    fn options(&self) -> TransformOptions {
        TransformOptions {
            indent: self.indent.then_some(true),
            omit_xml_declaration: self.omit_xml_declaration.then_some(true),
        }
    }

    pub(crate) fn run(&self) -> Result<()> {
        let invocation = Invocation::from_args(&self.args)?;
        let mut engine = XeeEngine::new(self.options());
        let quiet = self.quiet;
        invocation.run(&mut engine, |path: &Path| {
            if !quiet {
                println!("Transforming {}", path.display());
            }
        })
    }
}
