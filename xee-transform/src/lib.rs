//! Apply XSLT stylesheets to XML files.
//!
//! A transform either writes one input to a separate output file
//! ([`single_transform`]) or overwrites a list of files with their own
//! results ([`batch_transform_in_place`]). Stylesheets are compiled with the
//! xee XSLT compiler.

mod engine;
mod error;
mod invocation;
mod load;
mod output;
pub mod report;
mod runner;
mod stylesheet;

pub use engine::{Engine, TransformOptions, XeeEngine};
pub use error::{Error, Result};
pub use output::{OutputDeclaration, OutputMethod};
pub use invocation::{Invocation, INPUT_SEPARATOR, USAGE};
pub use runner::{batch_transform_in_place, single_transform};
pub use stylesheet::Stylesheet;
