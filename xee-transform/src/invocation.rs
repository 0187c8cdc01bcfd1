use std::path::{Path, PathBuf};

use crate::engine::Engine;
use crate::error::{Error, Result};
use crate::runner::{batch_transform_in_place, single_transform};

/// Separator between files in the batch input list.
pub const INPUT_SEPARATOR: char = ';';

pub const USAGE: &str = "usage: xee-transform <input> <stylesheet> <output>\n       \
xee-transform <input>[;<input>...] <stylesheet>   (transforms in place)";

/// What to do, decided by the number of positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Transform one file into a separate output file.
    Single {
        input: PathBuf,
        stylesheet: PathBuf,
        output: PathBuf,
    },
    /// Transform a list of files, each overwritten in place.
    Batch {
        inputs: Vec<PathBuf>,
        stylesheet: PathBuf,
    },
}

impl Invocation {
    /// Dispatch on positional arguments (without the program name).
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        match args {
            [input, stylesheet, output] => Ok(Invocation::Single {
                input: PathBuf::from(input.as_ref()),
                stylesheet: PathBuf::from(stylesheet.as_ref()),
                output: PathBuf::from(output.as_ref()),
            }),
            [inputs, stylesheet] => Ok(Invocation::Batch {
                inputs: split_inputs(inputs.as_ref()),
                stylesheet: PathBuf::from(stylesheet.as_ref()),
            }),
            _ => Err(Error::Usage(format!(
                "expected 2 or 3 arguments, got {}\n{}",
                args.len(),
                USAGE
            ))),
        }
    }

    /// Run the invocation. `progress` sees each file of a batch before it is
    /// transformed.
    pub fn run<E, F>(&self, engine: &mut E, progress: F) -> Result<()>
    where
        E: Engine,
        F: FnMut(&Path),
    {
        match self {
            Invocation::Single {
                input,
                stylesheet,
                output,
            } => single_transform(engine, input, stylesheet, output),
            Invocation::Batch { inputs, stylesheet } => {
                batch_transform_in_place(engine, inputs, stylesheet, progress).map(|_| ())
            }
        }
    }
}

fn split_inputs(list: &str) -> Vec<PathBuf> {
    list.split(INPUT_SEPARATOR)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .collect()
}
