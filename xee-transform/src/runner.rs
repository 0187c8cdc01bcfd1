use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::engine::Engine;
use crate::error::Result;
use crate::load::write_text;

/// Transform `input` with the stylesheet at `stylesheet` and write the
/// result to `output`, replacing whatever was there.
///
/// `input` is only touched if it is the same path as `output`.
pub fn single_transform<E: Engine>(
    engine: &mut E,
    input: &Path,
    stylesheet: &Path,
    output: &Path,
) -> Result<()> {
    let compiled = engine.compile(stylesheet)?;
    let result = engine.apply(&compiled, input)?;
    write_text(output, &result)?;
    debug!(output = %output.display(), bytes = result.len(), "wrote result");
    Ok(())
}

/// Transform each of `inputs` in order, overwriting every file with its own
/// result. The stylesheet is compiled once for the whole batch.
///
/// `progress` is called with each path before it is transformed. The first
/// error stops the batch; files already written stay written. Returns the
/// number of files transformed.
pub fn batch_transform_in_place<E, F>(
    engine: &mut E,
    inputs: &[PathBuf],
    stylesheet: &Path,
    mut progress: F,
) -> Result<usize>
where
    E: Engine,
    F: FnMut(&Path),
{
    let compiled = engine.compile(stylesheet)?;
    for input in inputs {
        progress(input);
        let result = engine.apply(&compiled, input)?;
        write_text(input, &result)?;
        debug!(input = %input.display(), bytes = result.len(), "overwrote with result");
    }
    info!(files = inputs.len(), stylesheet = %stylesheet.display(), "batch done");
    Ok(inputs.len())
}
