use anyhow::{bail, Context};
use ndarray::{Array2, Array4};
use ndarray_npy::read_npy;
use std::path::Path;
use vizcore::SampleBatch;

/// Loads one preprocessed example by index. `sample-<i>.npy` holds the frame
/// tensor `[frame, channel, height, width]` with raw 8-bit pixel values;
/// `sample-<i>-actions.npy` and `sample-<i>-states.npy` are optional side
/// files with the conditioning vectors.
pub fn load_sample(data_dir: &Path, index: usize) -> anyhow::Result<SampleBatch> {
    let frames_path = data_dir.join(format!("sample-{}.npy", index));
    if !frames_path.exists() {
        bail!("data sample {} does not exist", frames_path.display());
    }

    let frames: Array4<f32> = read_npy(&frames_path)
        .with_context(|| format!("reading frames {}", frames_path.display()))?;
    let actions = read_side_file(data_dir, index, "actions")?;
    let states = read_side_file(data_dir, index, "states")?;

    Ok(SampleBatch {
        frames,
        actions,
        states,
    })
}

fn read_side_file(data_dir: &Path, index: usize, kind: &str) -> anyhow::Result<Option<Array2<f32>>> {
    let path = data_dir.join(format!("sample-{}-{}.npy", index, kind));
    if !path.exists() {
        return Ok(None);
    }
    let array: Array2<f32> =
        read_npy(&path).with_context(|| format!("reading {}", path.display()))?;
    Ok(Some(array))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr2, Array4};
    use ndarray_npy::write_npy;
    use tempfile::tempdir;

    #[test]
    fn missing_sample_is_an_error() {
        let dir = tempdir().unwrap();
        let err = load_sample(dir.path(), 3).unwrap_err();
        assert!(err.to_string().contains("sample-3.npy"));
    }

    #[test]
    fn frames_load_without_side_files() {
        let dir = tempdir().unwrap();
        let frames = Array4::<f32>::zeros((2, 3, 4, 4));
        write_npy(dir.path().join("sample-0.npy"), &frames).unwrap();

        let sample = load_sample(dir.path(), 0).unwrap();
        assert_eq!(sample.frames.dim(), (2, 3, 4, 4));
        assert!(sample.actions.is_none());
        assert!(sample.states.is_none());
    }

    #[test]
    fn side_files_ride_along_when_present() {
        let dir = tempdir().unwrap();
        let frames = Array4::<f32>::zeros((1, 3, 4, 4));
        write_npy(dir.path().join("sample-1.npy"), &frames).unwrap();
        write_npy(
            dir.path().join("sample-1-actions.npy"),
            &arr2(&[[0.5f32, 0.25]]),
        )
        .unwrap();

        let sample = load_sample(dir.path(), 1).unwrap();
        assert!(sample.actions.is_some());
        assert!(sample.states.is_none());
    }
}
