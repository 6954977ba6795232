//! Importing hand-made fusion sprites from an upstream sprite pack.

use std::{fs, path::Path};

use walkdir::WalkDir;

use crate::{AssetLayout, Error, Result, layout::fusion_file_name, parse_fusion_file_name};

/// Copy every custom fusion under `input` whose head and body are both at
/// most `max_id` into the custom tree of `output`, grouped by head.
///
/// Unrelated files and out-of-range combinations are skipped. Returns the
/// number of sprites copied.
pub fn import_custom(input: &Path, output: &AssetLayout, max_id: u32) -> Result<usize> {
  if !input.is_dir() {
    return Err(Error::NotADirectory(input.to_path_buf()));
  }

  let mut copied = 0usize;
  let mut seen = 0usize;

  for entry in WalkDir::new(input).sort_by_file_name() {
    let entry = entry?;
    if !entry.file_type().is_file() {
      continue;
    }
    seen += 1;

    let Some((head, body)) = entry.file_name().to_str().and_then(parse_fusion_file_name)
    else {
      continue;
    };
    if head > max_id || body > max_id {
      continue;
    }

    let target = output.custom_fusion(head, body);
    if let Some(parent) = target.parent() {
      fs::create_dir_all(parent).map_err(Error::io(parent))?;
    }
    fs::copy(entry.path(), &target).map_err(Error::io(entry.path()))?;
    copied += 1;
    tracing::debug!(
      from = %entry.path().display(),
      name = %fusion_file_name(head, body),
      "imported"
    );
  }

  tracing::info!(copied, seen, "imported custom sprites");
  Ok(copied)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn copies_in_range_fusions_only() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    for name in ["1.2.png", "1.600.png", "600.1.png", "notes.txt", "3.png"] {
      fs::write(input.path().join(name), name.as_bytes()).unwrap();
    }
    fs::create_dir_all(input.path().join("nested")).unwrap();
    fs::write(input.path().join("nested/4.5.png"), b"x").unwrap();

    let layout = AssetLayout::new(output.path());
    let copied = import_custom(input.path(), &layout, 501).unwrap();

    assert_eq!(copied, 2);
    assert_eq!(fs::read(layout.custom_fusion(1, 2)).unwrap(), b"1.2.png");
    assert!(layout.custom_fusion(4, 5).is_file());
    assert!(!layout.custom_fusion(1, 600).exists());
    assert!(!layout.custom_fusion(600, 1).exists());
  }

  #[test]
  fn normalizes_zero_padded_names() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    fs::write(input.path().join("007.012.png"), b"x").unwrap();

    let layout = AssetLayout::new(output.path());
    import_custom(input.path(), &layout, 501).unwrap();
    assert!(layout.custom_fusion(7, 12).is_file());
  }

  #[test]
  fn missing_input_is_an_error() {
    let output = tempfile::tempdir().unwrap();
    let err = import_custom(
      &output.path().join("missing"),
      &AssetLayout::new(output.path()),
      501,
    )
    .unwrap_err();
    assert!(matches!(err, Error::NotADirectory(_)));
  }
}
