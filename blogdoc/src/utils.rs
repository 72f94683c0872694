use std::{
  fs,
  io::{self, Read, Write},
  path::{Path, PathBuf},
};

use color_eyre::eyre::{Context, Result};
use log::trace;
use walkdir::WalkDir;

/// Read a whole input file, where `-` stands for standard input.
pub fn read_input(path: &Path) -> Result<String> {
  if path == Path::new("-") {
    let mut buf = String::new();
    io::stdin()
      .read_to_string(&mut buf)
      .wrap_err("Failed to read standard input")?;
    return Ok(buf);
  }

  fs::read_to_string(path)
    .wrap_err_with(|| format!("Failed to read input file: {}", path.display()))
}

/// Write `content` to `path`, or to standard output when no path is given.
///
/// Parent directories are created as needed.
pub fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
  let Some(path) = path else {
    let mut stdout = io::stdout().lock();
    stdout
      .write_all(content.as_bytes())
      .and_then(|()| stdout.write_all(b"\n"))
      .wrap_err("Failed to write to standard output")?;
    return Ok(());
  };

  if let Some(parent) = path.parent()
    && !parent.as_os_str().is_empty()
  {
    fs::create_dir_all(parent).wrap_err_with(|| {
      format!("Failed to create directory: {}", parent.display())
    })?;
  }

  fs::write(path, content).wrap_err_with(|| {
    format!("Failed to write output file: {}", path.display())
  })
}

/// Collect every file below `dir` whose extension is one of `extensions`.
///
/// Matching is case-insensitive and the result is sorted for stable output.
#[must_use]
pub fn collect_files(dir: &Path, extensions: &[&str]) -> Vec<PathBuf> {
  let mut files: Vec<PathBuf> = WalkDir::new(dir)
    .follow_links(true)
    .into_iter()
    .filter_map(Result::ok)
    .map(walkdir::DirEntry::into_path)
    .filter(|path| {
      path.is_file()
        && path
          .extension()
          .and_then(|ext| ext.to_str())
          .is_some_and(|ext| {
            extensions
              .iter()
              .any(|wanted| ext.eq_ignore_ascii_case(wanted))
          })
    })
    .collect();

  files.sort();
  trace!("Found {} files to convert in {}", files.len(), dir.display());
  files
}

#[cfg(test)]
mod tests {
  #![allow(clippy::unwrap_used, reason = "Fine in tests")]

  use tempfile::tempdir;

  use super::*;

  #[test]
  fn test_collect_files_filters_extensions() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join("nested/deeper")).unwrap();
    fs::write(dir.path().join("a.html"), "").unwrap();
    fs::write(dir.path().join("b.HTM"), "").unwrap();
    fs::write(dir.path().join("c.json"), "").unwrap();
    fs::write(dir.path().join("nested/deeper/d.html"), "").unwrap();

    let files = collect_files(dir.path(), &["html", "htm"]);
    let names: Vec<_> = files
      .iter()
      .map(|p| p.strip_prefix(dir.path()).unwrap().to_path_buf())
      .collect();
    assert_eq!(names, vec![
      PathBuf::from("a.html"),
      PathBuf::from("b.HTM"),
      PathBuf::from("nested/deeper/d.html"),
    ]);
  }

  #[test]
  fn test_write_output_creates_parents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("x/y/out.html");
    write_output(Some(&path), "<p>hi</p>").unwrap();
    assert_eq!(read_input(&path).unwrap(), "<p>hi</p>");
  }
}
