use std::path::Path;

use glob_match::glob_match;

pub fn pattern_matcher<'a>(path: &'a Path) -> impl Fn(&str) -> bool + 'a {
  let basename = path.file_name().and_then(|basename| basename.to_str());
  let path = path.as_os_str().to_str();

  move |pattern| match (basename, path) {
    (Some(basename), Some(path)) => glob_match(pattern, basename) || glob_match(pattern, path),
    _ => false,
  }
}
