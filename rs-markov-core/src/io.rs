use std::path::{Path, PathBuf};
use std::{env, fs, io};

use log::debug;

use crate::error::Result;

/// Reads every file with `extension` directly inside `folder`.
///
/// - One document per file, whole content
/// - Files are read in name order so training is reproducible
/// - Subdirectories are ignored
///
/// # Errors
/// Returns an error if the folder cannot be listed or a file cannot be read.
pub fn read_documents<P: AsRef<Path>>(folder: P, extension: &str) -> Result<Vec<String>> {
	let folder = folder.as_ref();
	let mut documents = Vec::new();

	for file in list_files(folder, extension)? {
		let document = fs::read_to_string(folder.join(&file))?;
		debug!("read {} ({} bytes)", file, document.len());
		documents.push(document);
	}

	Ok(documents)
}

/// Resolves the corpus folder given in the configuration.
///
/// A blank entry or `.` means the working directory; anything else is kept
/// verbatim (surrounding whitespace trimmed, no canonicalization).
pub fn normalize_folder(input: &str) -> PathBuf {
	match input.trim() {
		"" | "." | "./" => env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
		folder => PathBuf::from(folder),
	}
}

/// Lists all files with a given extension in a directory, sorted by name.
///
/// Returns file names only (no paths).
pub fn list_files<P: AsRef<Path>>(dir: P, extension: &str) -> io::Result<Vec<String>> {
	let mut files = Vec::new();

	for entry in fs::read_dir(dir)? {
		let path = entry?.path();

		if path.is_file() && path.extension() == Some(std::ffi::OsStr::new(extension)) {
			if let Some(name) = path.file_name() {
				files.push(name.to_string_lossy().to_string());
			}
		}
	}

	files.sort();
	Ok(files)
}
