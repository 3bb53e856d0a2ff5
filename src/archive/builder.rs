//! Deterministic archive construction
//!
//! Linear pipeline: Validate -> Discover -> Sort -> Write -> Finalize.
//! The first failing stage aborts the build; nothing retries. Entries are
//! written in ascending byte order of their archive path with constant
//! timestamps and a fixed compression level, so an unchanged tree always
//! produces a byte-identical archive.

use crate::archive::entry::ArchiveEntry;
use crate::archive::rules::{has_nested_manifest, is_vcs_directory, CaseChecker, Limits};
use crate::archive::rules::check_file_path;
use crate::domain::{check_module_path, is_canonical_version, ModuleVersion};
use crate::error::ArchiveError;
use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;
use walkdir::{DirEntry, WalkDir};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Build an archive for `mv` from the files under `root`, streaming into
/// `output`.
///
/// Validation runs before anything is written: the version must be
/// canonical, the module path must pass the grammar check, and `root`
/// must be a directory.
pub fn build<W: Write + Seek>(
    output: W,
    mv: &ModuleVersion,
    root: &Path,
    limits: &Limits,
) -> Result<(), ArchiveError> {
    if !is_canonical_version(&mv.version) {
        return Err(ArchiveError::invalid_version(&mv.version));
    }
    check_module_path(&mv.path)?;
    if !root.is_dir() {
        return Err(ArchiveError::invalid_root(root));
    }

    let mut entries = discover(root, mv, limits)?;
    entries.sort_by(|a, b| a.archive_path.as_bytes().cmp(b.archive_path.as_bytes()));
    write_entries(output, &entries)
}

/// Create the output file at `output_path` and build the archive into it.
///
/// The file is created with truncate-or-create semantics; on failure after
/// creation a partial file is left behind and the error is the contract.
pub fn create_archive(
    output_path: &Path,
    mv: &ModuleVersion,
    root: &Path,
    limits: &Limits,
) -> Result<(), ArchiveError> {
    let file =
        File::create(output_path).map_err(|e| ArchiveError::output_create(output_path, e))?;
    build(file, mv, root, limits)
}

/// Walk filter: prune VCS metadata directories and nested module roots.
/// Applies only to directories below the root.
fn keep_entry(entry: &DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return true;
    }
    let name = entry.file_name().to_string_lossy();
    if is_vcs_directory(&name) {
        return false;
    }
    !has_nested_manifest(entry.path())
}

/// Enumerate eligible files under `root`.
///
/// Per-file checks run in fixed order: file type, path safety,
/// case-insensitive collision, per-file size, running total size. The
/// first failing check aborts discovery.
fn discover(
    root: &Path,
    mv: &ModuleVersion,
    limits: &Limits,
) -> Result<Vec<ArchiveEntry>, ArchiveError> {
    let prefix = mv.archive_prefix();
    let mut entries = Vec::new();
    let mut case_checker = CaseChecker::new();
    let mut total: u64 = 0;

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(keep_entry);

    for item in walker {
        let item = item.map_err(|e| {
            let at = e.path().map(Path::to_path_buf).unwrap_or_else(|| root.to_path_buf());
            ArchiveError::walk(at, e)
        })?;
        if item.file_type().is_dir() {
            continue;
        }
        if !item.file_type().is_file() {
            return Err(ArchiveError::unsupported_file_type(item.path()));
        }

        let rel = relative_slash_path(root, item.path())?;
        check_file_path(&rel)?;
        case_checker.insert(&rel)?;

        let size = item
            .metadata()
            .map_err(|e| ArchiveError::walk(item.path(), e))?
            .len();
        if size > limits.max_file_size {
            return Err(ArchiveError::file_too_large(
                item.path(),
                size,
                limits.max_file_size,
            ));
        }
        total = total
            .checked_add(size)
            .ok_or(ArchiveError::ArchiveTooLarge {
                limit: limits.max_archive_size,
            })?;
        if total > limits.max_archive_size {
            return Err(ArchiveError::ArchiveTooLarge {
                limit: limits.max_archive_size,
            });
        }

        entries.push(ArchiveEntry::new(
            format!("{}/{}", prefix, rel),
            item.path(),
            size,
        ));
    }

    Ok(entries)
}

/// Produce the forward-slash relative path of `path` under `root`.
fn relative_slash_path(root: &Path, path: &Path) -> Result<String, ArchiveError> {
    let rel = path.strip_prefix(root).map_err(|_| {
        ArchiveError::unsafe_path(path.to_string_lossy(), "outside the module root")
    })?;
    let mut parts = Vec::new();
    for component in rel.components() {
        let part = component.as_os_str().to_str().ok_or_else(|| {
            ArchiveError::unsafe_path(path.to_string_lossy(), "not valid UTF-8")
        })?;
        parts.push(part);
    }
    Ok(parts.join("/"))
}

/// Stream sorted entries into the zip container and finalize it.
///
/// Timestamps are pinned to the zip epoch and permissions are fixed so
/// re-running on unchanged input reproduces identical bytes.
fn write_entries<W: Write + Seek>(
    output: W,
    entries: &[ArchiveEntry],
) -> Result<(), ArchiveError> {
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(6))
        .last_modified_time(zip::DateTime::default())
        .unix_permissions(0o644);

    let mut writer = ZipWriter::new(output);
    for entry in entries {
        writer.start_file(entry.archive_path.as_str(), options)?;
        let mut source = File::open(&entry.source_path)
            .map_err(|e| ArchiveError::io(&entry.source_path, e))?;
        std::io::copy(&mut source, &mut writer)
            .map_err(|e| ArchiveError::io(&entry.source_path, e))?;
    }
    writer.finish()?;
    Ok(())
}
