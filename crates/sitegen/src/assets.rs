//! Static asset copying.
//!
//! The copier does not log by itself; progress goes to a [`Reporter`] chosen
//! by the caller.

use std::fs;
use std::path::{Path, PathBuf};

use crate::{Result, SiteError};

/// A step taken while copying assets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetEvent {
    RemovedDir(PathBuf),
    CreatedDir(PathBuf),
    CopiedFile { from: PathBuf, to: PathBuf },
}

/// Receives progress from [`copy_static`]
pub trait Reporter {
    fn report(&mut self, event: AssetEvent);
}

/// Reporter that forwards events to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, event: AssetEvent) {
        match event {
            AssetEvent::RemovedDir(path) => {
                log::info!("Deleting existing directory: {}", path.display())
            }
            AssetEvent::CreatedDir(path) => log::info!("Creating directory: {}", path.display()),
            AssetEvent::CopiedFile { from, to } => {
                log::info!("Copying file: {} -> {}", from.display(), to.display())
            }
        }
    }
}

impl Reporter for Vec<AssetEvent> {
    fn report(&mut self, event: AssetEvent) {
        self.push(event);
    }
}

/// Replace `dest` with a recursive copy of `source`
pub fn copy_static(source: &Path, dest: &Path, reporter: &mut dyn Reporter) -> Result<()> {
    if dest.exists() {
        fs::remove_dir_all(dest).map_err(SiteError::io(dest))?;
        reporter.report(AssetEvent::RemovedDir(dest.to_path_buf()));
    }
    copy_dir(source, dest, reporter)
}

fn copy_dir(source: &Path, dest: &Path, reporter: &mut dyn Reporter) -> Result<()> {
    fs::create_dir(dest).map_err(SiteError::io(dest))?;
    reporter.report(AssetEvent::CreatedDir(dest.to_path_buf()));

    for entry in sorted_entries(source)? {
        let target = dest.join(entry.file_name().unwrap_or_default());
        if entry.is_file() {
            fs::copy(&entry, &target).map_err(SiteError::io(&entry))?;
            reporter.report(AssetEvent::CopiedFile {
                from: entry,
                to: target,
            });
        } else {
            copy_dir(&entry, &target, reporter)?;
        }
    }

    Ok(())
}

/// Directory entries sorted by name so walks are deterministic
pub(crate) fn sorted_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = fs::read_dir(dir)
        .map_err(SiteError::io(dir))?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(SiteError::io(dir))?;
    entries.sort();
    Ok(entries)
}
