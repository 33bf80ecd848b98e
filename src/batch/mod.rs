// Batch driver: augments every dataset file of a folder
// Author: Gabriel Demetrios Lafis

use std::fs;
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};

use crate::dataset::Dataset;
use crate::storage::{DataSink, DataSource, JsonSink, JsonSource, StorageError};
use crate::transform::Transformation;
use crate::utils::{AppResult, BatchConfig};

/// Outcome of a folder run
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub output_dir: PathBuf,
    /// Files whose five outputs were all written
    pub processed: usize,
    pub written: Vec<PathBuf>,
    /// Files skipped because of an error, with the error message
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchReport {
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Runs every [`Transformation`] over the JSON files of a folder
pub struct BatchProcessor {
    config: BatchConfig,
}

impl BatchProcessor {
    pub fn new(config: BatchConfig) -> Self {
        BatchProcessor { config }
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Output directory for `folder`: the configured one, or a
    /// `<prefix><folder name>` sibling of the folder
    pub fn output_dir_for(&self, folder: &Path) -> AppResult<PathBuf> {
        if let Some(dir) = &self.config.output_dir {
            return Ok(PathBuf::from(dir));
        }

        let folder = fs::canonicalize(folder)?;
        let name = folder
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let parent = folder.parent().unwrap_or(&folder);

        Ok(parent.join(format!("{}{}", self.config.output_prefix, name)))
    }

    /// Transform every `*.json` file directly inside `folder`
    pub fn process_folder<P: AsRef<Path>>(&self, folder: P) -> AppResult<BatchReport> {
        let folder = folder.as_ref();
        let files = list_json_files(folder)?;
        let output_dir = self.output_dir_for(folder)?;

        let mut report = BatchReport {
            output_dir: output_dir.clone(),
            ..BatchReport::default()
        };

        if files.is_empty() {
            warn!("No JSON files found in {}", folder.display());
            return Ok(report);
        }

        fs::create_dir_all(&output_dir)?;
        info!("Processing {} JSON files...", files.len());

        let pb = self.progress_bar(files.len());

        for path in &files {
            let label = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();
            pb.set_message(label);

            match self.process_file(path, &output_dir) {
                Ok(written) => {
                    report.processed += 1;
                    report.written.extend(written);
                }
                Err(err) if self.config.continue_on_error => {
                    pb.suspend(|| error!("Skipping {}: {}", path.display(), err));
                    report.failed.push((path.clone(), err.to_string()));
                }
                Err(err) => {
                    pb.abandon();
                    return Err(err);
                }
            }

            pb.inc(1);
        }

        pb.finish_with_message("done");

        info!("Transformed files saved in: {}", output_dir.display());
        if report.has_failures() {
            warn!("{} of {} files failed", report.failed.len(), files.len());
        }

        Ok(report)
    }

    /// Write the five transformed copies of one dataset file.
    ///
    /// Every transformation is computed before anything is written, so a
    /// failing file leaves no outputs behind.
    pub fn process_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input: P,
        output_dir: Q,
    ) -> AppResult<Vec<PathBuf>> {
        let input = input.as_ref();
        let output_dir = output_dir.as_ref();

        let source = JsonSource::new(input);
        let dataset = source.read()?;
        let base = input
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        debug!("{}: {} grids", source.name(), dataset.grid_count());

        let outputs = Transformation::ALL
            .iter()
            .map(|t| {
                t.apply(&dataset)
                    .map(|out| (output_dir.join(t.output_file_name(&base)), out))
                    .map_err(|e| StorageError::Dataset {
                        path: source.name().to_string(),
                        source: e,
                    })
            })
            .collect::<Result<Vec<(PathBuf, Dataset)>, _>>()?;

        fs::create_dir_all(output_dir)?;

        let mut written = Vec::with_capacity(outputs.len());
        for (path, data) in outputs {
            JsonSink::with_indent(&path, self.config.indent).write(&data)?;
            written.push(path);
        }

        Ok(written)
    }

    fn progress_bar(&self, len: usize) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new(len as u64);
        pb.set_style(
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40} {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb
    }
}

/// `*.json` files directly inside `folder`, sorted by path
pub fn list_json_files<P: AsRef<Path>>(folder: P) -> AppResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(folder)? {
        let path = entry?.path();

        if path.is_file() && path.extension().map_or(false, |ext| ext == "json") {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn quiet() -> BatchProcessor {
        BatchProcessor::new(BatchConfig {
            show_progress: false,
            ..BatchConfig::default()
        })
    }

    #[test]
    fn test_list_json_files_filters_and_sorts() {
        let dir = tempdir().unwrap();
        for name in ["b.json", "a.json", "notes.txt", "c.JSON.bak"] {
            fs::write(dir.path().join(name), "{}").unwrap();
        }
        fs::create_dir(dir.path().join("nested.json")).unwrap();

        let files = list_json_files(dir.path()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[test]
    fn test_default_output_dir_is_sibling() {
        let root = tempdir().unwrap();
        let folder = root.path().join("evaluation");
        fs::create_dir(&folder).unwrap();

        let dir = quiet().output_dir_for(&folder).unwrap();
        assert_eq!(dir.file_name().unwrap(), "transformed_evaluation");
        assert_eq!(
            dir.parent().unwrap(),
            fs::canonicalize(root.path()).unwrap()
        );
    }

    #[test]
    fn test_configured_output_dir_wins() {
        let processor = BatchProcessor::new(BatchConfig {
            output_dir: Some("/data/out".to_string()),
            ..BatchConfig::default()
        });
        assert_eq!(
            processor.output_dir_for(Path::new("/does/not/matter")).unwrap(),
            PathBuf::from("/data/out")
        );
    }

    #[test]
    fn test_process_file_writes_nothing_on_failure() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bad.json");
        fs::write(&input, r#"{"train": [{"input": [[1, 2], [3]]}]}"#).unwrap();
        let out = dir.path().join("out");

        assert!(quiet().process_file(&input, &out).is_err());
        assert!(!out.exists());
    }
}
