//! Generate static files

use anyhow::Result;
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode, DebouncedEvent};
use std::path::Path;
use std::sync::mpsc::channel;
use std::time::Duration;

use crate::generator::{GenerateReport, Generator};
use crate::Folio;

/// Generate the tag index, tag pages and item pages
pub fn run(folio: &Folio) -> Result<()> {
    run_with_report(folio).map(|_| ())
}

/// Generate and report what was written
pub fn run_with_report(folio: &Folio) -> Result<GenerateReport> {
    let start = std::time::Instant::now();

    let generator = Generator::new(folio)?;
    let report = generator.generate(&folio.store())?;

    let duration = start.elapsed();
    tracing::info!("Completed in {:.2}s", duration.as_secs_f64());

    Ok(report)
}

/// Watch the content directory and config, regenerating on change
///
/// Blocks until the watcher channel closes.
pub fn watch(folio: &Folio) -> Result<()> {
    let (tx, rx) = channel();
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    if folio.content_dir.exists() {
        debouncer
            .watcher()
            .watch(&folio.content_dir, RecursiveMode::Recursive)?;
        tracing::debug!("Watching: {:?}", folio.content_dir);
    }

    let config_path = folio.base_dir.join("_config.yml");
    if config_path.exists() {
        debouncer
            .watcher()
            .watch(&config_path, RecursiveMode::NonRecursive)?;
        tracing::debug!("Watching: {:?}", config_path);
    }

    tracing::info!("Watching for changes. Press Ctrl+C to stop.");

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                let relevant: Vec<&DebouncedEvent> =
                    events.iter().filter(|e| is_relevant(&e.path)).collect();
                if relevant.is_empty() {
                    continue;
                }

                for event in &relevant {
                    tracing::info!("File changed: {}", event.path.display());
                }

                if let Err(e) = rebuild(&folio.base_dir) {
                    tracing::error!("Generation failed: {:#}", e);
                }
            }
            Ok(Err(e)) => {
                tracing::error!("Watch error: {:?}", e);
            }
            Err(_) => break,
        }
    }

    Ok(())
}

/// Re-read `_config.yml` and generate again
fn rebuild(base_dir: &Path) -> Result<GenerateReport> {
    let folio = Folio::new(base_dir)?;
    run_with_report(&folio)
}

/// Editor droppings and VCS internals never trigger a rebuild
fn is_relevant(path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    !path_str.contains(".git")
        && !path_str.contains(".DS_Store")
        && !path_str.ends_with('~')
        && !path_str.ends_with(".swp")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_run_writes_tags_page() {
        let tmp = TempDir::new().unwrap();
        let blog = tmp.path().join("data/blog");
        fs::create_dir_all(&blog).unwrap();
        fs::write(
            blog.join("hello.md"),
            "---\ntitle: Hello\ndate: 2024-01-02\ntags: [Go, Rust]\n---\nBody\n",
        )
        .unwrap();

        let folio = Folio::new(tmp.path()).unwrap();
        let report = run_with_report(&folio).unwrap();

        assert_eq!(report.tags, 2);
        assert_eq!(report.items, 1);
        assert!(tmp.path().join("public/tags/index.html").exists());
        assert!(tmp.path().join("public/tags/go/index.html").exists());
    }

    #[test]
    fn test_run_fails_without_content() {
        let tmp = TempDir::new().unwrap();
        let folio = Folio::new(tmp.path()).unwrap();

        assert!(run(&folio).is_err());
        let page = fs::read_to_string(tmp.path().join("public/tags/index.html")).unwrap();
        assert!(page.contains("Tags unavailable."));
    }

    #[test]
    fn test_rebuild_picks_up_config_changes() {
        let tmp = TempDir::new().unwrap();
        let blog = tmp.path().join("data/blog");
        fs::create_dir_all(&blog).unwrap();
        fs::write(blog.join("hello.md"), "---\ntags: [go]\n---\n").unwrap();
        fs::write(tmp.path().join("_config.yml"), "tag_dir: tags\n").unwrap();

        let folio = Folio::new(tmp.path()).unwrap();
        run(&folio).unwrap();
        assert!(tmp.path().join("public/tags/go/index.html").exists());

        fs::write(tmp.path().join("_config.yml"), "tag_dir: topics\n").unwrap();
        rebuild(&folio.base_dir).unwrap();
        assert!(tmp.path().join("public/topics/go/index.html").exists());
    }

    #[test]
    fn test_is_relevant() {
        assert!(is_relevant(Path::new("data/blog/post.md")));
        assert!(!is_relevant(Path::new("data/.git/index")));
        assert!(!is_relevant(Path::new("data/blog/.DS_Store")));
        assert!(!is_relevant(Path::new("data/blog/post.md~")));
        assert!(!is_relevant(Path::new("data/blog/.post.md.swp")));
    }
}
