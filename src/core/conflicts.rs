use crate::core::Storage;
use crate::utils::error::{DeployError, Result};
use regex::Regex;
use std::sync::LazyLock;

static CONFLICT_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<<<<<<< HEAD\n(.*?)\n=======\n.*?\n>>>>>>> [a-f0-9]+\n")
        .expect("conflict block pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConflictResolution {
    pub content: String,
    pub blocks_resolved: usize,
}

impl ConflictResolution {
    pub fn changed(&self) -> bool {
        self.blocks_resolved > 0
    }
}

/// Replaces every merge-conflict block with its HEAD side.
pub fn resolve_conflicts(content: &str) -> ConflictResolution {
    let blocks_resolved = CONFLICT_BLOCK.find_iter(content).count();
    let content = CONFLICT_BLOCK.replace_all(content, "${1}\n").into_owned();

    ConflictResolution {
        content,
        blocks_resolved,
    }
}

/// Resolves the conflicts in `path` and rewrites it in place.
///
/// With `dry_run` the file is left untouched; it is also never rewritten when
/// nothing was resolved.
pub async fn clean_file<St: Storage>(
    storage: &St,
    path: &str,
    dry_run: bool,
) -> Result<ConflictResolution> {
    let raw = storage.read_file(path).await?;
    let content = String::from_utf8(raw).map_err(|e| DeployError::FileError {
        path: path.to_string(),
        message: format!("not valid UTF-8: {}", e),
    })?;

    let resolution = resolve_conflicts(&content);
    tracing::debug!(
        "Found {} conflict blocks in {}",
        resolution.blocks_resolved,
        path
    );

    if resolution.changed() && !dry_run {
        storage
            .write_file(path, resolution.content.as_bytes())
            .await?;
    }

    Ok(resolution)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_head_side() {
        let text = "# Tasks\n<<<<<<< HEAD\n- [x] ship poller\n=======\n- [ ] ship poller\n>>>>>>> 1a2b3c4\nfooter\n";

        let resolution = resolve_conflicts(text);

        assert_eq!(resolution.content, "# Tasks\n- [x] ship poller\nfooter\n");
        assert_eq!(resolution.blocks_resolved, 1);
        assert!(resolution.changed());
    }

    #[test]
    fn test_multiple_multiline_blocks() {
        let text = concat!(
            "<<<<<<< HEAD\na\nb\n=======\nc\n>>>>>>> deadbeef\n",
            "middle\n",
            "<<<<<<< HEAD\nd\n=======\ne\nf\n>>>>>>> 0ff1ce\n",
        );

        let resolution = resolve_conflicts(text);

        assert_eq!(resolution.content, "a\nb\nmiddle\nd\n");
        assert_eq!(resolution.blocks_resolved, 2);
    }

    #[test]
    fn test_untouched_without_markers() {
        let text = "plain\n=======\nnot a conflict\n";
        let resolution = resolve_conflicts(text);
        assert_eq!(resolution.content, text);
        assert!(!resolution.changed());
    }

    #[test]
    fn test_non_hex_trailer_is_left_alone() {
        let text = "<<<<<<< HEAD\nours\n=======\ntheirs\n>>>>>>> feature/branch\n";
        let resolution = resolve_conflicts(text);
        assert_eq!(resolution.blocks_resolved, 0);
        assert_eq!(resolution.content, text);
    }
}
