//! Markdown renderer for a [`Reference`].

use crate::model::*;
use std::path::Path;

pub const TITLE: &str = "API Reference";

/// Render the full document.
///
/// Output depends only on `reference` and `language`, so unchanged input
/// renders byte-identical output.
pub fn render(reference: &Reference, language: &str) -> String {
    let mut output = format!("# {}\n\n", TITLE);

    for dir in &reference.dirs {
        output.push_str(&format!("## {}\n\n", dir.name));
        for file in &dir.files {
            output.push_str(&format!("### `{}`\n\n", display_path(&file.path)));
            for block in &file.blocks {
                render_block(&mut output, block, language);
            }
        }
    }

    output
}

fn render_block(output: &mut String, block: &DocBlock, language: &str) {
    if !block.signature.is_empty() {
        output.push_str(&format!("```{}\n{}\n```\n\n", language, block.signature));
    }
    output.push_str(&block.doc);
    output.push_str("\n\n");
}

/// Path with `/` separators on every platform.
fn display_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn block(doc: &str, signature: &str) -> DocBlock {
        DocBlock {
            doc: doc.to_string(),
            signature: signature.to_string(),
        }
    }

    fn single_file(blocks: Vec<DocBlock>) -> Reference {
        Reference {
            dirs: vec![DirDocs {
                name: "mie".to_string(),
                files: vec![FileDocs {
                    path: PathBuf::from("mie/math.odin"),
                    blocks,
                }],
            }],
        }
    }

    #[test]
    fn empty_reference_is_title_only() {
        assert_eq!(render(&Reference::default(), "odin"), "# API Reference\n\n");
    }

    #[test]
    fn block_with_signature() {
        let reference = single_file(vec![block(
            "Adds two integers.\nReturns the sum.",
            "func add(a, b int) int { ... }",
        )]);
        let expected = "# API Reference\n\n\
                        ## mie\n\n\
                        ### `mie/math.odin`\n\n\
                        ```odin\nfunc add(a, b int) int { ... }\n```\n\n\
                        Adds two integers.\nReturns the sum.\n\n";
        assert_eq!(render(&reference, "odin"), expected);
    }

    #[test]
    fn block_without_signature_has_no_fence() {
        let reference = single_file(vec![block("Trailing note.", "")]);
        let output = render(&reference, "odin");
        assert!(!output.contains("```"));
        assert!(output.ends_with("### `mie/math.odin`\n\nTrailing note.\n\n"));
    }

    #[test]
    fn fence_uses_language_label() {
        let reference = single_file(vec![block("Doc", "x :: 1")]);
        assert!(render(&reference, "go").contains("```go\nx :: 1\n```"));
    }

    #[test]
    fn directory_without_files_keeps_heading() {
        let reference = Reference {
            dirs: vec![DirDocs {
                name: "tests".to_string(),
                files: vec![],
            }],
        };
        assert_eq!(render(&reference, "odin"), "# API Reference\n\n## tests\n\n");
    }

    #[test]
    fn nested_path_uses_forward_slashes() {
        let path: PathBuf = ["examples", "demo.odin"].iter().collect();
        assert_eq!(display_path(&path), "examples/demo.odin");
    }
}
