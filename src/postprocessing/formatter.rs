//! Cleans generated markdown before it is rendered.

const FENCE: &str = "```";

/// Collapses runs of blank lines to one and runs of whitespace inside a line
/// to a single space. Lines inside a fenced code block, and the fence lines
/// themselves, are kept byte-for-byte. An unclosed fence protects everything
/// after it.
///
/// `normalize(&normalize(x)) == normalize(x)` for every input.
pub fn normalize(markdown: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut in_fence = false;
    let mut prev_blank = false;

    for line in markdown.split('\n') {
        if line.trim_start().starts_with(FENCE) {
            in_fence = !in_fence;
            prev_blank = false;
            out.push(line.to_string());
            continue;
        }

        if in_fence {
            out.push(line.to_string());
            continue;
        }

        if line.trim().is_empty() {
            if !prev_blank {
                out.push(String::new());
                prev_blank = true;
            }
            continue;
        }

        prev_blank = false;
        out.push(line.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    out.join("\n")
}

/// True when the first non-empty line is a level-1 heading.
pub fn starts_with_heading(markdown: &str) -> bool {
    markdown
        .lines()
        .find(|line| !line.trim().is_empty())
        .is_some_and(|line| line.trim_start().starts_with("# "))
}

/// Prepends `# {title}` unless the text already opens with a level-1 heading.
pub fn ensure_heading(markdown: String, title: &str) -> String {
    if starts_with_heading(&markdown) {
        markdown
    } else {
        format!("# {}\n\n{}", title, markdown)
    }
}
