//! Line-counting helpers shared by `head` and `tail`.

pub fn get_head(content: &str, lines: usize) -> String {
    if lines == 0 {
        return String::new();
    }

    let mut pos = 0;
    let mut line_count = 0;
    let chars: Vec<char> = content.chars().collect();
    let len = chars.len();

    while pos < len && line_count < lines {
        if chars[pos] == '\n' {
            line_count += 1;
        }
        pos += 1;
    }

    chars[..pos].iter().collect()
}

pub fn get_tail(content: &str, lines: usize) -> String {
    if lines == 0 || content.is_empty() {
        return String::new();
    }

    let chars: Vec<char> = content.chars().collect();
    let mut pos = chars.len();
    if pos > 0 && chars[pos - 1] == '\n' {
        pos -= 1;
    }

    let mut line_count = 0;
    while pos > 0 && line_count < lines {
        pos -= 1;
        if chars[pos] == '\n' {
            line_count += 1;
            if line_count == lines {
                pos += 1;
                break;
            }
        }
    }

    let result: String = chars[pos..].iter().collect();
    if content.ends_with('\n') {
        result
    } else {
        format!("{result}\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn head_takes_first_n_lines() {
        let content = "line1\nline2\nline3\nline4\n";
        assert_eq!(get_head(content, 2), "line1\nline2\n");
    }

    #[test]
    fn head_zero_lines_is_empty() {
        assert_eq!(get_head("line1\nline2\n", 0), "");
    }

    #[test]
    fn head_fewer_lines_than_requested_returns_all() {
        assert_eq!(get_head("a\nb\n", 10), "a\nb\n");
    }

    #[test]
    fn tail_takes_last_n_lines() {
        let content = "line1\nline2\nline3\nline4\n";
        assert_eq!(get_tail(content, 2), "line3\nline4\n");
    }

    #[test]
    fn tail_without_trailing_newline_still_terminates() {
        assert_eq!(get_tail("a\nb\nc", 2), "b\nc\n");
    }

    #[test]
    fn tail_fewer_lines_than_requested_returns_all() {
        assert_eq!(get_tail("a\nb\n", 10), "a\nb\n");
    }
}
