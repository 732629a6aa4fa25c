const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffLine<'a> {
    Same(&'a str),
    Removed(&'a str),
    Added(&'a str),
}

/// Line diff based on the longest common subsequence of both inputs
pub fn diff_lines<'a>(old: &'a str, new: &'a str) -> Vec<DiffLine<'a>> {
    let old_lines: Vec<&str> = old.lines().collect();
    let new_lines: Vec<&str> = new.lines().collect();
    let (n, m) = (old_lines.len(), new_lines.len());

    // lcs[i][j] = LCS length of old_lines[i..] and new_lines[j..]
    let mut lcs = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i][j] = if old_lines[i] == new_lines[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut result = Vec::with_capacity(n.max(m));
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if old_lines[i] == new_lines[j] {
            result.push(DiffLine::Same(old_lines[i]));
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            result.push(DiffLine::Removed(old_lines[i]));
            i += 1;
        } else {
            result.push(DiffLine::Added(new_lines[j]));
            j += 1;
        }
    }
    result.extend(old_lines[i..].iter().map(|l| DiffLine::Removed(*l)));
    result.extend(new_lines[j..].iter().map(|l| DiffLine::Added(*l)));
    result
}

pub fn show_diff(old: &str, new: &str) {
    for line in diff_lines(old, new) {
        match line {
            DiffLine::Same(l) => println!("  {}", l),
            DiffLine::Removed(l) => println!("{}- {}{}", RED, l, RESET),
            DiffLine::Added(l) => println!("{}+ {}{}", GREEN, l, RESET),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_in_the_middle() {
        let old = "a\nb\nc\n";
        let new = "a\nb\nx\nc\n";

        let diff = diff_lines(old, new);
        assert_eq!(diff, vec![
            DiffLine::Same("a"),
            DiffLine::Same("b"),
            DiffLine::Added("x"),
            DiffLine::Same("c"),
        ]);
    }

    #[test]
    fn test_replaced_line() {
        let diff = diff_lines("a\nold\nc", "a\nnew\nc");
        assert!(diff.contains(&DiffLine::Removed("old")));
        assert!(diff.contains(&DiffLine::Added("new")));
        assert_eq!(diff.iter().filter(|l| matches!(l, DiffLine::Same(_))).count(), 2);
    }
}
