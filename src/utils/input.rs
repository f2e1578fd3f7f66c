// src/utils/input.rs

use std::sync::LazyLock;

use regex::Regex;

/// Source patterns that read from standard input: Python `input(`,
/// Java `Scanner(`, C++ `cin >>` and C `scanf(`.
///
/// This is a heuristic. A string literal containing `scanf(` trips it, and
/// Java's `BufferedReader` slips through.
static READS_STDIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\binput\s*\(|\bScanner\s*\(|\bcin\s*>>|\bscanf\s*\(")
        .expect("stdin pattern is a valid regex")
});

/// True when the program looks like it expects stdin.
pub fn reads_stdin(code: &str) -> bool {
    READS_STDIN.is_match(code)
}

/// True when running `code` with `stdin` should be refused locally.
pub fn missing_required_input(code: &str, stdin: &str) -> bool {
    stdin.trim().is_empty() && reads_stdin(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_each_reader() {
        assert!(reads_stdin("n = int(input())"));
        assert!(reads_stdin("Scanner sc = new Scanner(System.in);"));
        assert!(reads_stdin("int n; cin>>n;"));
        assert!(reads_stdin("std::cin >> n;"));
        assert!(reads_stdin("scanf(\"%d\", &n);"));
    }

    #[test]
    fn ignores_programs_without_readers() {
        assert!(!reads_stdin("print('hello')"));
        assert!(!reads_stdin("console.log(userInput)"));
        assert!(!reads_stdin("BufferedReader br = new BufferedReader(r);"));
    }

    #[test]
    fn input_box_with_text_unblocks_the_run() {
        assert!(missing_required_input("x = input()", "   \n"));
        assert!(!missing_required_input("x = input()", "5"));
        assert!(!missing_required_input("print(1)", ""));
    }
}
