// src/editor/templates.rs

use crate::models::execution::Language;

const JAVASCRIPT: &str = r#"// Write your JavaScript code here
function main() {
    console.log("Hello, World!");
}

main();
"#;

const PYTHON: &str = r#"# Write your Python code here
def main():
    print("Hello, World!")

if __name__ == "__main__":
    main()
"#;

const JAVA: &str = r#"// Write your Java code here
public class Main {
    public static void main(String[] args) {
        System.out.println("Hello, World!");
    }
}
"#;

const CPP: &str = r#"// Write your C++ code here
#include <iostream>
using namespace std;

int main() {
    cout << "Hello, World!" << endl;
    return 0;
}
"#;

const C: &str = r#"// Write your C code here
#include <stdio.h>

int main() {
    printf("Hello, World!\n");
    return 0;
}
"#;

/// Starter code for a fresh editor in `language`.
pub fn template(language: Language) -> &'static str {
    match language {
        Language::Javascript => JAVASCRIPT,
        Language::Python => PYTHON,
        Language::Java => JAVA,
        Language::Cpp => CPP,
        Language::C => C,
    }
}

/// True if `code` is exactly one of the starter templates.
pub fn is_template(code: &str) -> bool {
    Language::ALL.iter().any(|&lang| template(lang) == code)
}

/// Content after switching to `next`.
///
/// Untouched editors (empty, or still holding a starter template) get the new
/// template. Anything the user typed is returned unchanged.
pub fn content_after_switch(current: &str, next: Language) -> Option<&'static str> {
    if current.trim().is_empty() || is_template(current) {
        Some(template(next))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_a_distinct_template() {
        for a in Language::ALL {
            for b in Language::ALL {
                if a != b {
                    assert_ne!(template(a), template(b));
                }
            }
        }
    }

    #[test]
    fn template_is_replaced_by_the_next_template() {
        assert_eq!(
            content_after_switch(template(Language::Java), Language::Python),
            Some(template(Language::Python))
        );
        assert_eq!(content_after_switch("", Language::C), Some(template(Language::C)));
        assert_eq!(content_after_switch("  \n", Language::C), Some(template(Language::C)));
    }

    #[test]
    fn user_edits_are_preserved() {
        assert_eq!(content_after_switch("x=1", Language::Python), None);
        let edited = format!("{}// tweak\n", template(Language::Javascript));
        assert_eq!(content_after_switch(&edited, Language::Python), None);
    }
}
