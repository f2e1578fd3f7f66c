// src/cli/repl.rs

use std::fs;

use careernexus::{
    AppState,
    editor::{RunOutcome, page::EditorPage},
    error::AppError,
    handlers::coding_exam::{ExamPhase, StudentCodingExam},
    models::execution::Language,
};

use super::{confirm, flush_toasts, prompt};

const EXAM_HELP: &str = "\
commands:
  show              question, header and timer
  code              print the current answer
  load <file>       replace the answer with a file's content
  lang <language>   javascript | python | java | cpp | c
  theme <light|dark>
  input <text>      custom input for run (`input @file` reads a file)
  run               run the answer against the custom input
  next | prev | goto <n>
  submit            submit every answer (asks for confirmation)
  quit";

const PRACTICE_HELP: &str = "\
commands:
  show | code | load <file> | lang <language> | theme <light|dark>
  input <text> | run | leave";

enum Step {
    Continue,
    Stop,
}

pub(crate) async fn exam(state: &mut AppState, id: &str) -> Result<(), AppError> {
    let mut page = StudentCodingExam::new(id);
    if page.load(&state.api, &state.toasts, &state.history).await.is_err() {
        return Ok(());
    }
    if let Some(exam) = page.exam() {
        println!("{} ({} questions)", exam.assessment_name, exam.questions.len());
    }
    println!("{}", EXAM_HELP);
    show_exam(&page);

    loop {
        flush_toasts(state);
        let Some(line) = prompt(&format!("exam[{}]> ", page.current_index() + 1))? else {
            break;
        };
        match exam_step(&mut page, state, line.trim()).await {
            Ok(Step::Continue) => {}
            Ok(Step::Stop) => break,
            Err(e) => println!("{}", e.toast_message()),
        }
        if page.phase() == ExamPhase::Submitted {
            break;
        }
    }
    Ok(())
}

async fn exam_step(
    page: &mut StudentCodingExam,
    state: &AppState,
    line: &str,
) -> Result<Step, AppError> {
    let (cmd, arg) = split(line);
    match cmd {
        "" => {}
        "help" => println!("{}", EXAM_HELP),
        "show" => show_exam(page),
        "code" => {
            if let Some(answer) = page.current_answer() {
                println!("--- {} ---\n{}", answer.language, answer.code);
            }
        }
        "load" => page.set_code(read_file(arg)?)?,
        "lang" => {
            let language: Language = arg.parse().map_err(AppError::Validation)?;
            if page.set_language(language)? {
                println!("Loaded the {} template.", language.label());
            }
        }
        "theme" => page.set_theme(arg.parse().map_err(AppError::Validation)?),
        "input" => page.set_custom_input(input_arg(arg)?),
        "run" => {
            let outcome = page.run(&state.api).await?;
            report(outcome);
            println!("{}", page.console());
        }
        "next" => {
            page.next()?;
            show_exam(page);
        }
        "prev" => {
            page.previous()?;
            show_exam(page);
        }
        "goto" => {
            let n = question_number(arg)?;
            page.go_to(n - 1)?;
            show_exam(page);
        }
        "submit" => {
            if page
                .submit(&state.api, &confirm, &state.toasts, &state.history)
                .await?
                .is_none()
            {
                println!("Submission cancelled.");
            }
        }
        "quit" | "exit" => return Ok(Step::Stop),
        other => println!("unknown command '{}', try `help`", other),
    }
    Ok(Step::Continue)
}

pub(crate) async fn practice(state: &mut AppState, session_id: &str) -> Result<(), AppError> {
    let mut page = EditorPage::new(session_id, &state.session);
    page.load(&state.api).await;
    println!("{}", PRACTICE_HELP);
    show_practice(&page);

    loop {
        flush_toasts(state);
        let Some(line) = prompt("practice> ")? else {
            page.leave(&state.history);
            break;
        };
        match practice_step(&mut page, state, line.trim()).await {
            Ok(Step::Continue) => {}
            Ok(Step::Stop) => break,
            Err(e) => println!("{}", e.toast_message()),
        }
    }
    Ok(())
}

async fn practice_step(page: &mut EditorPage, state: &AppState, line: &str) -> Result<Step, AppError> {
    let (cmd, arg) = split(line);
    match cmd {
        "" => {}
        "help" => println!("{}", PRACTICE_HELP),
        "show" => show_practice(page),
        "code" => println!("{}", page.editor().code()),
        "load" => page.editor_mut().set_code(read_file(arg)?),
        "lang" => {
            let language: Language = arg.parse().map_err(AppError::Validation)?;
            if page.editor_mut().set_language(language) {
                println!("Loaded the {} template.", language.label());
            }
        }
        "theme" => page
            .editor_mut()
            .set_theme(arg.parse().map_err(AppError::Validation)?),
        "input" => page.editor_mut().set_custom_input(input_arg(arg)?),
        "run" => {
            report(page.run(&state.api).await);
            println!("{}", page.console());
        }
        "leave" | "quit" | "exit" => {
            page.leave(&state.history);
            return Ok(Step::Stop);
        }
        other => println!("unknown command '{}', try `help`", other),
    }
    Ok(Step::Continue)
}

fn show_exam(page: &StudentCodingExam) {
    let header = page.header();
    let language = header
        .languages
        .iter()
        .find(|o| o.selected)
        .map(|o| o.label)
        .unwrap_or("-");
    let timer = page
        .timer_label(chrono::Utc::now())
        .map(|t| format!(" | time left {}", t))
        .unwrap_or_default();
    println!(
        "Question {}/{} | {}{}",
        page.current_index() + 1,
        page.questions().len(),
        language,
        timer
    );
    if let Some(panel) = page.question_panel() {
        println!("{}", panel);
    }
}

fn show_practice(page: &EditorPage) {
    let header = page.header();
    let language = header
        .languages
        .iter()
        .find(|o| o.selected)
        .map(|o| o.label)
        .unwrap_or("-");
    println!("{} | {}", page.editor().username(), language);
    match page.question_panel() {
        Some(panel) => println!("{}", panel),
        None => println!("(no question for this session)"),
    }
}

fn report(outcome: RunOutcome) {
    if outcome == RunOutcome::Busy {
        println!("A run is already in progress.");
    }
}

fn split(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    }
}

/// 1-based question number as typed at the prompt.
fn question_number(arg: &str) -> Result<usize, AppError> {
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(AppError::Validation("usage: goto <question number>".into())),
    }
}

fn read_file(path: &str) -> Result<String, AppError> {
    if path.is_empty() {
        return Err(AppError::Validation("usage: load <file>".into()));
    }
    fs::read_to_string(path).map_err(|e| AppError::Io(format!("{}: {}", path, e)))
}

fn input_arg(arg: &str) -> Result<String, AppError> {
    match arg.strip_prefix('@') {
        Some(path) => read_file(path),
        // `\n` typed on the prompt stands for a newline in the custom input
        None => Ok(arg.replace("\\n", "\n")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn goto_takes_one_based_numbers() {
        assert_eq!(question_number("2").unwrap(), 2);
        for bad in ["0", "-1", "two", ""] {
            assert!(matches!(question_number(bad), Err(AppError::Validation(_))));
        }
    }

    #[test]
    fn split_separates_command_from_argument() {
        assert_eq!(split("input 1 2\n3"), ("input", "1 2\n3"));
        assert_eq!(split("run"), ("run", ""));
        assert_eq!(split(""), ("", ""));
    }
}
