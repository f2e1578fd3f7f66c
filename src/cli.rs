// src/cli.rs

mod opt;
mod repl;

use std::io::{self, BufRead, Write};

use careernexus::{
    AppState,
    client::CodeRunner,
    error::AppError,
    handlers::{admin, applications, auth, coding_exam, jobs},
    models::{
        execution::{Language, RunRequest},
        user::{AdminCreateUserRequest, LoginRequest},
    },
    notify::ToastLevel,
    routes::{Navigator, Route, guard},
    utils::input::missing_required_input,
};

pub(crate) use opt::Cli;
use opt::Commands;

pub(crate) async fn run(cli: Cli, state: &mut AppState) -> Result<(), AppError> {
    let result = dispatch(cli.command, state).await;
    flush_toasts(state);
    result
}

async fn dispatch(command: Commands, state: &mut AppState) -> Result<(), AppError> {
    match command {
        Commands::Login(args) => {
            let password = match args.password {
                Some(p) => p,
                None => prompt("Password: ")?
                    .ok_or_else(|| AppError::Validation("No password given.".into()))?,
            };
            // Login always goes out without a bearer token.
            let anonymous = careernexus::ApiClient::with_base(
                state.config.api_base()?,
                None,
                state.config.request_timeout,
            )?;
            let payload = LoginRequest {
                email: args.email,
                password,
            };
            auth::login(&anonymous, &mut state.session, payload, &state.toasts, &state.history)
                .await?;
            state.reload()?;
            if let Some(route) = state.history.current() {
                println!("Signed in. Home: {}", route);
            }
        }
        Commands::Logout => {
            auth::logout(&mut state.session, &state.toasts, &state.history)?;
            state.reload()?;
        }
        Commands::Whoami => {
            let session = state.session.session();
            if state.session.is_authenticated() {
                println!(
                    "{} (id {}) role {}",
                    session.username.as_deref().unwrap_or("unknown"),
                    session.user_id.as_deref().unwrap_or("?"),
                    state.session.role().map(|r| r.to_string()).unwrap_or_else(|| "?".into())
                );
            } else {
                println!("Not signed in.");
            }
        }
        Commands::Jobs => {
            enter(state, Route::StudentJobs)?;
            for job in jobs::list_jobs(&state.api, &state.toasts).await {
                println!(
                    "[{}] {} at {}{}",
                    job.id,
                    job.title,
                    job.company_name,
                    job.ctc.map(|c| format!(" ({})", c)).unwrap_or_default()
                );
            }
        }
        Commands::Apply { job_id } => {
            enter(state, Route::StudentJobs)?;
            applications::apply(&state.api, &job_id, &state.toasts).await?;
        }
        Commands::Applications => {
            enter(state, Route::StudentApplications)?;
            for app in applications::my_applications(&state.api, &state.toasts).await {
                println!(
                    "[{}] {} at {}: {:?}",
                    app.id,
                    app.job_title.as_deref().unwrap_or(&app.job_id),
                    app.company_name.as_deref().unwrap_or("-"),
                    app.status
                );
            }
        }
        Commands::Exams => {
            enter(state, Route::StudentAssessments)?;
            for exam in coding_exam::list_exams(&state.api, &state.toasts).await {
                let window = match (exam.start_time, exam.end_time) {
                    (Some(s), Some(e)) => format!(" {} -> {}", s, e),
                    _ => String::new(),
                };
                let done = if exam.submitted { " (submitted)" } else { "" };
                println!("[{}] {}{}{}", exam.id, exam.assessment_name, window, done);
            }
        }
        Commands::Exam { id } => {
            enter(state, Route::CodingExam(id.clone()))?;
            repl::exam(state, &id).await?;
        }
        Commands::Practice { session_id } => {
            enter(
                state,
                Route::Editor {
                    session_id: session_id.clone(),
                },
            )?;
            repl::practice(state, &session_id).await?;
        }
        Commands::Run(args) => {
            let language = match args.language {
                Some(l) => l,
                None => args
                    .file
                    .extension()
                    .and_then(|e| e.to_str())
                    .and_then(Language::from_extension)
                    .ok_or_else(|| {
                        AppError::Validation("Cannot tell the language; pass --language".into())
                    })?,
            };
            let code = std::fs::read_to_string(&args.file)?;
            let stdin = match args.stdin {
                Some(path) => std::fs::read_to_string(path)?,
                None => String::new(),
            };
            if missing_required_input(&code, &stdin) {
                return Err(AppError::Validation(
                    "This program reads input; pass it with --stdin".into(),
                ));
            }
            let result = state
                .api
                .run(&RunRequest {
                    language,
                    code,
                    stdin,
                })
                .await?;
            println!("{}", result.to_display());
        }
        Commands::CreateUser(args) => {
            enter(state, Route::AdminCreateUser)?;
            let payload = AdminCreateUserRequest {
                name: args.name,
                email: args.email,
                password: args.password,
                role: args.role,
            };
            admin::create_user(&state.api, &payload, &state.toasts).await?;
        }
    }
    Ok(())
}

/// Applies the route guard; a redirect means the command is refused.
fn enter(state: &AppState, route: Route) -> Result<(), AppError> {
    let target = guard(route.clone(), &state.session);
    if target != route {
        return Err(AppError::Unauthorized(match target {
            Route::Login => "Please log in first.".to_string(),
            other => format!("Your role cannot open {}; your dashboard is {}", route, other),
        }));
    }
    state.history.navigate(route);
    Ok(())
}

pub(crate) fn flush_toasts(state: &AppState) {
    for toast in state.toasts.drain() {
        let tag = match toast.level {
            ToastLevel::Success => "ok",
            ToastLevel::Info => "info",
            ToastLevel::Error => "error",
        };
        println!("[{}] {}", tag, toast.message);
    }
}

/// Reads one line from stdin. `None` once stdin is closed.
pub(crate) fn prompt(label: &str) -> Result<Option<String>, AppError> {
    read_prompt(&mut io::stdin().lock(), label)
}

fn read_prompt(input: &mut impl BufRead, label: &str) -> Result<Option<String>, AppError> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

pub(crate) fn confirm(message: &str) -> bool {
    matches!(
        prompt(&format!("{} [y/N] ", message)),
        Ok(Some(answer)) if matches!(answer.trim(), "y" | "Y" | "yes")
    )
}
