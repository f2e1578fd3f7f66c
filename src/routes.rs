// src/routes.rs

use std::fmt;
use std::sync::{Arc, Mutex};

use crate::{models::user::Role, session::SessionStore};

/// Every page of the portal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,

    StudentDashboard,
    StudentProfile,
    StudentJobs,
    StudentApplications,
    StudentAssessments,
    CodingExam(String),
    Editor { session_id: String },
    Resources,

    RecruiterDashboard,
    RecruiterProfile,
    RecruiterJobs,
    JobApplicants(String),
    RecruiterAssessments,
    AssessmentResults(String),

    TpoDashboard,
    TpoPendingJobs,

    AdminDashboard,
    AdminCreateUser,
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::StudentDashboard => "/student/dashboard".to_string(),
            Route::StudentProfile => "/student/profile".to_string(),
            Route::StudentJobs => "/student/jobs".to_string(),
            Route::StudentApplications => "/student/applications".to_string(),
            Route::StudentAssessments => "/student/assessments".to_string(),
            Route::CodingExam(id) => format!("/student/coding-exam/{}", id),
            Route::Editor { session_id } => format!("/editor/{}", session_id),
            Route::Resources => "/resources".to_string(),
            Route::RecruiterDashboard => "/recruiter/dashboard".to_string(),
            Route::RecruiterProfile => "/recruiter/profile".to_string(),
            Route::RecruiterJobs => "/recruiter/jobs".to_string(),
            Route::JobApplicants(id) => format!("/recruiter/jobs/{}/applicants", id),
            Route::RecruiterAssessments => "/recruiter/assessments".to_string(),
            Route::AssessmentResults(id) => format!("/recruiter/assessments/{}/results", id),
            Route::TpoDashboard => "/tpo/dashboard".to_string(),
            Route::TpoPendingJobs => "/tpo/jobs/pending".to_string(),
            Route::AdminDashboard => "/admin/dashboard".to_string(),
            Route::AdminCreateUser => "/admin/create-user".to_string(),
        }
    }

    /// Roles allowed on this page. `None` means public.
    pub fn allowed_roles(&self) -> Option<&'static [Role]> {
        match self {
            Route::Login => None,
            Route::Resources => Some(&[Role::Student, Role::Recruiter, Role::Tpo, Role::Admin]),
            Route::StudentDashboard
            | Route::StudentProfile
            | Route::StudentJobs
            | Route::StudentApplications
            | Route::StudentAssessments
            | Route::CodingExam(_)
            | Route::Editor { .. } => Some(&[Role::Student]),
            Route::RecruiterDashboard
            | Route::RecruiterProfile
            | Route::RecruiterJobs
            | Route::JobApplicants(_)
            | Route::RecruiterAssessments
            | Route::AssessmentResults(_) => Some(&[Role::Recruiter]),
            Route::TpoDashboard | Route::TpoPendingJobs => Some(&[Role::Tpo]),
            Route::AdminDashboard | Route::AdminCreateUser => Some(&[Role::Admin]),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Landing page after login.
pub fn dashboard_for(role: Role) -> Route {
    match role {
        Role::Student => Route::StudentDashboard,
        Role::Recruiter => Route::RecruiterDashboard,
        Role::Tpo => Route::TpoDashboard,
        Role::Admin => Route::AdminDashboard,
    }
}

/// Route guard.
///
/// * Public routes pass.
/// * No valid session (missing or expired token) -> `Login`.
/// * Wrong role -> that role's dashboard.
pub fn guard(route: Route, session: &SessionStore) -> Route {
    let Some(allowed) = route.allowed_roles() else {
        return route;
    };

    if !session.is_authenticated() {
        tracing::debug!("guard: anonymous access to {}, redirecting to login", route);
        return Route::Login;
    }

    match session.role() {
        Some(role) if allowed.contains(&role) => route,
        Some(role) => {
            tracing::debug!("guard: role {} may not open {}", role, route);
            dashboard_for(role)
        }
        None => Route::Login,
    }
}

/// Where pages send the user.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Route stack; the last entry is the current page.
#[derive(Debug, Clone, Default)]
pub struct History {
    stack: Arc<Mutex<Vec<Route>>>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<Route> {
        self.with(|stack| stack.last().cloned())
    }

    fn with<T>(&self, f: impl FnOnce(&mut Vec<Route>) -> T) -> T {
        match self.stack.lock() {
            Ok(mut stack) => f(&mut stack),
            Err(poisoned) => f(&mut poisoned.into_inner()),
        }
    }
}

impl Navigator for History {
    fn navigate(&self, route: Route) {
        tracing::debug!("navigate -> {}", route);
        self.with(|stack| stack.push(route));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;

    fn store(role: Option<Role>, token: Option<&str>) -> SessionStore {
        SessionStore::in_memory(Session {
            token: token.map(str::to_string),
            user_id: Some("1".into()),
            role,
            username: None,
        })
    }

    #[test]
    fn anonymous_users_go_to_login() {
        assert_eq!(
            guard(Route::StudentAssessments, &store(None, None)),
            Route::Login
        );
        assert_eq!(guard(Route::Login, &store(None, None)), Route::Login);
    }

    #[test]
    fn wrong_role_lands_on_own_dashboard() {
        let recruiter = store(Some(Role::Recruiter), Some("tok"));
        assert_eq!(
            guard(Route::CodingExam("e1".into()), &recruiter),
            Route::RecruiterDashboard
        );
        assert_eq!(guard(Route::Resources, &recruiter), Route::Resources);
    }

    #[test]
    fn matching_role_passes() {
        let student = store(Some(Role::Student), Some("tok"));
        let route = Route::Editor { session_id: "s-1".into() };
        assert_eq!(guard(route.clone(), &student), route);
    }

    #[test]
    fn history_tracks_current_page() {
        let history = History::new();
        history.navigate(Route::Login);
        history.navigate(Route::StudentDashboard);
        assert_eq!(history.current(), Some(Route::StudentDashboard));
    }
}
