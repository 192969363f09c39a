//! Client-side routes

/// Pages the application can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Application root
    Home,
    /// The post-project wizard
    PostProject,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::PostProject => "/post-project",
        }
    }

    pub fn from_path(path: &str) -> Option<Route> {
        match path.trim().trim_end_matches('/') {
            "" => Some(Route::Home),
            "/post-project" => Some(Route::PostProject),
            _ => None,
        }
    }
}

/// Something that can switch the visible page
pub trait Router {
    /// Navigate to a path. Unknown paths are ignored.
    fn push(&mut self, path: &str);

    fn current_path(&self) -> &'static str;
}
