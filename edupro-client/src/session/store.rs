// edupro-client/src/session/store.rs
// Token stores - in memory or persisted to a JSON cookie file

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use parking_lot::RwLock;

use super::{SessionCookies, TokenStore};

/// In-memory cookie store, lives as long as the client
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    cookies: RwLock<SessionCookies>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds the given cookies
    pub fn with_cookies(cookies: SessionCookies) -> Self {
        Self {
            cookies: RwLock::new(cookies),
        }
    }

    /// Snapshot of the current cookies
    pub fn cookies(&self) -> SessionCookies {
        self.cookies.read().clone()
    }
}

impl TokenStore for MemoryTokenStore {
    fn access_token(&self) -> Option<String> {
        self.cookies.read().access_token(Utc::now())
    }

    fn refresh_token(&self) -> Option<String> {
        self.cookies.read().refresh_token(Utc::now())
    }

    fn set_access_token(&self, token: &str) {
        self.cookies.write().set_access(token, Utc::now());
    }

    fn set_refresh_token(&self, token: &str) {
        self.cookies.write().set_refresh(token, Utc::now());
    }

    fn clear(&self) {
        self.cookies.write().clear();
    }
}

/// Cookie store persisted as JSON so a session survives across runs
///
/// Write failures are logged and the in-memory copy stays authoritative.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    cookies: RwLock<SessionCookies>,
}

impl FileTokenStore {
    /// Open the store, loading any cookies still alive in `path`
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut cookies = load(&path).unwrap_or_default();
        cookies.purge_expired(Utc::now());
        Self {
            path,
            cookies: RwLock::new(cookies),
        }
    }

    /// Path of the cookie file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the cookie file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Snapshot of the current cookies
    pub fn cookies(&self) -> SessionCookies {
        self.cookies.read().clone()
    }

    fn save(&self, cookies: &SessionCookies) {
        if let Err(e) = write(&self.path, cookies) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to persist session cookies");
        }
    }

    fn update(&self, f: impl FnOnce(&mut SessionCookies)) {
        let mut cookies = self.cookies.write();
        f(&mut *cookies);
        self.save(&*cookies);
    }
}

impl TokenStore for FileTokenStore {
    fn access_token(&self) -> Option<String> {
        self.cookies.read().access_token(Utc::now())
    }

    fn refresh_token(&self) -> Option<String> {
        self.cookies.read().refresh_token(Utc::now())
    }

    fn set_access_token(&self, token: &str) {
        self.update(|c| c.set_access(token, Utc::now()));
    }

    fn set_refresh_token(&self, token: &str) {
        self.update(|c| c.set_refresh(token, Utc::now()));
    }

    fn set_tokens(&self, access: &str, refresh: &str) {
        self.update(|c| {
            let now = Utc::now();
            c.set_access(access, now);
            c.set_refresh(refresh, now);
        });
    }

    fn clear(&self) {
        self.cookies.write().clear();
        if self.path.exists()
            && let Err(e) = fs::remove_file(&self.path)
        {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to remove session file");
        }
    }
}

fn load(path: &Path) -> Option<SessionCookies> {
    if !path.exists() {
        return None;
    }
    let json = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&json) {
        Ok(cookies) => Some(cookies),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable session file");
            None
        }
    }
}

fn write(path: &Path, cookies: &SessionCookies) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(cookies)?;
    fs::write(path, json)
}
