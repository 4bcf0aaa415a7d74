// Profile persistence backends
use crate::error::{PrefsError, Result};
use crate::models::AwsProfile;
use chrono::Utc;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// Storage the store talks to when fetching, saving or removing profiles.
/// Calls are blocking; the store runs them off the UI task.
pub trait ProfileBackend: Send + Sync + 'static {
    fn list(&self) -> Result<Vec<AwsProfile>>;

    /// Persist a draft and return it with `_id` and `created` assigned
    fn create(&self, profile: AwsProfile) -> Result<AwsProfile>;

    fn delete(&self, id: &str) -> Result<()>;
}

/// Shared rules for turning a draft into a persisted profile
fn persist(existing: &[AwsProfile], mut profile: AwsProfile) -> Result<AwsProfile> {
    if profile.is_persisted() {
        return Err(PrefsError::AlreadyPersisted);
    }
    if existing.iter().any(|p| p.name == profile.name) {
        return Err(PrefsError::DuplicateName(profile.name));
    }

    profile.id = Some(uuid::Uuid::new_v4().to_string());
    profile.created = Some(Utc::now());
    Ok(profile)
}

/// Profiles stored as a JSON array in a single file
pub struct FileBackend {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileBackend {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    fn read(&self) -> Result<Vec<AwsProfile>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| PrefsError::Backend(format!("Failed to read profiles file: {}", e)))?;

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&contents)?)
    }

    fn write(&self, profiles: &[AwsProfile]) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
                tracing::info!("Created data directory: {}", dir.display());
            }
        }

        let json = serde_json::to_string_pretty(profiles)?;
        fs::write(&self.path, json)
            .map_err(|e| PrefsError::Backend(format!("Failed to write profiles file: {}", e)))
    }

    fn guard(&self) -> Result<std::sync::MutexGuard<'_, ()>> {
        self.lock
            .lock()
            .map_err(|_| PrefsError::Backend("Profiles file lock poisoned".to_string()))
    }
}

impl ProfileBackend for FileBackend {
    fn list(&self) -> Result<Vec<AwsProfile>> {
        let _guard = self.guard()?;
        let profiles = self.read()?;
        tracing::debug!(
            "Loaded {} profiles from {}",
            profiles.len(),
            self.path.display()
        );
        Ok(profiles)
    }

    fn create(&self, profile: AwsProfile) -> Result<AwsProfile> {
        let _guard = self.guard()?;
        let mut profiles = self.read()?;
        let saved = persist(&profiles, profile)?;
        profiles.push(saved.clone());
        self.write(&profiles)?;
        tracing::info!("Saved profile '{}' to {}", saved.name, self.path.display());
        Ok(saved)
    }

    fn delete(&self, id: &str) -> Result<()> {
        let _guard = self.guard()?;
        let mut profiles = self.read()?;
        let before = profiles.len();
        profiles.retain(|p| p.id.as_deref() != Some(id));
        if profiles.len() == before {
            return Err(PrefsError::ProfileNotFound);
        }
        self.write(&profiles)?;
        tracing::info!("Deleted profile {} from {}", id, self.path.display());
        Ok(())
    }
}

/// Profiles kept in memory only; nothing survives the process
#[derive(Default)]
pub struct MemoryBackend {
    profiles: Mutex<Vec<AwsProfile>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profiles(profiles: Vec<AwsProfile>) -> Self {
        Self {
            profiles: Mutex::new(profiles),
        }
    }

    fn profiles(&self) -> Result<std::sync::MutexGuard<'_, Vec<AwsProfile>>> {
        self.profiles
            .lock()
            .map_err(|_| PrefsError::Backend("Profile store lock poisoned".to_string()))
    }
}

impl ProfileBackend for MemoryBackend {
    fn list(&self) -> Result<Vec<AwsProfile>> {
        Ok(self.profiles()?.clone())
    }

    fn create(&self, profile: AwsProfile) -> Result<AwsProfile> {
        let mut profiles = self.profiles()?;
        let saved = persist(&profiles, profile)?;
        profiles.push(saved.clone());
        Ok(saved)
    }

    fn delete(&self, id: &str) -> Result<()> {
        let mut profiles = self.profiles()?;
        let before = profiles.len();
        profiles.retain(|p| p.id.as_deref() != Some(id));
        if profiles.len() == before {
            return Err(PrefsError::ProfileNotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn named(name: &str) -> AwsProfile {
        AwsProfile {
            name: name.to_string(),
            access_key_id: "AKIA".to_string(),
            ..AwsProfile::default()
        }
    }

    #[test]
    fn test_file_backend_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path().join("profiles.json"));
        assert!(backend.list().unwrap().is_empty());
    }

    #[test]
    fn test_file_backend_create_and_delete() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("profiles.json");
        let backend = FileBackend::new(path.clone());

        let saved = backend.create(named("prod")).unwrap();
        assert!(saved.is_persisted());
        assert!(saved.created.is_some());
        assert!(path.exists());

        // A fresh backend over the same file sees the profile
        let reopened = FileBackend::new(path);
        let listed = reopened.list().unwrap();
        assert_eq!(listed, vec![saved.clone()]);

        reopened.delete(saved.id.as_deref().unwrap()).unwrap();
        assert!(reopened.list().unwrap().is_empty());
    }

    #[test]
    fn test_file_backend_rejects_duplicate_name() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path().join("profiles.json"));
        backend.create(named("prod")).unwrap();

        let err = backend.create(named("prod")).unwrap_err();
        assert_eq!(err.to_string(), "A profile named 'prod' already exists");
    }

    #[test]
    fn test_file_backend_delete_unknown() {
        let dir = TempDir::new().unwrap();
        let backend = FileBackend::new(dir.path().join("profiles.json"));
        assert!(matches!(
            backend.delete("nope"),
            Err(PrefsError::ProfileNotFound)
        ));
    }

    #[test]
    fn test_memory_backend_rejects_persisted() {
        let backend = MemoryBackend::new();
        let mut profile = named("a");
        profile.id = Some("x".to_string());
        assert!(matches!(
            backend.create(profile),
            Err(PrefsError::AlreadyPersisted)
        ));
    }
}
