use crate::core::{FileMetadata, Project};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

/// In-memory project store. Nothing is persisted; the records live as long as
/// the registry does.
#[derive(Debug, Default)]
pub struct ProjectRegistry {
    projects: RwLock<Vec<Project>>,
}

impl ProjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // 所有寫入都在持鎖期間一次完成，poisoned 的清單仍然一致
    fn read(&self) -> RwLockReadGuard<'_, Vec<Project>> {
        self.projects.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Project>> {
        self.projects.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of all projects in creation order.
    pub fn list_all(&self) -> Vec<Project> {
        self.read().clone()
    }

    pub fn get(&self, id: Uuid) -> Option<Project> {
        self.read().iter().find(|p| p.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    pub fn create(&self, name: impl Into<String>, description: impl Into<String>) -> Project {
        let project = Project::new(name, description);
        tracing::debug!("Creating project {} ({})", project.id, project.name);
        self.write().push(project.clone());
        project
    }

    /// Returns `false` when no project had this id.
    pub fn delete(&self, id: Uuid) -> bool {
        let mut projects = self.write();
        match projects.iter().position(|p| p.id == id) {
            Some(index) => {
                projects.remove(index);
                tracing::debug!("Deleted project {}", id);
                true
            }
            None => {
                tracing::debug!("Delete ignored, project {} not found", id);
                false
            }
        }
    }

    pub fn add_input_file(
        &self,
        project_id: Uuid,
        file_name: impl Into<String>,
        file_path: impl Into<String>,
        file_size: u64,
    ) -> bool {
        self.with_project(project_id, |project| {
            project
                .input_files
                .push(FileMetadata::new(file_name, file_path, file_size));
        })
    }

    /// Replaces any previous output file.
    pub fn set_output_file(
        &self,
        project_id: Uuid,
        file_name: impl Into<String>,
        file_path: impl Into<String>,
        file_size: u64,
    ) -> bool {
        self.with_project(project_id, |project| {
            project.output_file = Some(FileMetadata::new(file_name, file_path, file_size));
        })
    }

    fn with_project(&self, project_id: Uuid, update: impl FnOnce(&mut Project)) -> bool {
        let mut projects = self.write();
        match projects.iter_mut().find(|p| p.id == project_id) {
            Some(project) => {
                update(project);
                true
            }
            None => {
                tracing::warn!("Project {} not found, file metadata ignored", project_id);
                false
            }
        }
    }
}
