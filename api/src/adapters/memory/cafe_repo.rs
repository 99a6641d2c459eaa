//! In-memory adapter for CafeRepository

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::{Cafe, CafeId, CafeMutation, NewCafe};
use crate::domain::ports::CafeRepository;
use crate::error::DomainError;

/// In-memory implementation of CafeRepository
///
/// Records are kept in insertion order. Each mutation holds the write guard
/// for its whole check-then-write sequence.
#[derive(Default)]
pub struct InMemoryCafeRepository {
    cafes: RwLock<Vec<Cafe>>,
}

impl InMemoryCafeRepository {
    /// Build a repository pre-populated with `cafes`.
    ///
    /// Rejects blank ids, blank names and repeated ids.
    pub fn with_cafes(cafes: Vec<Cafe>) -> Result<Self, DomainError> {
        validate_seed(&cafes)?;
        Ok(Self {
            cafes: RwLock::new(cafes),
        })
    }

    pub async fn len(&self) -> usize {
        self.cafes.read().await.len()
    }
}

fn validate_seed(cafes: &[Cafe]) -> Result<(), DomainError> {
    let mut seen = std::collections::HashSet::new();
    for cafe in cafes {
        if cafe.id.as_str().trim().is_empty() {
            return Err(DomainError::Validation(
                "Seed cafe with empty id".to_string(),
            ));
        }
        if cafe.nombre.trim().is_empty() {
            return Err(DomainError::Validation(format!(
                "Seed cafe {} has an empty nombre",
                cafe.id
            )));
        }
        if !seen.insert(cafe.id.clone()) {
            return Err(DomainError::Validation(format!(
                "Seed cafe id {} appears more than once",
                cafe.id
            )));
        }
    }
    Ok(())
}

/// Generate an id not already used in `cafes`
fn fresh_id(cafes: &[Cafe]) -> CafeId {
    loop {
        let id = CafeId::new();
        if !cafes.iter().any(|c| c.id == id) {
            return id;
        }
    }
}

#[async_trait]
impl CafeRepository for InMemoryCafeRepository {
    async fn list(&self) -> Result<Vec<Cafe>, DomainError> {
        Ok(self.cafes.read().await.clone())
    }

    async fn find_by_id(&self, id: &CafeId) -> Result<Option<Cafe>, DomainError> {
        let cafes = self.cafes.read().await;
        Ok(cafes.iter().find(|c| &c.id == id).cloned())
    }

    async fn create(&self, new_cafe: &NewCafe) -> Result<CafeMutation, DomainError> {
        let mut cafes = self.cafes.write().await;

        if cafes.iter().any(|c| c.same_coffee_as(&new_cafe.nombre)) {
            return Err(DomainError::AlreadyExists(format!(
                "Cafe '{}' already exists",
                new_cafe.nombre
            )));
        }

        let cafe = Cafe {
            id: fresh_id(&cafes),
            nombre: new_cafe.nombre.clone(),
        };
        cafes.push(cafe.clone());

        Ok(CafeMutation {
            cafe,
            cafes: cafes.clone(),
        })
    }

    async fn update_nombre(
        &self,
        id: &CafeId,
        nombre: &str,
    ) -> Result<CafeMutation, DomainError> {
        let mut cafes = self.cafes.write().await;

        let cafe = cafes
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("Cafe {} not found", id)))?;
        cafe.nombre = nombre.to_string();
        let cafe = cafe.clone();

        Ok(CafeMutation {
            cafe,
            cafes: cafes.clone(),
        })
    }

    async fn delete(&self, id: &CafeId) -> Result<CafeMutation, DomainError> {
        let mut cafes = self.cafes.write().await;

        let index = cafes
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("Cafe {} not found", id)))?;

        let cafe = cafes.remove(index);

        Ok(CafeMutation {
            cafe,
            cafes: cafes.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::entities::default_seed;
    use crate::test_utils::{seeded_cafe_repo, test_cafe};

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let repo = seeded_cafe_repo();
        let latte = repo
            .create(&NewCafe::new("Latte").unwrap())
            .await
            .unwrap()
            .cafe;

        let cafes = repo.list().await.unwrap();
        let nombres: Vec<_> = cafes.iter().map(|c| c.nombre.as_str()).collect();
        assert_eq!(
            nombres,
            vec!["Cortado", "Americano", "Espresso", "Cappuccino", "Latte"]
        );
        assert_eq!(cafes.last().unwrap().id, latte.id);
    }

    #[tokio::test]
    async fn create_rejects_same_name() {
        let repo = seeded_cafe_repo();

        let result = repo.create(&NewCafe::new("cortado").unwrap()).await;

        assert!(matches!(result, Err(DomainError::AlreadyExists(_))));
        assert_eq!(repo.len().await, 4);
    }

    #[tokio::test]
    async fn update_changes_only_nombre() {
        let repo = seeded_cafe_repo();
        let id = CafeId::from("2");

        let mutation = repo.update_nombre(&id, "Long Black").await.unwrap();

        assert_eq!(mutation.cafe.id, id);
        assert_eq!(mutation.cafe.nombre, "Long Black");
        assert_eq!(mutation.cafes[1], mutation.cafe);
        assert_eq!(repo.list().await.unwrap(), mutation.cafes);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let repo = seeded_cafe_repo();

        let result = repo.update_nombre(&CafeId::from("nope"), "X").await;

        assert!(matches!(result, Err(DomainError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_removes_and_returns_cafe() {
        let repo = seeded_cafe_repo();

        let mutation = repo.delete(&CafeId::from("1")).await.unwrap();

        assert_eq!(mutation.cafe.nombre, "Cortado");
        assert_eq!(mutation.cafes.len(), 3);
        assert!(!mutation.cafes.contains(&mutation.cafe));
        assert!(repo.find_by_id(&CafeId::from("1")).await.unwrap().is_none());
        assert!(matches!(
            repo.delete(&CafeId::from("1")).await,
            Err(DomainError::NotFound(_))
        ));
    }

    #[test]
    fn with_cafes_rejects_duplicate_ids() {
        let cafe = test_cafe("1", "Cortado");
        let result = InMemoryCafeRepository::with_cafes(vec![cafe.clone(), cafe]);
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn with_cafes_rejects_blank_fields() {
        assert!(InMemoryCafeRepository::with_cafes(vec![test_cafe(" ", "Cortado")]).is_err());
        assert!(InMemoryCafeRepository::with_cafes(vec![test_cafe("1", "")]).is_err());
    }

    #[tokio::test]
    async fn concurrent_creates_of_same_name_insert_once() {
        let repo = Arc::new(InMemoryCafeRepository::with_cafes(default_seed()).unwrap());

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.create(&NewCafe::new("Flat White").unwrap()).await })
            })
            .collect();

        let mut created = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                created += 1;
            }
        }

        assert_eq!(created, 1);
        assert_eq!(repo.len().await, 5);
    }

    #[tokio::test]
    async fn create_snapshot_includes_new_cafe_under_concurrent_deletes() {
        let repo = Arc::new(InMemoryCafeRepository::with_cafes(default_seed()).unwrap());

        let creates: Vec<_> = (0..16)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.create(&NewCafe::new(&format!("Cafe {}", i)).unwrap())
                        .await
                })
            })
            .collect();
        let deletes: Vec<_> = ["1", "2", "3", "4"]
            .into_iter()
            .map(|id| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.delete(&CafeId::from(id)).await })
            })
            .collect();

        for handle in creates {
            let mutation = handle.await.unwrap().unwrap();
            assert!(mutation.cafes.contains(&mutation.cafe));
        }
        for handle in deletes {
            let mutation = handle.await.unwrap().unwrap();
            assert!(!mutation.cafes.contains(&mutation.cafe));
        }
        assert_eq!(repo.len().await, 16);
    }
}
