use serde::Serialize;

use crate::models::department::Department;
use crate::store::{create_document, Collection, DocumentStore, StoreResult};

pub const DEFAULT_DEPARTMENTS: [&str; 30] = [
    "Health",
    "Education",
    "Transport",
    "Finance",
    "Agriculture",
    "Tourism",
    "Defense",
    "Interior",
    "Foreign Affairs",
    "Justice",
    "Environment",
    "Energy",
    "Housing",
    "Labor",
    "Commerce",
    "Culture",
    "Science",
    "Technology",
    "Sports",
    "Women & Child",
    "Social Welfare",
    "Rural Development",
    "Urban Development",
    "Water Resources",
    "Information",
    "Public Works",
    "Planning",
    "Disaster Management",
    "Revenue",
    "Animal Husbandry",
];

const DEFAULT_SERVICES: [&str; 3] = [
    "Citizen Support",
    "Policy Implementation",
    "Information & Guidance",
];

#[derive(Serialize, Debug, PartialEq)]
pub struct SeedOutcome {
    pub seeded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub count: u64,
}

pub fn default_department(area: &str) -> Department {
    Department {
        name: format!("Department of {}", area),
        description: format!(
            "Responsible for {} related policies and services.",
            area.to_lowercase()
        ),
        email: None,
        phone: None,
        address: None,
        services: DEFAULT_SERVICES.iter().map(|s| s.to_string()).collect(),
    }
}

/// Inserts the default departments unless any department already exists.
pub async fn seed_departments(store: &dyn DocumentStore) -> StoreResult<SeedOutcome> {
    let existing = store.count(Collection::Department).await?;
    if existing > 0 {
        log::info!("skipping department seed, {} already present", existing);
        return Ok(SeedOutcome {
            seeded: false,
            message: Some("Departments already exist".to_string()),
            count: existing,
        });
    }

    for area in DEFAULT_DEPARTMENTS {
        create_document(store, Collection::Department, &default_department(area)).await?;
    }

    log::info!("seeded {} default departments", DEFAULT_DEPARTMENTS.len());
    Ok(SeedOutcome {
        seeded: true,
        message: None,
        count: DEFAULT_DEPARTMENTS.len() as u64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn default_department_shape() {
        let department = default_department("Women & Child");
        assert_eq!(department.name, "Department of Women & Child");
        assert_eq!(
            department.description,
            "Responsible for women & child related policies and services."
        );
        assert_eq!(department.services.len(), 3);
    }

    #[tokio::test]
    async fn seeds_once() {
        let store = MemoryStore::new();

        let first = seed_departments(&store).await.unwrap();
        assert!(first.seeded);
        assert_eq!(first.count, 30);

        let second = seed_departments(&store).await.unwrap();
        assert!(!second.seeded);
        assert_eq!(second.count, 30);
        assert_eq!(store.count(Collection::Department).await.unwrap(), 30);
    }
}
