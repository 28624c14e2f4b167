//! Tests for CatalogService

use mockall::Sequence;
use mockall::predicate::eq;

use shared::{CombinationDetails, EntityId, SchoolDetails};
use crate::services::CatalogService;
use crate::traits::MockAdmissionsStore;
use crate::types::CombinationChoice;
use super::fixtures::*;

fn choice(code: &str) -> CombinationChoice {
    CombinationChoice {
        code: code.to_string(),
        subjects: "Math+Physics+English".to_string(),
        minimum_score: Some(21.5),
        quota: None,
    }
}

mod school_tests {
    use super::*;

    #[tokio::test]
    async fn test_add_school_returns_store_assigned_id() {
        let mut store = MockAdmissionsStore::new();
        store
            .expect_create_school()
            .withf(|details| details.name == "Đại học Bách khoa")
            .times(1)
            .returning(|details| {
                Ok(shared::School {
                    id: id(41),
                    details: details.clone(),
                })
            });

        let service = CatalogService::new(into_store(store));
        let details = SchoolDetails {
            code: "BKA".to_string(),
            name: "Đại học Bách khoa".to_string(),
            address: "Hà Nội".to_string(),
            kind: "public".to_string(),
        };
        let envelope = service.add_school(&details).await;

        assert!(envelope.success);
        assert_eq!(envelope.data.unwrap().id, id(41));
    }

    #[tokio::test]
    async fn test_delete_school_failure() {
        let mut store = MockAdmissionsStore::new();
        store
            .expect_delete_school()
            .with(eq(id(3)))
            .returning(|_| Err(store_down("truong/3")));

        let service = CatalogService::new(into_store(store));
        let envelope = service.delete_school(id(3)).await;

        assert!(!envelope.success);
    }
}

mod major_tests {
    use super::*;

    #[tokio::test]
    async fn test_majors_by_school_filters_client_side() {
        let mut store = MockAdmissionsStore::new();
        store.expect_list_majors().times(1).returning(|| {
            Ok(vec![
                create_test_major(1, 1, "Computer Science"),
                create_test_major(2, 2, "Economics"),
                create_test_major(3, 1, "Electronics"),
            ])
        });

        let service = CatalogService::new(into_store(store));
        let envelope = service.get_majors_by_school(id(1)).await;

        let ids: Vec<_> = envelope.data.iter().map(|major| major.id.clone()).collect();
        assert_eq!(ids, vec![id(1), id(3)]);
    }

    #[tokio::test]
    async fn test_majors_of_school_with_opaque_id() {
        let mut store = MockAdmissionsStore::new();
        store.expect_list_majors().returning(|| {
            let mut opaque = create_test_major(2, 0, "Economics");
            opaque.details.school_id = Some(EntityId::from("a1f3"));
            Ok(vec![create_test_major(1, 1, "Computer Science"), opaque])
        });

        let service = CatalogService::new(into_store(store));
        let envelope = service.get_majors_by_school(EntityId::from("a1f3")).await;

        assert!(envelope.success);
        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.data[0].details.name, "Economics");
    }

    #[tokio::test]
    async fn test_majors_by_unknown_school_is_empty_success() {
        let mut store = MockAdmissionsStore::new();
        store
            .expect_list_majors()
            .returning(|| Ok(vec![create_test_major(1, 1, "Computer Science")]));

        let service = CatalogService::new(into_store(store));
        let envelope = service.get_majors_by_school(id(77)).await;

        assert!(envelope.success);
        assert!(envelope.data.is_empty());
    }
}

mod combination_tests {
    use super::*;

    #[tokio::test]
    async fn test_replace_deletes_all_before_adding() {
        let mut seq = Sequence::new();
        let mut store = MockAdmissionsStore::new();

        store
            .expect_list_combinations()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| {
                Ok(vec![
                    create_test_combination(10, 5, "A00"),
                    create_test_combination(11, 6, "B00"),
                    create_test_combination(12, 5, "D01"),
                ])
            });
        store
            .expect_delete_combination()
            .with(eq(id(10)))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        store
            .expect_delete_combination()
            .with(eq(id(12)))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        store
            .expect_create_combination()
            .withf(|details| details.major_id == reference(5) && details.code == "A01")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|details| Ok(shared::Combination { id: id(20), details: details.clone() }));
        store
            .expect_create_combination()
            .withf(|details| details.major_id == reference(5) && details.code == "D07")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|details| Ok(shared::Combination { id: id(21), details: details.clone() }));

        let service = CatalogService::new(into_store(store));
        let envelope = service
            .update_combinations_for_major(id(5), &[choice("A01"), choice("D07")])
            .await;

        assert!(envelope.success);
        let ids: Vec<_> = envelope.data.iter().map(|combination| combination.id.clone()).collect();
        assert_eq!(ids, vec![id(20), id(21)]);
    }

    #[tokio::test]
    async fn test_replace_skips_failed_adds() {
        let mut store = MockAdmissionsStore::new();
        store.expect_list_combinations().returning(|| Ok(Vec::new()));
        store
            .expect_create_combination()
            .returning(|details: &CombinationDetails| {
                if details.code == "B00" {
                    Err(store_down("to_hop_xet_tuyen"))
                } else {
                    Ok(shared::Combination { id: id(30), details: details.clone() })
                }
            });

        let service = CatalogService::new(into_store(store));
        let envelope = service
            .update_combinations_for_major(id(5), &[choice("B00"), choice("C00")])
            .await;

        assert!(envelope.success);
        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.data[0].details.code, "C00");
    }

    #[tokio::test]
    async fn test_replace_continues_after_failed_delete() {
        let mut store = MockAdmissionsStore::new();
        store
            .expect_list_combinations()
            .returning(|| Ok(vec![create_test_combination(10, 5, "A00")]));
        store
            .expect_delete_combination()
            .times(1)
            .returning(|_| Err(store_down("to_hop_xet_tuyen/10")));
        store
            .expect_create_combination()
            .times(1)
            .returning(|details| Ok(shared::Combination { id: id(31), details: details.clone() }));

        let service = CatalogService::new(into_store(store));
        let envelope = service.update_combinations_for_major(id(5), &[choice("A01")]).await;

        assert!(envelope.success);
        assert_eq!(envelope.data.len(), 1);
    }

    #[tokio::test]
    async fn test_replace_fails_when_listing_fails() {
        let mut store = MockAdmissionsStore::new();
        store
            .expect_list_combinations()
            .returning(|| Err(store_down("to_hop_xet_tuyen")));
        store.expect_create_combination().never();

        let service = CatalogService::new(into_store(store));
        let envelope = service.update_combinations_for_major(id(5), &[choice("A01")]).await;

        assert!(!envelope.success);
        assert!(envelope.data.is_empty());
    }

    #[tokio::test]
    async fn test_combination_options_are_fixed() {
        let store = MockAdmissionsStore::new();

        let service = CatalogService::new(into_store(store));
        let envelope = service.combination_options();

        let codes: Vec<_> = envelope.data.iter().map(|option| option.code.as_str()).collect();
        assert!(envelope.success);
        assert_eq!(codes, vec!["A00", "A01", "B00", "C00", "D01", "D07", "D08", "D14"]);
    }

    #[tokio::test]
    async fn test_combinations_by_major() {
        let mut store = MockAdmissionsStore::new();
        store.expect_list_combinations().returning(|| {
            Ok(vec![
                create_test_combination(1, 2, "A00"),
                create_test_combination(2, 3, "A01"),
            ])
        });

        let service = CatalogService::new(into_store(store));
        let envelope = service.get_combinations_by_major(id(3)).await;

        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.data[0].details.code, "A01");
    }
}
