//! Tests for ApplicationService

use mockall::predicate::eq;

use shared::{ApplicationStatus, CONNECTION_FAILURE_MESSAGE};
use crate::services::ApplicationService;
use crate::traits::MockAdmissionsStore;
use super::fixtures::*;

mod listing_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_all_applications_wraps_store_result() {
        let mut store = MockAdmissionsStore::new();
        store
            .expect_list_applications()
            .times(1)
            .returning(|| Ok(vec![create_test_application(1, 1, 2), create_test_application(2, 1, 3)]));

        let service = ApplicationService::new(into_store(store));
        let envelope = service.get_all_applications().await;

        assert!(envelope.success);
        assert_eq!(envelope.data.len(), 2);
    }

    #[tokio::test]
    async fn test_store_failure_becomes_generic_envelope() {
        let mut store = MockAdmissionsStore::new();
        store
            .expect_list_applications()
            .returning(|| Err(store_down("ho_so")));

        let service = ApplicationService::new(into_store(store));
        let envelope = service.get_all_applications().await;

        assert!(!envelope.success);
        assert_eq!(envelope.message, CONNECTION_FAILURE_MESSAGE);
        assert!(envelope.data.is_empty());
    }

    #[tokio::test]
    async fn test_missing_application_has_null_data() {
        let mut store = MockAdmissionsStore::new();
        store
            .expect_get_application()
            .with(eq(id(99)))
            .returning(|_| Err(crate::error::PortalError::StoreStatus {
                resource: "ho_so/99".to_string(),
                status: 404,
            }));

        let service = ApplicationService::new(into_store(store));
        let envelope = service.get_application_by_id(id(99)).await;

        assert!(!envelope.success);
        assert!(envelope.data.is_none());
    }
}

mod review_tests {
    use super::*;

    #[tokio::test]
    async fn test_status_update_sends_status_and_note() {
        let mut store = MockAdmissionsStore::new();
        store
            .expect_patch_application_status()
            .withf(|application_id, status, note| *application_id == id(4) && *status == ApplicationStatus::Approved && note == "Hồ sơ hợp lệ")
            .times(1)
            .returning(|_, status, note| {
                let mut application = with_status(create_test_application(4, 1, 1), status);
                application.note = note.to_string();
                Ok(application)
            });

        let service = ApplicationService::new(into_store(store));
        let envelope = service
            .update_application_status(id(4), ApplicationStatus::Approved, Some("Hồ sơ hợp lệ"))
            .await;

        assert!(envelope.success);
        let application = envelope.data.unwrap();
        assert_eq!(application.status.get(), Some(ApplicationStatus::Approved));
        assert_eq!(application.note, "Hồ sơ hợp lệ");
    }

    #[tokio::test]
    async fn test_missing_note_is_sent_empty() {
        let mut store = MockAdmissionsStore::new();
        store
            .expect_patch_application_status()
            .withf(|_, _, note| note.is_empty())
            .times(1)
            .returning(|_, status, _| Ok(with_status(create_test_application(4, 1, 1), status)));

        let service = ApplicationService::new(into_store(store));
        let envelope = service
            .update_application_status(id(4), ApplicationStatus::Rejected, None)
            .await;

        assert!(envelope.success);
    }

    #[tokio::test]
    async fn test_rejected_application_can_be_reopened() {
        let mut store = MockAdmissionsStore::new();
        store
            .expect_patch_application_status()
            .withf(|_, status, _| *status == ApplicationStatus::Pending)
            .returning(|_, status, _| Ok(with_status(create_test_application(7, 1, 1), status)));

        let service = ApplicationService::new(into_store(store));
        let envelope = service
            .update_application_status(id(7), ApplicationStatus::Pending, None)
            .await;

        assert_eq!(envelope.data.unwrap().status.get(), Some(ApplicationStatus::Pending));
    }

    #[tokio::test]
    async fn test_update_application_puts_full_record() {
        let edited = create_test_application(5, 2, 8);
        let expected = edited.clone();

        let mut store = MockAdmissionsStore::new();
        store
            .expect_replace_application()
            .withf(move |application_id, application| *application_id == id(5) && *application == expected)
            .times(1)
            .returning(|_, application| Ok(application.clone()));

        let service = ApplicationService::new(into_store(store));
        let envelope = service.update_application(id(5), &edited).await;

        assert!(envelope.success);
        assert_eq!(envelope.data, Some(edited));
    }
}

mod search_tests {
    use super::*;

    #[tokio::test]
    async fn test_blank_keyword_issues_no_request() {
        let mut store = MockAdmissionsStore::new();
        store.expect_list_applications().never();

        let service = ApplicationService::new(into_store(store));

        assert!(service.search_applications("").await.is_none());
        assert!(service.search_applications("   ").await.is_none());
    }

    #[tokio::test]
    async fn test_search_filters_fetched_records() {
        let mut store = MockAdmissionsStore::new();
        store.expect_list_applications().times(1).returning(|| {
            Ok(vec![
                create_test_application(1, 1, 1),
                create_test_application(2, 1, 1),
                create_test_application(3, 1, 1),
            ])
        });

        let service = ApplicationService::new(into_store(store));
        let envelope = service.search_applications("  APPLICANT2@ ").await.unwrap();

        assert!(envelope.success);
        assert_eq!(envelope.data.len(), 1);
        assert_eq!(envelope.data[0].id, id(2));
    }

    #[tokio::test]
    async fn test_search_failure_is_an_envelope() {
        let mut store = MockAdmissionsStore::new();
        store
            .expect_list_applications()
            .returning(|| Err(store_down("ho_so")));

        let service = ApplicationService::new(into_store(store));
        let envelope = service.search_applications("an").await.unwrap();

        assert!(!envelope.success);
        assert!(envelope.data.is_empty());
    }
}
