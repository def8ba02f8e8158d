use nikufam_api::error::ApiError;
use nikufam_api::usecase::user::CheckUsernameUseCase;

use crate::helpers::{MockUserRepo, test_user};

#[tokio::test]
async fn should_report_existing_and_unknown_usernames() {
    let uc = CheckUsernameUseCase {
        users: MockUserRepo::new(vec![test_user()]),
    };
    assert!(uc.execute(Some("alice".to_owned())).await.unwrap());
    assert!(!uc.execute(Some("bob".to_owned())).await.unwrap());
}

#[tokio::test]
async fn should_require_username_for_lookup() {
    let uc = CheckUsernameUseCase {
        users: MockUserRepo::empty(),
    };
    for username in [None, Some(String::new())] {
        let result = uc.execute(username).await;
        assert!(
            matches!(result, Err(ApiError::Validation(_))),
            "expected Validation, got {result:?}"
        );
    }
}
