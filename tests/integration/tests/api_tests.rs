//! API Integration Tests
//!
//! Every test spawns its own server backed by a fresh in-memory store,
//! so no external services are required.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, fixtures::*, TestServer, TEST_ADMIN_TOKEN,
};
use reqwest::StatusCode;

/// Register a user and return the created account (with token)
async fn register(server: &TestServer) -> (CreateUserRequest, CreatedUserResponse) {
    let request = CreateUserRequest::unique();
    let response = server.post("/api/users", &request).await.unwrap();
    let created: CreatedUserResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    (request, created)
}

/// Upload a video into the first seeded channel and return it
async fn upload_video(server: &TestServer, token: &str) -> VideoResponse {
    let request = CreateVideoRequest::unique();
    let response = server
        .post_auth("/api/channels/1/videos", token, &request)
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Account Tests
// ============================================================================

#[tokio::test]
async fn test_create_user() {
    let server = TestServer::start().await.unwrap();
    let request = CreateUserRequest::unique();

    let response = server.post("/api/users", &request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let created: CreatedUserResponse = response.json().await.unwrap();

    assert_eq!(created.name, request.name);
    assert_eq!(created.email, request.email);
    assert!(!created.token.is_empty());
    assert_eq!(location.as_deref(), Some(format!("/api/users/{}", created.id).as_str()));
}

#[tokio::test]
async fn test_create_user_duplicate_name() {
    let server = TestServer::start().await.unwrap();
    let request = CreateUserRequest::unique();

    server.post("/api/users", &request).await.unwrap();

    let response = server.post("/api/users", &request).await.unwrap();
    assert_status(response, StatusCode::PRECONDITION_FAILED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_user_empty_name_rejected() {
    let server = TestServer::start().await.unwrap();
    let request = CreateUserRequest {
        name: String::new(),
        password: "pass".to_string(),
        email: "empty@example.com".to_string(),
    };

    let response = server.post("/api/users", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login() {
    let server = TestServer::start().await.unwrap();
    let (request, created) = register(&server).await;

    let login = LoginRequest::from_create(&request);
    let response = server.post("/api/users/login", &login).await.unwrap();
    let body: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.token, created.token);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let server = TestServer::start().await.unwrap();
    let (request, _) = register(&server).await;

    let login = LoginRequest {
        name: request.name,
        password: "not-the-password".to_string(),
    };
    let response = server.post("/api/users/login", &login).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_update_user() {
    let server = TestServer::start().await.unwrap();
    let (_, created) = register(&server).await;

    let update = UpdateUserRequest {
        name: format!("{}-renamed", created.name),
        password: "newpass".to_string(),
        email: "renamed@example.com".to_string(),
    };
    let response = server
        .put_auth("/api/users", &created.token, &update)
        .await
        .unwrap();
    assert_status(response, StatusCode::ACCEPTED).await.unwrap();

    // The new credentials log in, the old token still identifies the account
    let login = LoginRequest {
        name: update.name.clone(),
        password: update.password.clone(),
    };
    let response = server.post("/api/users/login", &login).await.unwrap();
    let body: TokenResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.token, created.token);
}

#[tokio::test]
async fn test_update_user_unknown_token() {
    let server = TestServer::start().await.unwrap();
    register(&server).await;

    let update = UpdateUserRequest {
        name: "ghost".to_string(),
        password: "pass".to_string(),
        email: String::new(),
    };
    let response = server
        .put_auth("/api/users", "no-such-token", &update)
        .await
        .unwrap();
    assert_status(response, StatusCode::PRECONDITION_FAILED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_user_without_header() {
    let server = TestServer::start().await.unwrap();

    let update = UpdateUserRequest {
        name: "nobody".to_string(),
        password: "pass".to_string(),
        email: String::new(),
    };
    let response = server
        .client
        .put(format!("{}/api/users", server.base_url()))
        .json(&update)
        .send()
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_delete_user() {
    let server = TestServer::start().await.unwrap();
    let (_, created) = register(&server).await;

    let response = server
        .delete(&format!("/api/users/{}", created.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::ACCEPTED).await.unwrap();

    // The token no longer authenticates anything
    let response = server
        .get_auth(&format!("/api/users/{}", created.id), &created.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_delete_missing_user() {
    let server = TestServer::start().await.unwrap();

    let response = server.delete("/api/users/9999").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_get_profile() {
    let server = TestServer::start().await.unwrap();
    let (_, owner) = register(&server).await;
    let (_, friend) = register(&server).await;
    let video = upload_video(&server, &owner.token).await;

    let favorite = AddFavoriteRequest { video_id: video.id };
    let response = server
        .post_auth(
            &format!("/api/users/{}/favorites", owner.id),
            &owner.token,
            &favorite,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let friendship = AddFriendRequest { friend_id: friend.id };
    let response = server
        .post_auth(
            &format!("/api/users/{}/friends", owner.id),
            &owner.token,
            &friendship,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth(&format!("/api/users/{}", owner.id), &owner.token)
        .await
        .unwrap();
    let profile: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(profile.id, owner.id);
    assert_eq!(profile.name, owner.name);
    assert_eq!(profile.favorite_videos.len(), 1);
    assert_eq!(profile.favorite_videos[0].id, video.id);
    assert_eq!(profile.close_friends.len(), 1);
    assert_eq!(profile.close_friends[0].id, friend.id);
}

#[tokio::test]
async fn test_get_profile_unknown_token() {
    let server = TestServer::start().await.unwrap();
    let (_, created) = register(&server).await;

    let response = server
        .get_auth(&format!("/api/users/{}", created.id), "bogus")
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_get_profile_missing_user() {
    let server = TestServer::start().await.unwrap();
    let (_, created) = register(&server).await;

    let response = server
        .get_auth("/api/users/9999", &created.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Favorites Tests
// ============================================================================

#[tokio::test]
async fn test_favorites_roundtrip() {
    let server = TestServer::start().await.unwrap();
    let (_, user) = register(&server).await;
    let video = upload_video(&server, &user.token).await;

    let request = AddFavoriteRequest { video_id: video.id };
    let path = format!("/api/users/{}/favorites", user.id);

    let response = server.post_auth(&path, &user.token, &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.get_auth(&path, &user.token).await.unwrap();
    let favorites: Vec<VideoResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].title, video.title);

    let response = server
        .delete_auth(&format!("{}/{}", path, video.id), &user.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::ACCEPTED).await.unwrap();

    let response = server.get_auth(&path, &user.token).await.unwrap();
    let favorites: Vec<VideoResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(favorites.is_empty());
}

#[tokio::test]
async fn test_add_favorite_twice() {
    let server = TestServer::start().await.unwrap();
    let (_, user) = register(&server).await;
    let video = upload_video(&server, &user.token).await;

    let request = AddFavoriteRequest { video_id: video.id };
    let path = format!("/api/users/{}/favorites", user.id);

    server.post_auth(&path, &user.token, &request).await.unwrap();
    let response = server.post_auth(&path, &user.token, &request).await.unwrap();
    assert_status(response, StatusCode::PRECONDITION_FAILED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_remove_favorite_not_present() {
    let server = TestServer::start().await.unwrap();
    let (_, user) = register(&server).await;
    let video = upload_video(&server, &user.token).await;

    let response = server
        .delete_auth(
            &format!("/api/users/{}/favorites/{}", user.id, video.id),
            &user.token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::PRECONDITION_FAILED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_add_favorite_for_other_user_forbidden() {
    let server = TestServer::start().await.unwrap();
    let (_, owner) = register(&server).await;
    let (_, intruder) = register(&server).await;
    let video = upload_video(&server, &owner.token).await;

    let request = AddFavoriteRequest { video_id: video.id };
    let response = server
        .post_auth(
            &format!("/api/users/{}/favorites", owner.id),
            &intruder.token,
            &request,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Friends Tests
// ============================================================================

#[tokio::test]
async fn test_friends_roundtrip() {
    let server = TestServer::start().await.unwrap();
    let (_, user) = register(&server).await;
    let (_, friend) = register(&server).await;

    let request = AddFriendRequest { friend_id: friend.id };
    let path = format!("/api/users/{}/friends", user.id);

    let response = server.post_auth(&path, &user.token, &request).await.unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server.get_auth(&path, &user.token).await.unwrap();
    let friends: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(friends.len(), 1);
    assert_eq!(friends[0].id, friend.id);

    let response = server
        .delete_auth(&format!("{}/{}", path, friend.id), &user.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::ACCEPTED).await.unwrap();

    let response = server.get_auth(&path, &user.token).await.unwrap();
    let friends: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(friends.is_empty());
}

#[tokio::test]
async fn test_add_friend_twice() {
    let server = TestServer::start().await.unwrap();
    let (_, user) = register(&server).await;
    let (_, friend) = register(&server).await;

    let request = AddFriendRequest { friend_id: friend.id };
    let path = format!("/api/users/{}/friends", user.id);

    server.post_auth(&path, &user.token, &request).await.unwrap();
    let response = server.post_auth(&path, &user.token, &request).await.unwrap();
    assert_status(response, StatusCode::PRECONDITION_FAILED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_add_missing_friend() {
    let server = TestServer::start().await.unwrap();
    let (_, user) = register(&server).await;

    let request = AddFriendRequest { friend_id: 9999 };
    let response = server
        .post_auth(
            &format!("/api/users/{}/friends", user.id),
            &user.token,
            &request,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_deleting_user_removes_friendships() {
    let server = TestServer::start().await.unwrap();
    let (_, user) = register(&server).await;
    let (_, friend) = register(&server).await;

    let request = AddFriendRequest { friend_id: friend.id };
    let path = format!("/api/users/{}/friends", user.id);
    server.post_auth(&path, &user.token, &request).await.unwrap();

    let response = server
        .delete(&format!("/api/users/{}", friend.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::ACCEPTED).await.unwrap();

    let response = server.get_auth(&path, &user.token).await.unwrap();
    let friends: Vec<UserResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(friends.is_empty());
}

// ============================================================================
// Video and Channel Tests
// ============================================================================

#[tokio::test]
async fn test_get_all_videos_is_public() {
    let server = TestServer::start().await.unwrap();
    let (_, user) = register(&server).await;
    let video = upload_video(&server, &user.token).await;

    let response = server.get("/api/videos").await.unwrap();
    let videos: Vec<VideoResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(videos.iter().any(|v| v.id == video.id));
}

#[tokio::test]
async fn test_get_channel_videos() {
    let server = TestServer::start().await.unwrap();
    let (_, user) = register(&server).await;
    let video = upload_video(&server, &user.token).await;

    let response = server.get("/api/channels/1/videos").await.unwrap();
    let videos: Vec<VideoResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(videos.iter().any(|v| v.id == video.id));

    // The other seeded channel stays empty
    let response = server.get("/api/channels/2/videos").await.unwrap();
    let videos: Vec<VideoResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(videos.is_empty());
}

#[tokio::test]
async fn test_get_videos_of_missing_channel() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/channels/9999/videos").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_add_video_requires_known_token() {
    let server = TestServer::start().await.unwrap();
    let request = CreateVideoRequest::unique();

    let response = server
        .post_auth("/api/channels/1/videos", "bogus", &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_add_video_duplicate_title() {
    let server = TestServer::start().await.unwrap();
    let (_, user) = register(&server).await;
    let request = CreateVideoRequest::unique();

    server
        .post_auth("/api/channels/1/videos", &user.token, &request)
        .await
        .unwrap();

    // Same title in another channel still collides
    let response = server
        .post_auth("/api/channels/2/videos", &user.token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::PRECONDITION_FAILED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_video_requires_admin() {
    let server = TestServer::start().await.unwrap();
    let (_, user) = register(&server).await;
    let video = upload_video(&server, &user.token).await;

    let path = format!("/api/channels/1/videos/{}", video.id);

    let response = server.delete_auth(&path, &user.token).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server.delete_auth(&path, TEST_ADMIN_TOKEN).await.unwrap();
    assert_status(response, StatusCode::ACCEPTED).await.unwrap();

    let response = server.get("/api/videos").await.unwrap();
    let videos: Vec<VideoResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(videos.iter().all(|v| v.id != video.id));
}

#[tokio::test]
async fn test_delete_missing_video_as_admin() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .delete_auth("/api/channels/1/videos/9999", TEST_ADMIN_TOKEN)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Kings Tests
// ============================================================================

#[tokio::test]
async fn test_get_all_kings() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/api/kings").await.unwrap();
    let kings: Vec<KingResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(kings.len(), 2);
    assert!(!kings[0].name.is_empty());
}

// ============================================================================
// Error Envelope Tests
// ============================================================================

#[tokio::test]
async fn test_error_body_shape() {
    let server = TestServer::start().await.unwrap();
    let (_, user) = register(&server).await;

    let response = server
        .get_auth("/api/users/9999", &user.token)
        .await
        .unwrap();
    let body: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.error.code, "NOT_FOUND");
    assert!(!body.error.message.is_empty());
}
