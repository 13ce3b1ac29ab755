//! User service
//!
//! Account lifecycle, authentication by token, favorites and close
//! friends. All rules run against snapshots of committed state and stage
//! their writes on the request's unit of work.

use tracing::{info, instrument};
use uuid::Uuid;
use vidtube_core::{FavoriteVideo, Friendship, User, Video};
use vidtube_db::{Repository, UnitOfWork};

use crate::dto::{
    CreateUserRequest, CreatedUserResponse, LoginRequest, ProfileResponse, UpdateUserRequest,
    UserResponse, VideoResponse,
};

use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    uow: &'a UnitOfWork,
    users: Repository<'a, User>,
    videos: Repository<'a, Video>,
    favorites: Repository<'a, FavoriteVideo>,
    friendships: Repository<'a, Friendship>,
}

impl<'a> UserService<'a> {
    pub fn new(uow: &'a UnitOfWork) -> Self {
        Self {
            uow,
            users: uow.repository(),
            videos: uow.repository(),
            favorites: uow.repository(),
            friendships: uow.repository(),
        }
    }

    /// True iff exactly one user carries this token.
    pub fn is_authenticated(&self, token: &str) -> bool {
        self.users.all().iter().filter(|u| u.token == token).count() == 1
    }

    /// True iff the token belongs to the user with this id; authorization
    /// is ownership of the targeted account.
    pub fn is_allowed(&self, token: &str, user_id: i32) -> bool {
        self.users
            .all()
            .iter()
            .any(|u| u.token == token && u.id == user_id)
    }

    /// Exchange name/password for the account's session token.
    #[instrument(skip(self, request))]
    pub fn log_in(&self, request: &LoginRequest) -> ServiceResult<String> {
        self.users
            .all()
            .into_iter()
            .find(|u| u.name == request.name && u.password == request.password)
            .map(|u| u.token)
            .ok_or(ServiceError::LoginFailed)
    }

    /// Create an account with a fresh id and session token.
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub fn create_user(&self, request: CreateUserRequest) -> ServiceResult<CreatedUserResponse> {
        if self.users.all().iter().any(|u| u.name == request.name) {
            return Err(ServiceError::already_exists("user", request.name));
        }

        let user = User::new(
            self.users.next_id(),
            request.name,
            request.password,
            Uuid::new_v4().to_string(),
            request.email,
        );

        self.users.add(user.clone());
        self.uow.save()?;

        info!(user_id = user.id, "user created");
        Ok(CreatedUserResponse::from(&user))
    }

    /// Overwrite name, password and email of the account owning `token`.
    #[instrument(skip(self, token, request))]
    pub fn update_user(&self, token: &str, request: UpdateUserRequest) -> ServiceResult<()> {
        let mut user = self
            .users
            .all()
            .into_iter()
            .find(|u| u.token == token)
            .ok_or_else(|| ServiceError::not_found("user", "for token"))?;

        user.name = request.name;
        user.password = request.password;
        user.email = request.email;

        self.users.update(user.clone());
        self.uow.save()?;

        info!(user_id = user.id, "user updated");
        Ok(())
    }

    /// Delete the account and every favorite/friend row referencing it.
    #[instrument(skip(self))]
    pub fn delete_user(&self, id: i32) -> ServiceResult<()> {
        let user = self
            .find_user(id)
            .ok_or_else(|| ServiceError::not_found("user", id))?;

        self.users.delete(&user);
        for row in self.favorites.all() {
            if row.user_id == id {
                self.favorites.delete(&row);
            }
        }
        for row in self.friendships.all() {
            if row.user_id == id || row.friend_id == id {
                self.friendships.delete(&row);
            }
        }
        self.uow.save()?;

        info!(user_id = id, "user deleted");
        Ok(())
    }

    /// Profile: identity plus favorites and close friends.
    pub fn get_profile(&self, id: i32) -> ServiceResult<ProfileResponse> {
        let user = self
            .find_user(id)
            .ok_or_else(|| ServiceError::not_found("user", id))?;

        Ok(ProfileResponse {
            id: user.id,
            name: user.name,
            email: user.email,
            favorite_videos: self.get_favorites(id)?,
            close_friends: self.get_friends(id)?,
        })
    }

    /// Favorite videos of a user, in the order they were added.
    pub fn get_favorites(&self, id: i32) -> ServiceResult<Vec<VideoResponse>> {
        if self.find_user(id).is_none() {
            return Err(ServiceError::not_found("user", id));
        }

        let videos = self.videos.all();
        Ok(self
            .favorites
            .all()
            .iter()
            .filter(|fav| fav.user_id == id)
            .filter_map(|fav| videos.iter().find(|v| v.id == fav.video_id))
            .map(VideoResponse::from)
            .collect())
    }

    #[instrument(skip(self))]
    pub fn add_favorite(&self, id: i32, video_id: i32) -> ServiceResult<()> {
        if self.find_user(id).is_none() {
            return Err(ServiceError::not_found("user", id));
        }
        if !self.videos.all().iter().any(|v| v.id == video_id) {
            return Err(ServiceError::not_found("video", video_id));
        }
        if self.is_favorite(id, video_id) {
            return Err(ServiceError::already_exists(
                "favorite",
                format!("video {video_id} for user {id}"),
            ));
        }

        self.favorites.add(FavoriteVideo {
            id: self.favorites.next_id(),
            user_id: id,
            video_id,
        });
        self.uow.save()?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub fn remove_favorite(&self, id: i32, video_id: i32) -> ServiceResult<()> {
        if self.find_user(id).is_none() {
            return Err(ServiceError::not_found("user", id));
        }

        let row = self
            .favorites
            .all()
            .into_iter()
            .find(|fav| fav.user_id == id && fav.video_id == video_id)
            .ok_or_else(|| {
                ServiceError::not_present(format!("video {video_id} is not a favorite of user {id}"))
            })?;

        self.favorites.delete(&row);
        self.uow.save()?;
        Ok(())
    }

    /// Close friends of a user. Friendships are directional; only rows
    /// where this user is the owner count.
    pub fn get_friends(&self, id: i32) -> ServiceResult<Vec<UserResponse>> {
        if self.find_user(id).is_none() {
            return Err(ServiceError::not_found("user", id));
        }

        let users = self.users.all();
        Ok(self
            .friendships
            .all()
            .iter()
            .filter(|f| f.user_id == id)
            .filter_map(|f| users.iter().find(|u| u.id == f.friend_id))
            .map(UserResponse::from)
            .collect())
    }

    #[instrument(skip(self))]
    pub fn add_friend(&self, id: i32, friend_id: i32) -> ServiceResult<()> {
        if self.find_user(id).is_none() {
            return Err(ServiceError::not_found("user", id));
        }
        if self.find_user(friend_id).is_none() {
            return Err(ServiceError::not_found("user", friend_id));
        }
        if self.is_friend(id, friend_id) {
            return Err(ServiceError::already_exists(
                "friendship",
                format!("user {friend_id} in list of user {id}"),
            ));
        }

        self.friendships.add(Friendship {
            id: self.friendships.next_id(),
            user_id: id,
            friend_id,
        });
        self.uow.save()?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub fn remove_friend(&self, id: i32, friend_id: i32) -> ServiceResult<()> {
        if self.find_user(id).is_none() {
            return Err(ServiceError::not_found("user", id));
        }

        let row = self
            .friendships
            .all()
            .into_iter()
            .find(|f| f.user_id == id && f.friend_id == friend_id)
            .ok_or_else(|| {
                ServiceError::not_present(format!("user {friend_id} is not a friend of user {id}"))
            })?;

        self.friendships.delete(&row);
        self.uow.save()?;
        Ok(())
    }

    /// All accounts, public representation.
    pub fn get_all_users(&self) -> Vec<UserResponse> {
        self.users.all().iter().map(UserResponse::from).collect()
    }

    fn find_user(&self, id: i32) -> Option<User> {
        self.users.all().into_iter().find(|u| u.id == id)
    }

    fn is_favorite(&self, user_id: i32, video_id: i32) -> bool {
        self.favorites
            .all()
            .iter()
            .any(|fav| fav.user_id == user_id && fav.video_id == video_id)
    }

    fn is_friend(&self, user_id: i32, friend_id: i32) -> bool {
        self.friendships
            .all()
            .iter()
            .any(|f| f.user_id == user_id && f.friend_id == friend_id)
    }
}
