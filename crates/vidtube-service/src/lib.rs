//! # vidtube-service
//!
//! Application layer: business rules, services, and DTOs.
//!
//! Services are constructed per request around a [`vidtube_db::UnitOfWork`]
//! and enforce the relationship-integrity rules (existence checks, duplicate
//! checks, token ownership) before staging mutations. Every write path ends
//! in a single `save()` whose failure is propagated, never swallowed.

pub mod dto;
pub mod services;

pub use dto::{
    AddFavoriteRequest, AddFriendRequest, CreateUserRequest, CreateVideoRequest,
    CreatedUserResponse, KingResponse, LoginRequest, ProfileResponse, TokenResponse,
    UpdateUserRequest, UserResponse, VideoResponse,
};
pub use services::{KingsService, ServiceError, ServiceResult, UserService, VideoService};
