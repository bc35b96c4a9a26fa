//! # guard-service
//!
//! Application layer: ban/kick and warning use cases, DTOs and the
//! dependency container shared by the HTTP handlers.

pub mod dto;
pub mod services;

pub use dto::{
    HealthChecks, HealthResponse, ModerationRequest, ModerationResponse, ReadinessResponse,
    WarnRequest,
};
pub use services::{
    strip_markup, AccessService, BanOrKick, ManagedGroup, ModerationService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, WarningService,
};
