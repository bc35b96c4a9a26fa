//! Business logic services
//!
//! Moderation use cases and the dependency container they run against.

pub mod access;
pub mod context;
pub mod error;
pub mod markup;
pub mod moderation;
pub mod warning;

pub use access::{AccessService, ManagedGroup};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use markup::strip_markup;
pub use moderation::{BanOrKick, ModerationService};
pub use warning::WarningService;
