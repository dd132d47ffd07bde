//! Types mirroring the Questlog GraphQL surface the client consumes:
//! domain fragments, filter and order inputs, connection envelopes, and
//! the bulk-create mutation payloads.

pub mod bulk;
pub mod connection;
pub mod filter;
pub mod types;

pub use bulk::{ApiError, BulkCreateRequest, BulkCreateResult};
pub use connection::{Connection, Edge, PageInfo};
pub use filter::{AchievementFilter, AchievementOrder, GameFilter, GameOrder};
pub use types::{
  AchievementRef, AchievementSummary, EarnedAchievement, GameRef, GameSummary, TrophyAward,
  UserSummary,
};
