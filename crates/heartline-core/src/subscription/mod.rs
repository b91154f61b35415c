//! Subscription domain module.
//!
//! # Module Structure
//!
//! - `tier`: Subscription tiers and the feature list they gate
//! - `entitlement`: The single gating predicate used by every view
//! - `plan`: Static plan catalog shown by the paywall and settings
//! - `service`: Backend interface for changing tiers

mod entitlement;
mod plan;
mod service;
mod tier;

pub use entitlement::{Entitlements, GatingPolicy};
pub use plan::{SubscriptionPlan, plan_for, plans};
pub use service::SubscriptionService;
pub use tier::{Feature, Tier};
