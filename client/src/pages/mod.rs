//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Member-only pages wrap their body in `RequireSession`.

pub mod create_shop;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod shop_products;
