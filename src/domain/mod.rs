//! Domain Layer
//!
//! The rules of a photo library: what a project is, which files count as
//! selects, and which permission state each file should converge to.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (ProjectDirectory)
//! - `value_objects/` - Immutable value types (Stage, ContentHash, FileMode)
//! - `services/` - Domain services (ProjectLocator, PermissionPolicy)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - disk and process access goes through `ports`
//! 2. **Ports & Adapters** - infrastructure provides the implementations

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
