//! # mounti-entity
//!
//! Domain entity models for the Mounti marketplace as seen by a client.
//! Every struct in this crate mirrors a backend JSON shape. Entities
//! serialize in snake_case and deserialize from either backend revision
//! (snake_case or camelCase fields, any-case enum tags).

pub mod auth;
pub mod booking;
pub mod notification;
pub mod trip;
pub mod user;
pub mod validation;
