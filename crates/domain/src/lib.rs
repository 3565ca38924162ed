//! # accounts-domain
//!
//! Pure domain model for the account service.
//!
//! ## Responsibilities
//! - Foundational types: the integer [`AccountId`](id::AccountId), error conventions, dates
//! - Define the **Account** record and its wire representation
//! - Parse and validate request payloads into [`AccountData`](account::AccountData)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! Persistence is expressed as a trait in the `app` crate (port).

pub mod error;
pub mod id;
pub mod time;

pub mod account;
