//! Medi-Bot Server Library
//!
//! This crate exposes the application modules so integration tests can build
//! the router with injected services. The server binary is in main.rs.
//!
//! # Modules
//!
//! - `catalog`: medicine table, loader, and query resolver
//! - `ocr`: text recognition providers for uploaded prescriptions
//! - `summary`: prompt assembly and the text-generation collaborator
//! - `routes`: HTTP surface (JSON API + server-rendered pages)

pub mod catalog;
pub mod config;
pub mod error;
pub mod html;
pub mod imaging;
pub mod ocr;
pub mod pages;
pub mod routes;
pub mod state;
pub mod summary;
