//! Core library exports for the Newsdesk service.
//!
//! This crate exposes the domain model, Diesel models, repositories, DTOs,
//! routes and service layers used by the Newsdesk web application.

pub mod db;
pub mod domain;
pub mod dto;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;
