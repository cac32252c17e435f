//! Server-side API backend and business logic.
//!
//! This module contains the complete backend: HTTP and WebSocket endpoints, business
//! rules, data access and the reminder scheduler. It uses Axum as the web framework and
//! SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business rules spanning several repositories, notification fan-out
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and validated parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session wrapper and band permission guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool, notification hub)
//! - **Startup** (`startup`) - Tracing, database, session and CORS setup
//! - **Router** (`router`) - Route table, middleware stack and API documentation
//! - **Scheduler** (`scheduler/`) - Cron job sending rehearsal reminders
//!
//! # Request Flow
//!
//! 1. **Router** receives the request and routes it to a controller
//! 2. **Middleware** loads the session and checks band permissions
//! 3. **Controller** validates the DTO into params and calls a service
//! 4. **Service** applies business rules and calls repositories
//! 5. **Data** queries the database and returns domain models
//! 6. **Controller** publishes a band notification for mutations and returns the DTO

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
