//! buddyterm - A Terminal User Interface (TUI) for the BuddyScript social network
//!
//! This library provides a complete terminal-based client for a BuddyScript
//! server: logging in, reading and writing the post feed, threaded comments
//! with likes, friend requests, and profile and friend search. It includes
//! an authenticated API client with transparent token refresh and a rich
//! interactive UI built with Ratatui.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`api`] - Authenticated API client and payload models
//! * [`config`] - Application configuration management
//! * [`credentials`] - Token and session persistence
//! * [`service`] - Data layer between the UI and the API
//! * [`ui`] - Terminal user interface components

/// Authenticated API client: request plumbing, token refresh, endpoints
pub mod api;

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Credential storage: access/refresh tokens plus the cached profile
pub mod credentials;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Session service: the data layer every screen talks to
pub mod service;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling and other helpers
pub mod utils;

// Re-export the core client types for convenient access
pub use api::{ApiClient, ApiError};
pub use credentials::{CredentialStore, FileCredentialStore, MemoryCredentialStore};
