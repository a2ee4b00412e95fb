//! Portfolio TUI - a developer portfolio in the terminal
//!
//! Browses services, technologies, experience and projects, and sends
//! messages through the contact form.

pub mod app;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod mailer;
mod platform;
pub mod state;
pub mod ui;
