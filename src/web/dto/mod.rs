//! Form payloads accepted by the web pages.

pub mod login;
