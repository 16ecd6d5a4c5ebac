//! HTTP API
//!
//! Exposes the translation pipeline over three JSON endpoints:
//!
//! | Method | Path | Response |
//! |--------|------|----------|
//! | `POST` | `/api/chat` | translation payload, or 400 on a blank message |
//! | `GET` | `/api/health` | `{"status": "ok", "timestamp": ...}` |
//! | `GET` | `/api/tools` | the tool catalog |

mod routes;

pub use routes::{AppState, router, serve};
