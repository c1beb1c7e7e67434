//! # moonscribe
//! Ask a hosted chat model one question and keep the answer as Markdown.
//!
//! The binary prints a banner, reads one line from stdin, sends it with a
//! fixed system prompt to an OpenAI-compatible `chat/completions` endpoint
//! (Moonshot by default), prints the first completion and writes the exchange
//! to `<YYYY-MM-DD_HH-MM-SS><suffix>` in the output directory.
//!
//! ## Usage
//! ```shell
//! $ export MOONSHOT_API_KEY=sk-...
//! $ moonscribe                 # game research analysis profile
//! $ moonscribe -p chat -o notes
//! ```
//!
//! ## Environment Variables:
//! - `MOONSHOT_API_KEY`: Required. Bearer token for the API.
//! - `MOONSHOT_BASE_URL`: Optional. API base URL (default: `https://api.moonshot.cn/v1`).
//! - `MOONSHOT_MODEL`: Optional. Model identifier (default: `moonshot-v1-8k`).
//! - `MOONSCRIBE_LOG`: Optional. Log filter for stderr diagnostics (default: `warn`).
//!
pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod openai;
pub mod persist;
pub mod session;
pub mod template;
